use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use prefecture_quiz::{AppState, CHOICE_COUNT, NamePool};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env = "QUIZ_ADDRESS", default_value = "127.0.0.1:5001")]
    address: String,

    /// Name data file: a flat JSON array of names, or a GeoJSON
    /// FeatureCollection with `properties.name` entries.
    #[arg(
        short,
        long,
        env = "QUIZ_DATA",
        default_value = "static/data/prefectures.json"
    )]
    data: PathBuf,

    /// Directory holding the quiz page and its assets.
    #[arg(short, long, env = "QUIZ_STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "prefecture_quiz=debug,tower_http=debug,info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    // Load-once: a bad data file is fatal here, not a degraded pool.
    let pool = NamePool::from_file(&args.data)
        .with_context(|| format!("loading names from {}", args.data.display()))?;
    tracing::info!(count = pool.len(), data = %args.data.display(), "loaded name pool");
    if pool.len() < CHOICE_COUNT {
        tracing::warn!("pool has fewer than {CHOICE_COUNT} names, quiz requests will fail");
    }

    let app = prefecture_quiz::router(AppState {
        pool: Arc::new(pool),
        static_dir: args.static_dir,
    });

    let listener = TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
