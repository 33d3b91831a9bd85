use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::{fmt, fs};

use serde::Deserialize;

/// Candidate names for quiz answers. Loaded once at startup and never
/// modified afterwards, so handlers share it behind an `Arc` without
/// locking.
#[derive(Debug, Clone, Default)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Reads a pool from a data file, accepting either a flat JSON array of
    /// strings or a GeoJSON FeatureCollection where each feature's
    /// `properties.name` supplies one entry. Features without a name are
    /// skipped; duplicate names are dropped, first occurrence wins.
    pub fn from_file(path: impl AsRef<Path>) -> Result<NamePool, LoadError> {
        let text = fs::read_to_string(path).map_err(LoadError::Io)?;
        let value: serde_json::Value = serde_json::from_str(&text).map_err(LoadError::Parse)?;
        let data: DataFile = serde_json::from_value(value).map_err(|_| LoadError::Format)?;

        let names = match data {
            DataFile::Flat(names) => names,
            DataFile::GeoJson(collection) => collection
                .features
                .into_iter()
                .filter_map(|feature| feature.properties.and_then(|p| p.name))
                .collect(),
        };

        Ok(NamePool::from(names))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for NamePool {
    fn from(names: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();
        Self { names }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DataFile {
    Flat(Vec<String>),
    GeoJson(FeatureCollection),
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

/// Error loading the name data file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid JSON.
    Parse(serde_json::Error),
    /// The JSON is neither an array of strings nor a GeoJSON
    /// FeatureCollection.
    Format,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read data file: {}", e),
            LoadError::Parse(e) => write!(f, "data file is not valid JSON: {}", e),
            LoadError::Format => write!(
                f,
                "data file is neither an array of names nor a GeoJSON FeatureCollection"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Format => None,
        }
    }
}
