use serde::Serialize;

/// Number of choices presented per question.
pub const CHOICE_COUNT: usize = 4;

/// One generated question: four candidate names and the one the client
/// should accept as correct.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    pub correct_answer: String,
    pub choices: Vec<String>,
}

/// The pool is too small to fill four distinct choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsufficientData {
    pub available: usize,
}

impl std::fmt::Display for InsufficientData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "need at least {CHOICE_COUNT} names to build a quiz, have {}",
            self.available
        )
    }
}

impl std::error::Error for InsufficientData {}

/// Generates a question from `pool` with a fresh random source.
pub fn generate(pool: &[String]) -> Result<QuizPayload, InsufficientData> {
    generate_with(pool, &mut fastrand::Rng::new())
}

/// Generates a question from `pool` using the given `rng`, so callers can
/// seed the randomness.
///
/// Draws four distinct names uniformly without replacement, shuffles them
/// (the reservoir sample's output order is biased toward pool order), then
/// picks one of the four as the correct answer.
pub fn generate_with(
    pool: &[String],
    rng: &mut fastrand::Rng,
) -> Result<QuizPayload, InsufficientData> {
    if pool.len() < CHOICE_COUNT {
        return Err(InsufficientData {
            available: pool.len(),
        });
    }

    let mut choices = rng.choose_multiple(pool.iter().cloned(), CHOICE_COUNT);
    rng.shuffle(&mut choices);
    let correct_answer = choices[rng.usize(..choices.len())].clone();

    Ok(QuizPayload {
        correct_answer,
        choices,
    })
}
