//! Target word source.

use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::error::{WbResult, WordBuilderError};

pub const DEFAULT_WORDS: [&str; 8] = [
    "PYTHON", "GAME", "MATRIX", "HACKER", "CODE", "CYBER", "NEON", "RAIN",
];

/// Non-empty list of uppercase target words. Cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// Loads `path`, falling back to [`DEFAULT_WORDS`] when the file is
    /// missing, unreadable or has no usable lines.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_words(path) {
            Ok(words) => {
                info!(path = %path.display(), count = words.len(), "loaded word list");
                Self { words: words.into() }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default word list");
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Normalizes `words` the same way as file lines. `None` if nothing is left.
    pub fn from_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().filter_map(|w| normalize(w.as_ref())).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words: words.into() })
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Uniform pick, with replacement.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}

fn read_words(path: &Path) -> WbResult<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let words: Vec<String> = text.lines().filter_map(normalize).collect();
    if words.is_empty() {
        return Err(WordBuilderError::EmptyWordList(path.to_path_buf()));
    }
    Ok(words)
}
