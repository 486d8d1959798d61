use std::collections::HashSet;
use std::path::Path;

use crate::error::{LabyrinthError, Result};

/// Read-only set of uppercase words. Membership is the only query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// An empty dictionary rejects every word.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a newline-delimited word list. Entries are trimmed and upper-cased;
    /// blank lines are dropped.
    pub fn from_word_list(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_uppercase)
            .collect();
        Self { words }
    }

    /// Load a word list from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LabyrinthError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_word_list(&text);
        log::info!("Dictionary loaded with {} words", dictionary.len());
        Ok(dictionary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.into().to_uppercase()).collect(),
        }
    }
}
