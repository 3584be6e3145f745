//! Dictionary-backed check of whether a candidate plaintext reads as English
//!
//! The word list is loaded once into a [`Dictionary`] and reused for every
//! message checked against it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::config::EnglishThresholds;
use crate::error::{AnalysisError, Result};

/// Characters kept when measuring how "letter-like" a message is
fn is_letter_or_space(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '\t' | '\n')
}

/// A set of known words, stored uppercased
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a newline-delimited word list from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AnalysisError::DictionaryError(format!("{}: {}", path.display(), e))
        })?;
        let dictionary = Self::from_word_list(&content);
        debug!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Build a dictionary from newline-delimited text; blank lines are skipped
    pub fn from_word_list(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_uppercase)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Fraction of the message's whitespace-separated tokens found in the dictionary.
    ///
    /// Non-letter characters are dropped before splitting; a message with no
    /// tokens scores 0.0.
    pub fn word_match_ratio(&self, message: &str) -> f64 {
        let cleaned: String = message
            .to_uppercase()
            .chars()
            .filter(|&c| is_letter_or_space(c))
            .collect();
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        if tokens.is_empty() {
            return 0.0;
        }

        let matches = tokens.iter().filter(|t| self.words.contains(**t)).count();
        matches as f64 / tokens.len() as f64
    }

    /// Whether `message` passes both the word and the letter threshold
    pub fn is_english(&self, message: &str, thresholds: &EnglishThresholds) -> bool {
        let total = message.chars().count();
        if total == 0 {
            return false;
        }

        let words_match = self.word_match_ratio(message) * 100.0 >= thresholds.word_percentage;
        let letters = message.chars().filter(|&c| is_letter_or_space(c)).count();
        let letters_match = letters as f64 / total as f64 * 100.0 >= thresholds.letter_percentage;

        words_match && letters_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_word_list("the\nQUICK\nbrown\n\n  fox  \n")
    }

    #[test]
    fn test_from_word_list() {
        let dict = dictionary();
        assert_eq!(dict.len(), 4);
        assert!(dict.contains("FOX"));
        assert!(dict.contains("quick"));
        assert!(!dict.contains("DOG"));
    }

    #[test]
    fn test_word_match_ratio() {
        let dict = dictionary();
        assert_eq!(dict.word_match_ratio("The quick red fox!"), 0.75);
        assert_eq!(dict.word_match_ratio("1234 ..."), 0.0);
        assert_eq!(dict.word_match_ratio(""), 0.0);
    }

    #[test]
    fn test_is_english() {
        let dict = dictionary();
        let thresholds = EnglishThresholds::default();
        assert!(dict.is_english("the quick brown fox jumps", &thresholds));
        assert!(!dict.is_english("XQZT VBNM PLKJ", &thresholds));
        assert!(!dict.is_english("", &thresholds));
    }

    #[test]
    fn test_is_english_letter_threshold() {
        let dict = dictionary();
        let thresholds = EnglishThresholds::default();
        // every token is a word, but most characters are digits
        assert!(!dict.is_english("the 1234567890 fox", &thresholds));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Dictionary::load("/nonexistent/dictionary.txt"),
            Err(AnalysisError::DictionaryError(_))
        ));
    }
}
