//! Tunable parameters for the analysis pipeline

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::keylength::kasiski::SEGMENT_LENGTH;

/// Limits and parameters applied before and during analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    /// Length of the windows compared by the repetition scan
    pub segment_length: usize,
    /// Shortest ciphertext accepted (the coincidence index needs N >= 2)
    pub min_text_length: usize,
    /// Longest ciphertext accepted; the repetition scan is quadratic
    pub max_text_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            segment_length: SEGMENT_LENGTH,
            min_text_length: 2,
            max_text_length: 20_000,
        }
    }
}

impl AnalysisConfig {
    /// Check that the parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.segment_length == 0 {
            return Err(AnalysisError::InvalidSegmentLength);
        }
        if self.min_text_length < 2 {
            return Err(AnalysisError::InvalidConfig(
                "Minimum text length must be at least 2".to_string(),
            ));
        }
        if self.max_text_length < self.min_text_length {
            return Err(AnalysisError::InvalidConfig(
                "Maximum text length is below the minimum".to_string(),
            ));
        }
        Ok(())
    }
}

/// Thresholds used by [`crate::english::Dictionary::is_english`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnglishThresholds {
    /// Minimum percentage of tokens that must be dictionary words
    pub word_percentage: f64,
    /// Minimum percentage of characters that must be letters or whitespace
    pub letter_percentage: f64,
}

impl Default for EnglishThresholds {
    fn default() -> Self {
        Self {
            word_percentage: 20.0,
            letter_percentage: 85.0,
        }
    }
}
