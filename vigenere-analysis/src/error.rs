//! Error types for ciphertext analysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid character {found:?} at position {position} (ciphertext must be A-Z only)")]
    InvalidCharacter { found: char, position: usize },

    #[error("Ciphertext too short for analysis ({length} letters, need at least {minimum})")]
    TextTooShort { length: usize, minimum: usize },

    #[error("Ciphertext too long for analysis ({length} letters, limit is {limit})")]
    TextTooLong { length: usize, limit: usize },

    #[error("Invalid segment length (must be > 0)")]
    InvalidSegmentLength,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Friedman estimate unavailable (degenerate denominator)")]
    EstimateUnavailable,

    #[error("Insufficient evidence to propose a key length")]
    InsufficientEvidence,

    #[error("Invalid key length {key_length} for ciphertext of {text_length} letters")]
    InvalidKeyLength { key_length: usize, text_length: usize },

    #[error("Strip is empty")]
    EmptyStrip,

    #[error("Strip too uniform to rank (every observed letter at {frequency:.3}%)")]
    UniformStrip { frequency: f64 },

    #[error("Dictionary error: {0}")]
    DictionaryError(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
