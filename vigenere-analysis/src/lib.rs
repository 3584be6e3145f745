//! # Vigenere Analysis Library
//!
//! Statistical cryptanalysis for polyalphabetic substitution ciphers of the
//! Vigenere family.
//!
//! ## Pipeline
//!
//! - **Kasiski examination** - repeated segments, distances, GCD divisors
//! - **Friedman test** - index of coincidence and a closed-form key-length estimate
//! - **Reconciliation** - Kasiski candidates ordered by closeness to the estimate
//! - **Strips** - one subsequence per key position
//! - **Ranking** - per observed letter, reference letters ordered by frequency closeness
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{Analyzer, AnalysisConfig};
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default())?;
//! let ciphertext = "LXFOPVEFRNHRLXFOPVEFRNHR";
//!
//! let guesses = analyzer.key_lengths(ciphertext)?;
//! let report = analyzer.analyze(ciphertext, guesses.ordered[0])?;
//! println!("{}", report);
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! The pipeline stops at ranked candidate lists; picking a key is left to the caller.

// Public modules
pub mod config;
pub mod english;
pub mod error;
pub mod keylength;
pub mod reference;
pub mod report;
pub mod strip;
pub mod utils;

// Re-exports for easy access
pub use config::{AnalysisConfig, EnglishThresholds};
pub use english::Dictionary;
pub use error::{AnalysisError, Result};
pub use keylength::{key_lengths, GuessSource, KeyLengthGuesses};
pub use reference::{ReferenceDistribution, ENGLISH};
pub use report::{AnalysisReport, StripAnalysis, StripOutcome};
pub use strip::{CandidateRanking, FrequencyDistribution, NormalizedDistribution};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the analysis stages with one configuration and reference table.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{Analyzer, AnalysisConfig};
///
/// let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
/// let report = analyzer.analyze("ABABABABAB", 2).unwrap();
/// assert_eq!(report.strips.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    reference: &'static ReferenceDistribution,
}

impl Analyzer {
    /// Create an analyzer using the English reference table
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Self::with_reference(config, ReferenceDistribution::english())
    }

    pub fn with_reference(
        config: AnalysisConfig,
        reference: &'static ReferenceDistribution,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, reference })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Kasiski and Friedman evidence, reconciled
    pub fn key_lengths(&self, text: &str) -> Result<KeyLengthGuesses> {
        keylength::guess_key_lengths(text, &self.config)
    }

    /// Candidate rankings for every strip of `key_length`
    pub fn analyze(&self, text: &str, key_length: usize) -> Result<AnalysisReport> {
        utils::validate_ciphertext(text, &self.config)?;
        report::analyze_strips(text, key_length, self.reference)
    }

    /// Analyze using the `rank`-th key-length guess (0 = best).
    ///
    /// Only guesses no longer than the text are ranked; see
    /// [`KeyLengthGuesses::usable`].
    pub fn analyze_guess(&self, text: &str, rank: usize) -> Result<AnalysisReport> {
        let guesses = self.key_lengths(text)?;
        let key_length = guesses
            .usable(text.chars().count())
            .nth(rank)
            .ok_or(AnalysisError::InsufficientEvidence)?;
        report::analyze_strips(text, key_length, self.reference)
    }

    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }
}
