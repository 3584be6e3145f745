//! Merging Kasiski candidates with the Friedman estimate

use std::collections::BTreeSet;

use log::{debug, warn};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::keylength::{estimated_key_length, kasiski_examine};
use crate::utils::validate_ciphertext;

/// Which evidence produced the ordered guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessSource {
    /// Kasiski candidates ordered by closeness to the Friedman estimate
    Combined,
    /// Friedman estimate unavailable, Kasiski candidates in ascending order
    KasiskiOnly,
    /// No Kasiski candidates, the Friedman estimate used directly
    FriedmanOnly,
}

/// Key-length evidence gathered for one ciphertext
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyLengthGuesses {
    pub kasiski: Vec<usize>,
    pub friedman: Option<i64>,
    pub ordered: Vec<usize>,
    pub source: GuessSource,
}

impl KeyLengthGuesses {
    /// Best guess, if any
    pub fn first(&self) -> Option<usize> {
        self.ordered.first().copied()
    }

    /// Guesses in order that can split a text of `text_length` letters.
    ///
    /// Kasiski candidates come from scaled distances and may exceed the text
    /// length; those are skipped here.
    pub fn usable(&self, text_length: usize) -> impl Iterator<Item = usize> + '_ {
        self.ordered
            .iter()
            .copied()
            .filter(move |&k| k <= text_length)
    }
}

/// Sort candidates by absolute distance to `estimate`.
///
/// The sort is stable, so equal distances keep the ascending set order.
pub fn order_by_estimate(candidates: &BTreeSet<usize>, estimate: i64) -> Vec<usize> {
    let mut ordered: Vec<usize> = candidates.iter().copied().collect();
    ordered.sort_by_key(|&n| (n as i64 - estimate).unsigned_abs());
    ordered
}

/// Combine both sources of evidence, falling back to whichever is available.
///
/// `text_length` bounds a Friedman-only guess to a usable key length.
pub fn reconcile(
    candidates: &BTreeSet<usize>,
    estimate: Option<i64>,
    text_length: usize,
) -> Result<KeyLengthGuesses> {
    let kasiski: Vec<usize> = candidates.iter().copied().collect();

    let (ordered, source) = match estimate {
        Some(estimate) if !candidates.is_empty() => {
            (order_by_estimate(candidates, estimate), GuessSource::Combined)
        }
        None if !candidates.is_empty() => (kasiski.clone(), GuessSource::KasiskiOnly),
        Some(estimate) if estimate >= 1 && estimate as usize <= text_length => {
            (vec![estimate as usize], GuessSource::FriedmanOnly)
        }
        _ => {
            warn!(
                "No key-length evidence (Kasiski empty, Friedman {:?})",
                estimate
            );
            return Err(AnalysisError::InsufficientEvidence);
        }
    };

    debug!("Key-length guesses {:?} from {:?}", ordered, source);
    Ok(KeyLengthGuesses {
        kasiski,
        friedman: estimate,
        ordered,
        source,
    })
}

/// Run both estimators on `text` and reconcile them
pub fn guess_key_lengths(text: &str, config: &AnalysisConfig) -> Result<KeyLengthGuesses> {
    config.validate()?;
    validate_ciphertext(text, config)?;

    let candidates = kasiski_examine(text, config.segment_length)?;
    let estimate = match estimated_key_length(text) {
        Ok(estimate) => Some(estimate),
        Err(AnalysisError::EstimateUnavailable) => None,
        Err(e) => return Err(e),
    };

    reconcile(&candidates, estimate, text.len())
}

/// Candidate key lengths for `text`, best first, using the default configuration
pub fn key_lengths(text: &str) -> Result<Vec<usize>> {
    guess_key_lengths(text, &AnalysisConfig::default()).map(|guesses| guesses.ordered)
}
