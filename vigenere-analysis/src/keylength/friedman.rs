//! Friedman test: index of coincidence and the closed-form key-length estimate

use log::{debug, warn};

use crate::error::{AnalysisError, Result};
use crate::utils::letter_index;

/// Expected index of coincidence for English plaintext
pub const ENGLISH_IC: f64 = 0.065;

/// Index of coincidence of uniformly random letters (1/26)
pub const RANDOM_IC: f64 = 0.038;

/// Counts the occurrences of each letter A-Z in the given text.
///
/// # Arguments
///
/// * `text` - The input text to analyze.
///
/// # Returns
///
/// An array of 26 counts for letters A-Z.
pub fn letter_counts(text: &str) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for index in text.chars().filter_map(letter_index) {
        counts[index] += 1;
    }
    counts
}

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// IC = sum(n_i * (n_i - 1)) / (N * (N - 1)), where N is the text length.
///
/// # Errors
///
/// `TextTooShort` when the text has fewer than two characters.
pub fn index_of_coincidence(text: &str) -> Result<f64> {
    let total = text.chars().count();
    if total < 2 {
        return Err(AnalysisError::TextTooShort {
            length: total,
            minimum: 2,
        });
    }

    let numerator: usize = letter_counts(text)
        .iter()
        .map(|&n| n * n.saturating_sub(1))
        .sum();
    let denominator = total * (total - 1);

    Ok(numerator as f64 / denominator as f64)
}

/// Whether the Friedman denominator is exactly zero.
///
/// Scaled by 1000 N (N - 1), the denominator becomes
/// (N - 1)(65 N + 1000 S - 38 N^2) with S = sum(n_i * (n_i - 1)), so the
/// check is done in integers rather than on the rounded float.
fn denominator_collapses(counts: &[usize; 26], total: usize) -> bool {
    let s: u128 = counts.iter().map(|&n| (n * n.saturating_sub(1)) as u128).sum();
    let n = total as u128;
    65 * n + 1000 * s == 38 * n * n
}

/// Friedman key-length estimate as a real number.
///
/// estimate = 0.027 N / ((0.065 - IC) + N (IC - 0.038))
///
/// The value can be negative or very large for short or skewed texts.
///
/// # Errors
///
/// `TextTooShort` as for [`index_of_coincidence`]; `EstimateUnavailable`
/// when the denominator collapses to zero.
pub fn friedman_estimate(text: &str) -> Result<f64> {
    let ic = index_of_coincidence(text)?;
    let total = text.chars().count();

    if denominator_collapses(&letter_counts(text), total) {
        warn!("Friedman estimate unavailable (IC {:.5})", ic);
        return Err(AnalysisError::EstimateUnavailable);
    }

    let n = total as f64;
    let denominator = (ENGLISH_IC - ic) + n * (ic - RANDOM_IC);
    let estimate = 0.027 * n / denominator;
    debug!("Index of coincidence {:.5}, Friedman estimate {:.3}", ic, estimate);

    if !estimate.is_finite() {
        warn!("Friedman estimate unavailable (IC {:.5})", ic);
        return Err(AnalysisError::EstimateUnavailable);
    }
    Ok(estimate)
}

/// Friedman estimate truncated toward zero
pub fn estimated_key_length(text: &str) -> Result<i64> {
    friedman_estimate(text).map(|estimate| estimate.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_text(copies: usize) -> String {
        ('A'..='Z')
            .flat_map(|c| std::iter::repeat(c).take(copies))
            .collect()
    }

    #[test]
    fn test_letter_counts() {
        let counts = letter_counts("ABBZ");
        assert_eq!(counts[0], 1);
        assert_eq!(counts[1], 2);
        assert_eq!(counts[25], 1);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }

    #[test]
    fn test_ic_uniform_distribution() {
        let text = uniform_text(10);
        assert_eq!(text.len(), 260);
        let ic = index_of_coincidence(&text).unwrap();
        let expected = (10.0 * 9.0 * 26.0) / (260.0 * 259.0);
        assert!((ic - expected).abs() < 1e-12);
        assert!((ic - 0.0347).abs() < 1e-4);
    }

    #[test]
    fn test_ic_single_letter() {
        assert_eq!(index_of_coincidence("AAAA").unwrap(), 1.0);
    }

    #[test]
    fn test_ic_too_short() {
        assert!(matches!(
            index_of_coincidence("A"),
            Err(AnalysisError::TextTooShort { length: 1, minimum: 2 })
        ));
        assert!(index_of_coincidence("").is_err());
    }

    #[test]
    fn test_estimate_for_uniform_text() {
        // IC below the random level: the denominator goes negative
        let text = uniform_text(10);
        let estimate = friedman_estimate(&text).unwrap();
        assert!(estimate < 0.0);
        assert_eq!(estimated_key_length(&text).unwrap(), estimate.trunc() as i64);
    }

    #[test]
    fn test_estimate_matches_formula() {
        // N = 10, IC = 1: 0.27 / ((0.065 - 1) + 10 * (1 - 0.038))
        let estimate = friedman_estimate("AAAAAAAAAA").unwrap();
        let expected = 0.27 / ((0.065 - 1.0) + 10.0 * (1.0 - 0.038));
        assert!((estimate - expected).abs() < 1e-12);
        assert_eq!(estimated_key_length("AAAAAAAAAA").unwrap(), 0);
    }

    /// 80 letters with S = 238, where 65 * 80 + 1000 * 238 == 38 * 80^2
    fn collapsing_text() -> String {
        let mut text = "A".repeat(10) + &"B".repeat(5);
        for c in 'C'..='W' {
            text.push_str(&c.to_string().repeat(3));
        }
        text + "XX"
    }

    #[test]
    fn test_estimate_unavailable_when_denominator_collapses() {
        let text = collapsing_text();
        assert_eq!(text.len(), 80);
        assert_eq!(
            friedman_estimate(&text),
            Err(AnalysisError::EstimateUnavailable)
        );
        assert_eq!(
            estimated_key_length(&text),
            Err(AnalysisError::EstimateUnavailable)
        );
    }
}
