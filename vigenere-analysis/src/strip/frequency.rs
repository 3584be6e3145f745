//! Observed letter frequencies of a strip and their rescaling onto the reference range

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::reference::ReferenceDistribution;

/// Percentage of each letter observed in a strip.
///
/// Letters that never occur have no entry; they take no part in
/// normalization or ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyDistribution {
    percentages: BTreeMap<char, f64>,
}

impl FrequencyDistribution {
    /// Profile a strip: count / total * 100 for every distinct character
    pub fn profile(strip: &str) -> Result<Self> {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for c in strip.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }

        let total: usize = counts.values().sum();
        if total == 0 {
            return Err(AnalysisError::EmptyStrip);
        }

        let percentages = counts
            .into_iter()
            .map(|(c, n)| (c, n as f64 / total as f64 * 100.0))
            .collect();
        Ok(Self { percentages })
    }

    pub fn get(&self, letter: char) -> Option<f64> {
        self.percentages.get(&letter).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.percentages.iter().map(|(&c, &f)| (c, f))
    }

    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }

    /// Sum of all present percentages (100 up to rounding)
    pub fn total(&self) -> f64 {
        self.percentages.values().sum()
    }

    /// Most frequent letter; ties go to the alphabetically first
    pub fn dominant(&self) -> Option<(char, f64)> {
        self.iter()
            .fold(None, |best: Option<(char, f64)>, (c, f)| match best {
                Some((_, bf)) if bf >= f => best,
                _ => Some((c, f)),
            })
    }

    /// Rescale the observed values so their min and max coincide with the
    /// reference table's min and max:
    ///
    /// (value - obs_min) / (obs_max - obs_min) * (ref_max - ref_min) + ref_min
    ///
    /// # Errors
    ///
    /// `UniformStrip` when every observed value is equal (a single distinct
    /// letter, or all letters equally frequent); `EmptyStrip` if nothing was
    /// observed.
    pub fn normalize(&self, reference: &ReferenceDistribution) -> Result<NormalizedDistribution> {
        if self.percentages.is_empty() {
            return Err(AnalysisError::EmptyStrip);
        }
        let obs_min = self.percentages.values().copied().fold(f64::INFINITY, f64::min);
        let obs_max = self.percentages.values().copied().fold(f64::NEG_INFINITY, f64::max);

        let spread = obs_max - obs_min;
        if spread == 0.0 {
            return Err(AnalysisError::UniformStrip { frequency: obs_max });
        }

        let ref_min = reference.min();
        let ref_range = reference.max() - ref_min;
        let values = self
            .iter()
            .map(|(c, value)| (c, (value - obs_min) / spread * ref_range + ref_min))
            .collect();

        Ok(NormalizedDistribution { values })
    }
}

/// Observed frequencies mapped onto the reference table's value range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDistribution {
    values: BTreeMap<char, f64>,
}

impl NormalizedDistribution {
    pub fn get(&self, letter: char) -> Option<f64> {
        self.values.get(&letter).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.values.iter().map(|(&c, &f)| (c, f))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ENGLISH;

    #[test]
    fn test_profile_percentages() {
        let dist = FrequencyDistribution::profile("AABC").unwrap();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.get('A'), Some(50.0));
        assert_eq!(dist.get('B'), Some(25.0));
        assert_eq!(dist.get('Z'), None);
        assert!((dist.total() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_profile_single_letter() {
        let dist = FrequencyDistribution::profile("AAAAA").unwrap();
        assert_eq!(dist.get('A'), Some(100.0));
        assert_eq!(dist.len(), 1);
    }

    #[test]
    fn test_profile_empty_strip() {
        assert_eq!(
            FrequencyDistribution::profile(""),
            Err(AnalysisError::EmptyStrip)
        );
    }

    #[test]
    fn test_dominant() {
        let dist = FrequencyDistribution::profile("XYYZZ").unwrap();
        assert_eq!(dist.dominant().map(|(c, _)| c), Some('Y'));
    }

    #[test]
    fn test_normalize_maps_onto_reference_range() {
        let dist = FrequencyDistribution::profile("AAAABBC").unwrap();
        let normalized = dist.normalize(&ENGLISH).unwrap();
        assert!((normalized.get('A').unwrap() - 12.7).abs() < 1e-9);
        assert!((normalized.get('C').unwrap() - 0.074).abs() < 1e-9);

        // B: (2/7 - 1/7) / (4/7 - 1/7) = 1/3 of the way up
        let expected_b = 0.074 + (12.7 - 0.074) / 3.0;
        assert!((normalized.get('B').unwrap() - expected_b).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_single_value_is_degenerate() {
        let dist = FrequencyDistribution::profile("AAAAA").unwrap();
        assert!(matches!(
            dist.normalize(&ENGLISH),
            Err(AnalysisError::UniformStrip { frequency }) if frequency == 100.0
        ));
    }

    #[test]
    fn test_normalize_equal_frequencies_is_degenerate() {
        let dist = FrequencyDistribution::profile("ABCABC").unwrap();
        assert!(matches!(
            dist.normalize(&ENGLISH),
            Err(AnalysisError::UniformStrip { .. })
        ));
    }
}
