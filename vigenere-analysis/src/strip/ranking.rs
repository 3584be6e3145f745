//! Ranking reference letters by frequency closeness

use std::collections::BTreeMap;

use serde::Serialize;

use crate::reference::ReferenceDistribution;
use crate::strip::NormalizedDistribution;

/// All reference letters ordered by |value - expected frequency|, closest first.
///
/// Equal distances keep the reference table order.
pub fn closest_matches(value: f64, reference: &ReferenceDistribution) -> Vec<char> {
    let mut scored: Vec<(char, f64)> = reference
        .iter()
        .map(|(letter, expected)| (letter, (value - expected).abs()))
        .collect();
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.into_iter().map(|(letter, _)| letter).collect()
}

/// Ranked reference letters for every letter observed in a strip.
///
/// This is a plausibility hint only; no letter is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRanking {
    rankings: BTreeMap<char, Vec<char>>,
}

impl CandidateRanking {
    /// Rank candidates for each letter of a normalized distribution
    pub fn rank(normalized: &NormalizedDistribution, reference: &ReferenceDistribution) -> Self {
        let rankings = normalized
            .iter()
            .map(|(letter, value)| (letter, closest_matches(value, reference)))
            .collect();
        Self { rankings }
    }

    /// Ranked candidates for an observed letter
    pub fn get(&self, letter: char) -> Option<&[char]> {
        self.rankings.get(&letter).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[char])> {
        self.rankings.iter().map(|(&c, ranked)| (c, ranked.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Top-ranked reference letter for each observed letter
    pub fn top_candidates(&self) -> BTreeMap<char, char> {
        self.rankings
            .iter()
            .filter_map(|(&c, ranked)| ranked.first().map(|&top| (c, top)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ENGLISH;
    use crate::strip::FrequencyDistribution;

    #[test]
    fn test_closest_match_for_e() {
        let ranked = closest_matches(12.7, &ENGLISH);
        assert_eq!(ranked.len(), 26);
        assert_eq!(ranked[0], 'E');
        assert_eq!(ranked[1], 'T');
    }

    #[test]
    fn test_closest_match_ties_keep_table_order() {
        // C and U both sit at 2.8
        let ranked = closest_matches(2.8, &ENGLISH);
        assert_eq!(&ranked[..2], &['C', 'U']);
    }

    #[test]
    fn test_closest_match_low_value() {
        let ranked = closest_matches(0.0, &ENGLISH);
        assert_eq!(ranked[0], 'Z');
        assert_eq!(*ranked.last().unwrap(), 'E');
    }

    #[test]
    fn test_rank_every_observed_letter() {
        let dist = FrequencyDistribution::profile("QQQQQXXK").unwrap();
        let normalized = dist.normalize(&ENGLISH).unwrap();
        let ranking = CandidateRanking::rank(&normalized, &ENGLISH);

        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking.get('Q').unwrap()[0], 'E');
        assert_eq!(ranking.get('K').unwrap()[0], 'Z');
        assert!(ranking.get('A').is_none());

        let top = ranking.top_candidates();
        assert_eq!(top.get(&'Q'), Some(&'E'));
        assert_eq!(top.len(), 3);
    }
}
