//! Kasiski examination: repeated segments, their distances and the divisors of those distances

use std::collections::BTreeSet;

use log::debug;
use num_integer::Integer;

use crate::error::{AnalysisError, Result};

/// Default window length compared by the repetition scan
pub const SEGMENT_LENGTH: usize = 3;

/// Repeated segments and the offsets where each one starts.
///
/// Entries appear in order of first occurrence; only segments seen at least
/// twice are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatTable {
    entries: Vec<(String, Vec<usize>)>,
}

impl RepeatTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offsets recorded for `segment`
    pub fn get(&self, segment: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|(s, _)| s == segment)
            .map(|(_, offsets)| offsets.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(s, offsets)| (s.as_str(), offsets.as_slice()))
    }

    /// Consecutive offset differences for every repeated segment
    pub fn distance_sets(&self) -> Vec<Vec<usize>> {
        self.entries
            .iter()
            .filter(|(_, offsets)| offsets.len() > 1)
            .map(|(_, offsets)| distances(offsets))
            .collect()
    }
}

/// Find segments of `segment_length` that occur more than once.
///
/// A window is taken at every offset and every window is compared against
/// every later one. The offset recorded for the i-th window is
/// `i * segment_length`, so distances (and the candidates derived from them)
/// are scaled by the segment length and can exceed the text length.
pub fn find_repeats(text: &str, segment_length: usize) -> Result<RepeatTable> {
    if segment_length == 0 {
        return Err(AnalysisError::InvalidSegmentLength);
    }

    let segments: Vec<&[u8]> = text.as_bytes().windows(segment_length).collect();
    let mut claimed = vec![false; segments.len()];
    let mut entries = Vec::new();

    for i in 0..segments.len() {
        if claimed[i] {
            continue;
        }

        let mut offsets = vec![i * segment_length];
        for j in (i + 1)..segments.len() {
            if segments[j] == segments[i] {
                claimed[j] = true;
                offsets.push(j * segment_length);
            }
        }

        if offsets.len() > 1 {
            let segment = String::from_utf8_lossy(segments[i]).into_owned();
            entries.push((segment, offsets));
        }
    }

    debug!(
        "Repetition scan: {} windows, {} repeated segments",
        segments.len(),
        entries.len()
    );
    Ok(RepeatTable { entries })
}

/// Differences between consecutive offsets
pub fn distances(offsets: &[usize]) -> Vec<usize> {
    offsets.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Greatest common divisor of all values, `None` for an empty slice
pub fn gcd_of(values: &[usize]) -> Option<usize> {
    values.iter().copied().reduce(|a, b| a.gcd(&b))
}

/// Every divisor of `n` greater than one, `n` included
pub fn divisors(n: usize) -> BTreeSet<usize> {
    let mut result = BTreeSet::new();
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            result.insert(i);
            result.insert(n / i);
        }
        i += 1;
    }
    if n > 1 {
        result.insert(n);
    }
    result
}

/// Union of the divisors of each distance set's GCD.
///
/// A GCD of 1 (or an empty distance set) contributes nothing.
pub fn candidates_from_distances(distance_sets: &[Vec<usize>]) -> BTreeSet<usize> {
    distance_sets
        .iter()
        .filter_map(|set| gcd_of(set))
        .filter(|&gcd| gcd > 1)
        .flat_map(divisors)
        .collect()
}

/// Kasiski candidate key lengths for `text`
pub fn kasiski_examine(text: &str, segment_length: usize) -> Result<BTreeSet<usize>> {
    let repeats = find_repeats(text, segment_length)?;
    let candidates = candidates_from_distances(&repeats.distance_sets());
    debug!("Kasiski candidates: {:?}", candidates);
    Ok(candidates)
}
