//! Expected letter frequencies of the target language

/// Fixed letter -> percentage table, ordered from most to least common.
///
/// The entry order is significant: candidate rankings break ties by it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDistribution {
    entries: [(char, f64); 26],
}

/// Published English letter frequencies (percent)
pub static ENGLISH: ReferenceDistribution = ReferenceDistribution::new([
    ('E', 12.7), ('T', 9.1), ('A', 8.2), ('O', 7.5),
    ('I', 7.0), ('N', 6.7), ('S', 6.3), ('R', 6.0), ('H', 6.1),
    ('D', 4.3), ('L', 4.0), ('C', 2.8), ('U', 2.8), ('M', 2.4),
    ('W', 2.4), ('F', 2.2), ('G', 2.0), ('Y', 2.0), ('P', 1.9),
    ('B', 1.5), ('V', 0.98), ('K', 0.77), ('X', 0.15), ('J', 0.15),
    ('Q', 0.095), ('Z', 0.074),
]);

impl ReferenceDistribution {
    pub const fn new(entries: [(char, f64); 26]) -> Self {
        Self { entries }
    }

    /// The process-wide English table
    pub fn english() -> &'static Self {
        &ENGLISH
    }

    /// Expected percentage for `letter`, if it belongs to the table
    pub fn frequency(&self, letter: char) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|&(_, f)| f)
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn min(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, f)| f)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, f)| f)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_covers_alphabet() {
        let mut letters: Vec<char> = ENGLISH.iter().map(|(c, _)| c).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, alphabet);
    }

    #[test]
    fn test_english_bounds() {
        assert_eq!(ENGLISH.max(), 12.7);
        assert_eq!(ENGLISH.min(), 0.074);
    }

    #[test]
    fn test_frequency_lookup() {
        assert_eq!(ENGLISH.frequency('E'), Some(12.7));
        assert_eq!(ENGLISH.frequency('H'), Some(6.1));
        assert_eq!(ENGLISH.frequency('?'), None);
    }
}
