//! Utility functions for preparing ciphertext

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};

/// Keep only ASCII letters, uppercased
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Reject ciphertext outside A-Z or outside the configured length bounds
pub fn validate_ciphertext(text: &str, config: &AnalysisConfig) -> Result<()> {
    if let Some((position, found)) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_uppercase())
    {
        return Err(AnalysisError::InvalidCharacter { found, position });
    }

    let length = text.len();
    if length < config.min_text_length {
        return Err(AnalysisError::TextTooShort {
            length,
            minimum: config.min_text_length,
        });
    }
    if length > config.max_text_length {
        return Err(AnalysisError::TextTooLong {
            length,
            limit: config.max_text_length,
        });
    }

    Ok(())
}

/// Position of an uppercase ASCII letter in the alphabet
pub(crate) fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("J ftn, sbc-SG 42!"), "JFTNSBCSG");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_validate_rejects_lowercase_and_digits() {
        let config = AnalysisConfig::default();
        assert_eq!(
            validate_ciphertext("ABc", &config),
            Err(AnalysisError::InvalidCharacter {
                found: 'c',
                position: 2
            })
        );
        assert!(validate_ciphertext("AB1", &config).is_err());
    }

    #[test]
    fn test_validate_length_bounds() {
        let config = AnalysisConfig {
            max_text_length: 5,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            validate_ciphertext("A", &config),
            Err(AnalysisError::TextTooShort { length: 1, minimum: 2 })
        ));
        assert!(matches!(
            validate_ciphertext("ABCDEF", &config),
            Err(AnalysisError::TextTooLong { length: 6, limit: 5 })
        ));
        assert!(validate_ciphertext("ABCDE", &config).is_ok());
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('a'), None);
    }
}
