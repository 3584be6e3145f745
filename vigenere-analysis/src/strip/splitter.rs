//! De-interleaving ciphertext into one strip per key position

use crate::error::{AnalysisError, Result};

/// Splits text into `key_length` strips.
/// Strip `i` holds every character at a position congruent to `i` modulo the key length.
///
/// # Errors
///
/// `InvalidKeyLength` when the key length is zero or exceeds the text length.
pub fn split_strips(text: &str, key_length: usize) -> Result<Vec<String>> {
    let text_length = text.chars().count();
    if key_length == 0 || key_length > text_length {
        return Err(AnalysisError::InvalidKeyLength {
            key_length,
            text_length,
        });
    }

    let mut strips = vec![String::new(); key_length];
    for (i, c) in text.chars().enumerate() {
        strips[i % key_length].push(c);
    }

    Ok(strips)
}

/// Reassembles strips round-robin, the inverse of [`split_strips`]
pub fn interleave<S: AsRef<str>>(strips: &[S]) -> String {
    let mut iters: Vec<_> = strips.iter().map(|s| s.as_ref().chars()).collect();
    let mut result = String::new();
    if iters.is_empty() {
        return result;
    }

    'rounds: loop {
        for chars in iters.iter_mut() {
            match chars.next() {
                Some(c) => result.push(c),
                None => break 'rounds,
            }
        }
    }

    result
}
