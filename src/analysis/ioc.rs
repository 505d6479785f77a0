//! Index of coincidence scoring.
//!
//! The normalised index of coincidence compares how often two symbols drawn
//! from the text coincide against the uniform expectation:
//!
//! ```text
//! IoC = Σ nᵢ(nᵢ − 1) / (N(N − 1) / 26)
//! ```
//!
//! Uniformly random text scores about 1.0, natural language higher.

use crate::alphabet::ALPHABET_SIZE;

/// Typical normalised IoC of English plaintext.
pub const ENGLISH_IOC: f64 = 1.73;

/// Typical normalised IoC of German plaintext.
pub const GERMAN_IOC: f64 = 2.05;

/// Normalised index of coincidence of a text over `'A'..='Z'`.
///
/// Symbols outside the alphabet count towards the length but never
/// coincide. Texts shorter than two symbols score 0.
///
/// # Examples
///
/// ```
/// use enigma_engine::analysis::index_of_coincidence;
///
/// assert_eq!(index_of_coincidence("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), 0.0);
/// assert!(index_of_coincidence("AAAAB") > 10.0);
/// ```
pub fn index_of_coincidence(text: &str) -> f64 {
    let mut counts = [0u64; ALPHABET_SIZE];
    let mut len = 0u64;
    for symbol in text.chars() {
        if symbol.is_ascii_uppercase() {
            counts[(symbol as u8 - b'A') as usize] += 1;
        }
        len += 1;
    }
    score(&counts, len)
}

/// Normalised index of coincidence of symbol indices.
///
/// Indices outside `[0, 26)` count towards the length but never coincide.
pub fn index_of_coincidence_indices(indices: &[u8]) -> f64 {
    let mut counts = [0u64; ALPHABET_SIZE];
    for &index in indices {
        if let Some(count) = counts.get_mut(index as usize) {
            *count += 1;
        }
    }
    score(&counts, indices.len() as u64)
}

fn score(counts: &[u64; ALPHABET_SIZE], len: u64) -> f64 {
    if len < 2 {
        return 0.0;
    }
    let numerator: u64 = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    let denominator = (len * (len - 1)) as f64 / ALPHABET_SIZE as f64;
    numerator as f64 / denominator
}
