//! The fixed 26-symbol alphabet shared by every engine component.
//!
//! Symbols are handled internally as indices `0..26` (`u8`) and displayed as
//! `'A'..='Z'`.

use crate::error::{EnigmaError, Result};

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Alphabet size as a `u8`, for modular arithmetic on indices.
pub(crate) const SIZE: u8 = ALPHABET_SIZE as u8;

/// Converts an uppercase letter to its index.
///
/// # Parameters
/// - `symbol`: The letter to convert.
/// - `offset`: Position of the symbol in its input, reported on error.
///
/// # Errors
/// Returns [`EnigmaError::InvalidInput`] if `symbol` is not in `'A'..='Z'`.
pub fn to_index(symbol: char, offset: usize) -> Result<u8> {
    if symbol.is_ascii_uppercase() {
        Ok(symbol as u8 - b'A')
    } else {
        Err(EnigmaError::InvalidInput { symbol, offset })
    }
}

/// Converts an index to its display letter.
///
/// Indices are reduced modulo 26.
pub fn to_symbol(index: u8) -> char {
    (b'A' + index % SIZE) as char
}

/// Converts a whole text to indices, failing on the first foreign symbol.
///
/// # Errors
/// Returns [`EnigmaError::InvalidInput`] carrying the first offending
/// symbol and its character offset.
pub fn text_to_indices(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(offset, symbol)| to_index(symbol, offset))
        .collect()
}

/// Converts indices back to text.
pub fn indices_to_text(indices: &[u8]) -> String {
    indices.iter().map(|&i| to_symbol(i)).collect()
}

/// Uppercases ASCII letters and drops everything else.
///
/// The engine itself rejects foreign symbols; this is the caller-side
/// cleanup used by the command line driver.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Adds a signed offset to an index modulo 26.
#[inline]
pub(crate) fn shift(index: u8, offset: i16) -> u8 {
    (index as i16 + offset).rem_euclid(SIZE as i16) as u8
}
