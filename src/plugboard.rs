//! Plugboard (Steckerbrett): symmetric letter swaps applied before and after
//! the rotor stack.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::{EnigmaError, Result};

const IDENTITY: [u8; ALPHABET_SIZE] = {
    let mut table = [0u8; ALPHABET_SIZE];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        table[i] = i as u8;
        i += 1;
    }
    table
};

/// Involutive index map built from unordered symbol pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [u8; ALPHABET_SIZE],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Plugboard with no cables: every symbol maps to itself.
    pub fn identity() -> Self {
        Plugboard { wiring: IDENTITY }
    }

    /// Builds a plugboard from symbol pairs.
    ///
    /// # Parameters
    /// - `pairs`: Unordered symbol pairs; order inside a pair is irrelevant.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidInput`] if a symbol is not in `'A'..='Z'`. The
    ///   reported offset is the index of the pair.
    /// - [`EnigmaError::DuplicateWiring`] if a symbol appears in more than one
    ///   pair or is paired with itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::Plugboard;
    ///
    /// let pb = Plugboard::new([('A', 'B'), ('C', 'D')]).unwrap();
    /// assert_eq!(pb.apply(0), 1);
    /// assert_eq!(pb.apply(4), 4);
    ///
    /// assert!(Plugboard::new([('A', 'B'), ('A', 'C')]).is_err());
    /// ```
    pub fn new<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut wiring = IDENTITY;
        for (offset, (a, b)) in pairs.into_iter().enumerate() {
            let x = alphabet::to_index(a, offset)?;
            let y = alphabet::to_index(b, offset)?;
            if x == y {
                return Err(EnigmaError::DuplicateWiring(a));
            }
            for (symbol, index) in [(a, x), (b, y)] {
                if wiring[index as usize] != index {
                    return Err(EnigmaError::DuplicateWiring(symbol));
                }
            }
            wiring[x as usize] = y;
            wiring[y as usize] = x;
        }
        Ok(Plugboard { wiring })
    }

    /// Parses key-sheet notation: whitespace separated two-letter pairs.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidInput`] for a token that is not exactly
    /// two characters, with the token's index as offset, plus every error of
    /// [`Plugboard::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::Plugboard;
    ///
    /// let pb = Plugboard::from_pairs_str("AV BS CG").unwrap();
    /// assert_eq!(pb.pair_count(), 3);
    /// ```
    pub fn from_pairs_str(notation: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for (offset, token) in notation.split_whitespace().enumerate() {
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => pairs.push((a, b)),
                (_, _, Some(extra)) => {
                    return Err(EnigmaError::InvalidInput {
                        symbol: extra,
                        offset,
                    })
                }
                (Some(a), None, None) => {
                    return Err(EnigmaError::InvalidInput { symbol: a, offset })
                }
                (None, _, _) => {}
            }
        }
        Self::new(pairs)
    }

    /// Swaps an index with its partner, or returns it unchanged.
    #[inline]
    pub fn apply(&self, index: u8) -> u8 {
        self.wiring[index as usize]
    }

    /// Number of cables plugged in.
    pub fn pair_count(&self) -> usize {
        self.wiring
            .iter()
            .enumerate()
            .filter(|&(i, &w)| i != w as usize)
            .count()
            / 2
    }

    /// Plugged pairs in key-sheet notation, each pair in alphabetical order.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.wiring
            .iter()
            .enumerate()
            .filter(|&(i, &w)| i < w as usize)
            .map(|(i, &w)| (alphabet::to_symbol(i as u8), alphabet::to_symbol(w)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let pb = Plugboard::identity();
        for i in 0..ALPHABET_SIZE as u8 {
            assert_eq!(pb.apply(i), i);
        }
        assert_eq!(pb.pair_count(), 0);
        assert_eq!(pb, Plugboard::default());
    }

    #[test]
    fn test_pairs_are_symmetric() {
        let pb = Plugboard::new([('A', 'Z'), ('M', 'B')]).unwrap();
        assert_eq!(pb.apply(0), 25);
        assert_eq!(pb.apply(25), 0);
        assert_eq!(pb.apply(1), 12);
        assert_eq!(pb.apply(12), 1);
        assert_eq!(pb.pairs(), vec![('A', 'Z'), ('B', 'M')]);
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        assert_eq!(
            Plugboard::new([('A', 'B'), ('A', 'C')]),
            Err(EnigmaError::DuplicateWiring('A'))
        );
        assert_eq!(
            Plugboard::new([('A', 'B'), ('C', 'B')]),
            Err(EnigmaError::DuplicateWiring('B'))
        );
    }

    #[test]
    fn test_same_pair_twice_rejected() {
        assert_eq!(
            Plugboard::new([('A', 'B'), ('B', 'A')]),
            Err(EnigmaError::DuplicateWiring('B'))
        );
    }

    #[test]
    fn test_self_pair_rejected() {
        assert_eq!(
            Plugboard::new([('Q', 'Q')]),
            Err(EnigmaError::DuplicateWiring('Q'))
        );
    }

    #[test]
    fn test_foreign_symbol_rejected() {
        assert_eq!(
            Plugboard::new([('A', 'B'), ('c', 'D')]),
            Err(EnigmaError::InvalidInput {
                symbol: 'c',
                offset: 1
            })
        );
    }

    #[test]
    fn test_from_pairs_str() {
        let pb = Plugboard::from_pairs_str("  AV BS\tCG ").unwrap();
        assert_eq!(pb.pairs(), vec![('A', 'V'), ('B', 'S'), ('C', 'G')]);
        assert_eq!(Plugboard::from_pairs_str("").unwrap(), Plugboard::identity());
    }

    #[test]
    fn test_from_pairs_str_malformed_token() {
        assert_eq!(
            Plugboard::from_pairs_str("AB CDE"),
            Err(EnigmaError::InvalidInput {
                symbol: 'E',
                offset: 1
            })
        );
        assert!(matches!(
            Plugboard::from_pairs_str("AB C"),
            Err(EnigmaError::InvalidInput { symbol: 'C', .. })
        ));
    }

    #[test]
    fn test_full_board_is_involution() {
        let pb = Plugboard::from_pairs_str("AB CD EF GH IJ KL MN OP QR ST UV WX YZ").unwrap();
        assert_eq!(pb.pair_count(), 13);
        for i in 0..ALPHABET_SIZE as u8 {
            assert_ne!(pb.apply(i), i);
            assert_eq!(pb.apply(pb.apply(i)), i);
        }
    }
}
