//! EnigmaMachine: plugboard + rotor tray orchestration.
//!
//! Each keypress runs `plugboard → tray (step, then substitute) → plugboard`.
//! Stepping depends only on the keypress count, never on the symbol, so a
//! fresh machine with the same settings turns ciphertext back into plaintext.

use crate::alphabet;
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::rotor_tray::RotorTray;

/// A complete cipher machine for one trial configuration.
///
/// # Examples
///
/// ```
/// use enigma_engine::{EnigmaMachine, Plugboard, Rotor, RotorTray};
///
/// fn machine() -> EnigmaMachine {
///     let tray = RotorTray::new(vec![
///         Rotor::from_preset("UKW-B", 0, 0).unwrap(),
///         Rotor::from_preset("I", 0, 0).unwrap(),
///         Rotor::from_preset("II", 0, 0).unwrap(),
///         Rotor::from_preset("III", 0, 0).unwrap(),
///     ])
///     .unwrap();
///     EnigmaMachine::new(tray, Plugboard::identity())
/// }
///
/// let ciphertext = machine().encrypt("HELLOWORLD").unwrap();
/// assert_eq!(ciphertext, "ILBDAAMTAZ");
/// assert_eq!(machine().encrypt(&ciphertext).unwrap(), "HELLOWORLD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
    tray: RotorTray,
    plugboard: Plugboard,
}

impl EnigmaMachine {
    /// Assembles a machine from a tray and a plugboard.
    pub fn new(tray: RotorTray, plugboard: Plugboard) -> Self {
        EnigmaMachine { tray, plugboard }
    }

    /// Encrypts one symbol index, advancing the rotors once.
    ///
    /// The index must be in `[0, 26)`.
    #[inline]
    pub fn encrypt_symbol(&mut self, index: u8) -> u8 {
        let plugged = self.plugboard.apply(index);
        let scrambled = self.tray.step_then_substitute(plugged);
        self.plugboard.apply(scrambled)
    }

    /// Encrypts (or decrypts) a message over `'A'..='Z'`.
    ///
    /// The whole message is validated before the rotors move, so a rejected
    /// message leaves the machine untouched.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidInput`] for the first symbol outside
    /// the alphabet. Case folding and punctuation stripping are the caller's
    /// job.
    pub fn encrypt(&mut self, text: &str) -> Result<String> {
        let indices = alphabet::text_to_indices(text)?;
        let mut out = String::with_capacity(indices.len());
        for index in indices {
            out.push(alphabet::to_symbol(self.encrypt_symbol(index)));
        }
        Ok(out)
    }

    /// Encrypts pre-converted symbol indices.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidInput`] if an index is not in
    /// `[0, 26)`; the reported symbol is the index as a `char` and nothing
    /// is encrypted.
    pub fn encrypt_indices(&mut self, indices: &[u8]) -> Result<Vec<u8>> {
        if let Some((offset, &bad)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= alphabet::ALPHABET_SIZE)
        {
            return Err(EnigmaError::InvalidInput {
                symbol: char::from(bad),
                offset,
            });
        }
        Ok(indices.iter().map(|&i| self.encrypt_symbol(i)).collect())
    }

    /// The rotor tray in its current state.
    pub fn tray(&self) -> &RotorTray {
        &self.tray
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}
