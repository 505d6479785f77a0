//! RotorTray: the rotor stack, its stepping state machine and the
//! forward / reflect / backward substitution pipeline.
//!
//! Rotors are stored in installation order, leftmost first. The rightmost
//! rotor is the fastest. The reflector is held separately and never steps.
//!
//! ```text
//! input ─▶ R(n-1).forward ─▶ … ─▶ R(0).forward ─▶ reflector
//!                                                     │
//! output ◀─ R(n-1).backward ◀─ … ◀─ R(0).backward ◀───┘
//! ```

use crate::alphabet;
use crate::error::{EnigmaError, Result};
use crate::rotor::Rotor;

/// Largest number of steppable rotors a tray accepts (one snapshot bit each).
pub const MAX_ROTORS: usize = u64::BITS as usize;

/// Ordered stack of steppable rotors plus one fixed reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorTray {
    reflector: Rotor,
    rotors: Vec<Rotor>,
}

impl RotorTray {
    /// Builds a tray from an installation-ordered rotor sequence.
    ///
    /// The first element is the reflector; the remaining elements are the
    /// steppable rotors from leftmost to rightmost (fastest).
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedTray`] if the first element is not a
    /// reflector, if a reflector appears anywhere else, if no steppable rotor
    /// follows, or if more than [`MAX_ROTORS`] rotors follow.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::{Rotor, RotorTray};
    ///
    /// let tray = RotorTray::new(vec![
    ///     Rotor::from_preset("UKW-B", 0, 0).unwrap(),
    ///     Rotor::from_preset("II", 7, 0).unwrap(),
    ///     Rotor::from_preset("V", 4, 0).unwrap(),
    ///     Rotor::from_preset("III", 19, 0).unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(tray.window(), "HET");
    /// ```
    pub fn new(rotors: Vec<Rotor>) -> Result<Self> {
        let mut iter = rotors.into_iter();
        let reflector = match iter.next() {
            Some(first) if first.is_reflector() => first,
            Some(first) => {
                return Err(EnigmaError::MalformedTray(format!(
                    "first element '{}' is not a reflector",
                    first.name()
                )))
            }
            None => return Err(EnigmaError::MalformedTray("tray is empty".to_string())),
        };

        let rotors: Vec<Rotor> = iter.collect();
        if let Some(extra) = rotors.iter().find(|r| r.is_reflector()) {
            return Err(EnigmaError::MalformedTray(format!(
                "second reflector '{}' in rotor slots",
                extra.name()
            )));
        }
        if rotors.is_empty() {
            return Err(EnigmaError::MalformedTray(
                "no steppable rotors".to_string(),
            ));
        }
        if rotors.len() > MAX_ROTORS {
            return Err(EnigmaError::MalformedTray(format!(
                "{} steppable rotors exceed the limit of {}",
                rotors.len(),
                MAX_ROTORS
            )));
        }

        tracing::trace!(
            reflector = reflector.name(),
            rotors = rotors.len(),
            "rotor tray assembled"
        );
        Ok(RotorTray { reflector, rotors })
    }

    /// Advances the rotors for one keypress.
    ///
    /// Notch states are captured for every rotor before anything moves.
    /// Counting `k` from the rightmost rotor (`k = 0`), rotor `k` steps when:
    /// - it is the rightmost rotor, or
    /// - rotor `k - 1` was at its notch (carry), or
    /// - it was itself at its notch and has a left neighbour (the pawn that
    ///   carries the neighbour also pushes this rotor: double-stepping).
    pub fn step(&mut self) {
        let count = self.rotors.len();
        let notched = self
            .rotors
            .iter()
            .rev()
            .enumerate()
            .fold(0u64, |mask, (k, rotor)| {
                if rotor.is_at_notch() {
                    mask | (1 << k)
                } else {
                    mask
                }
            });

        for (k, rotor) in self.rotors.iter_mut().rev().enumerate() {
            let carried = k == 0 || notched & (1 << (k - 1)) != 0;
            let double_step = k > 0 && k + 1 < count && notched & (1 << k) != 0;
            if carried || double_step {
                rotor.step();
            }
        }
    }

    /// Passes an index through the rotors, the reflector and back.
    ///
    /// Does not step. The index is assumed to be in `[0, 26)`.
    #[inline]
    pub fn substitute(&self, index: u8) -> u8 {
        let inward = self
            .rotors
            .iter()
            .rev()
            .fold(index, |signal, rotor| rotor.forward(signal));
        let reflected = self.reflector.forward(inward);
        self.rotors
            .iter()
            .fold(reflected, |signal, rotor| rotor.backward(signal))
    }

    /// Steps once, then substitutes `index`.
    #[inline]
    pub fn step_then_substitute(&mut self, index: u8) -> u8 {
        self.step();
        self.substitute(index)
    }

    /// Positions of the steppable rotors, leftmost first.
    pub fn positions(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Window letters of the steppable rotors, leftmost first.
    pub fn window(&self) -> String {
        self.rotors
            .iter()
            .map(|r| alphabet::to_symbol(r.position()))
            .collect()
    }

    /// Steppable rotors, leftmost first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// The fixed reflector.
    pub fn reflector(&self) -> &Rotor {
        &self.reflector
    }

    /// Number of steppable rotors.
    pub fn num_rotors(&self) -> usize {
        self.rotors.len()
    }
}
