//! RotorSpec registry: static wiring tables of the historical rotors and
//! reflectors.
//!
//! Tables are decoded from their key-sheet letter strings at compile time,
//! together with the inverse permutation used on the return path. Every
//! [`Rotor`](crate::rotor::Rotor) holds a `&'static RotorSpec`, so the
//! 26-entry arrays are never copied per instance.

use crate::alphabet::ALPHABET_SIZE;
use crate::error::{EnigmaError, Result};

/// Role of a wired disc in the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    /// A rotating rotor with one or more notches.
    Rotor,
    /// A fixed reflector (Umkehrwalze).
    Reflector,
}

/// Immutable description of one historical rotor or reflector.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    name: &'static str,
    kind: RotorKind,
    wiring: [u8; ALPHABET_SIZE],
    inverse: [u8; ALPHABET_SIZE],
    notches: &'static [u8],
}

/// Decodes a 26-letter wiring string into an index permutation.
const fn decode(letters: &[u8; ALPHABET_SIZE]) -> [u8; ALPHABET_SIZE] {
    let mut out = [0u8; ALPHABET_SIZE];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        out[i] = letters[i] - b'A';
        i += 1;
    }
    out
}

/// Computes the inverse of an index permutation.
const fn invert(wiring: &[u8; ALPHABET_SIZE]) -> [u8; ALPHABET_SIZE] {
    let mut out = [0u8; ALPHABET_SIZE];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        out[wiring[i] as usize] = i as u8;
        i += 1;
    }
    out
}

const fn rotor(
    name: &'static str,
    letters: &[u8; ALPHABET_SIZE],
    notches: &'static [u8],
) -> RotorSpec {
    let wiring = decode(letters);
    RotorSpec {
        name,
        kind: RotorKind::Rotor,
        wiring,
        inverse: invert(&wiring),
        notches,
    }
}

const fn reflector(name: &'static str, letters: &[u8; ALPHABET_SIZE]) -> RotorSpec {
    let wiring = decode(letters);
    RotorSpec {
        name,
        kind: RotorKind::Reflector,
        wiring,
        inverse: invert(&wiring),
        notches: &[],
    }
}

/// Enigma I rotors and the three standard reflectors.
///
/// Notch positions are the window letters at which the rotor carries its
/// left neighbour on the next keypress: Q, E, V, J, Z.
static REGISTRY: [RotorSpec; 8] = [
    rotor("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", &[16]),
    rotor("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", &[4]),
    rotor("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", &[21]),
    rotor("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", &[9]),
    rotor("V", b"VZBRGITYUPSDNHLMXCKFJQEOAW", &[25]),
    reflector("UKW-A", b"EJMZALYXVBWFCRQUONTSPIKHGD"),
    reflector("UKW-B", b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    reflector("UKW-C", b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

impl RotorSpec {
    /// Looks up a rotor or reflector by its historical name.
    ///
    /// # Parameters
    /// - `name`: Rotor (`"I"`..`"V"`) or reflector (`"UKW-A"`, `"UKW-B"`,
    ///   `"UKW-C"`) identifier. Matching is exact.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] for any other name.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_engine::RotorSpec;
    ///
    /// let spec = RotorSpec::lookup("UKW-B").unwrap();
    /// assert!(spec.is_reflector());
    /// assert!(RotorSpec::lookup("VI").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<&'static RotorSpec> {
        REGISTRY
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))
    }

    /// Iterates every registered rotor and reflector.
    pub fn all() -> impl Iterator<Item = &'static RotorSpec> {
        REGISTRY.iter()
    }

    /// Names of the rotating rotors, in registry order.
    pub fn rotor_names() -> impl Iterator<Item = &'static str> {
        Self::all()
            .filter(|spec| spec.kind == RotorKind::Rotor)
            .map(|spec| spec.name)
    }

    /// Historical identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rotor or reflector.
    pub fn kind(&self) -> RotorKind {
        self.kind
    }

    /// True for reflectors.
    pub fn is_reflector(&self) -> bool {
        self.kind == RotorKind::Reflector
    }

    /// Notch positions; empty for reflectors.
    pub fn notches(&self) -> &'static [u8] {
        self.notches
    }

    /// Static wiring applied on the entry path.
    #[inline]
    pub fn wiring(&self, index: u8) -> u8 {
        self.wiring[index as usize]
    }

    /// Inverse wiring applied on the return path.
    #[inline]
    pub fn inverse(&self, index: u8) -> u8 {
        self.inverse[index as usize]
    }
}
