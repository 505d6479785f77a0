//! Error types for the enigma-engine library.

use thiserror::Error;

/// Errors produced by the enigma-engine library.
///
/// Every variant is raised at construction time or at the offending input
/// symbol. The engine never retries and never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The name does not match any registered rotor or reflector.
    #[error("Unknown rotor or reflector '{0}'")]
    UnknownRotor(String),

    /// A position or ring setting is outside `[0, 26)`.
    #[error("Invalid {setting} {value}: must be in [0, 26)")]
    InvalidSetting {
        /// Which setting was rejected (`"position"` or `"ring setting"`).
        setting: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A plugboard symbol was wired more than once.
    #[error("Plugboard symbol '{0}' is wired more than once")]
    DuplicateWiring(char),

    /// A symbol falls outside the `A..=Z` alphabet.
    #[error("Invalid symbol {symbol:?} at offset {offset}: expected 'A'..='Z'")]
    InvalidInput {
        /// The rejected symbol.
        symbol: char,
        /// Character offset of the symbol in its input.
        offset: usize,
    },

    /// The rotor tray does not hold exactly one leading reflector followed
    /// by at least one steppable rotor.
    #[error("Malformed rotor tray: {0}")]
    MalformedTray(String),

    /// A machine configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;
