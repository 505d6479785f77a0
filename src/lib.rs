//! Enigma rotor cipher engine.
//!
//! Reproduces the three-rotor Enigma I: rotors I–V, reflectors UKW-A/B/C,
//! ring settings, the plugboard, and the notch-driven stepping including the
//! middle-rotor double step. Under identical settings encryption is an
//! involution, so the same call decrypts.
//!
//! # Architecture
//!
//! ```text
//! RotorSpec     (static wiring tables, shared by reference)
//!     ↓
//! Rotor         (spec + ring setting + position)
//!     ↓ N rotors + 1 reflector
//! RotorTray     (stepping state machine, forward / reflect / backward pass)
//!     ↓                               Plugboard (pairwise swaps)
//! EnigmaMachine (plugboard → tray → plugboard, one keypress per symbol)
//! ```
//!
//! The [`analysis`] module is a consumer of the engine: index-of-coincidence
//! scoring and an exhaustive rotor order / start position search.
//!
//! # Examples
//!
//! Encrypt and decrypt with the same settings:
//!
//! ```
//! use enigma_engine::MachineConfig;
//!
//! let config = MachineConfig::from_settings(
//!     "UKW-B",
//!     &["II", "V", "III"],
//!     &[7, 4, 19],
//!     &[0, 0, 0],
//!     &["AV", "BS"],
//! );
//!
//! let ciphertext = config.build().unwrap().encrypt("ATTACKATDAWN").unwrap();
//! assert_ne!(ciphertext, "ATTACKATDAWN");
//!
//! let plaintext = config.build().unwrap().encrypt(&ciphertext).unwrap();
//! assert_eq!(plaintext, "ATTACKATDAWN");
//! ```
//!
//! Assemble the parts by hand:
//!
//! ```
//! use enigma_engine::{EnigmaMachine, Plugboard, Rotor, RotorTray};
//!
//! let tray = RotorTray::new(vec![
//!     Rotor::from_preset("UKW-B", 0, 0).unwrap(),
//!     Rotor::from_preset("I", 0, 0).unwrap(),
//!     Rotor::from_preset("II", 0, 0).unwrap(),
//!     Rotor::from_preset("III", 0, 0).unwrap(),
//! ])
//! .unwrap();
//! let mut machine = EnigmaMachine::new(tray, Plugboard::identity());
//! assert_eq!(machine.encrypt("AAAAA").unwrap(), "BDZGO");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod analysis;
pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod rotor;
pub mod rotor_spec;
pub mod rotor_tray;

pub use config::{MachineConfig, RotorConfig, Setting};
pub use error::{EnigmaError, Result};
pub use machine::EnigmaMachine;
pub use plugboard::Plugboard;
pub use rotor::Rotor;
pub use rotor_spec::{RotorKind, RotorSpec};
pub use rotor_tray::RotorTray;
