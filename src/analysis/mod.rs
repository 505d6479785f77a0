//! Ciphertext-only cryptanalysis built on the public engine API.
//!
//! Scores candidate decryptions by index of coincidence and searches rotor
//! orders and starting positions exhaustively. Every trial builds a fresh
//! [`EnigmaMachine`](crate::EnigmaMachine); nothing here reaches into engine
//! internals.

pub mod ioc;
pub mod search;

pub use ioc::{index_of_coincidence, index_of_coincidence_indices, ENGLISH_IOC, GERMAN_IOC};
pub use search::{search, Candidate, SearchSpace, DEFAULT_MAX_LEN};
