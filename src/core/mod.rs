//! Machine components.
//!
//! This module contains the pieces the signal passes through:
//! - `Letter` and the fixed 26-letter alphabet
//! - `Wiring`, a validated permutation with its inverse
//! - `Rotor`, `Reflector` and `Plugboard`
//!
//! Only `Rotor` carries mutable state (its position). Reflectors and
//! plugboards are read-only after construction and can be cloned freely
//! between machines.

mod alphabet;
mod plugboard;
mod reflector;
mod rotor;
mod wiring;

pub use alphabet::{Letter, ALPHABET, ALPHABET_LEN};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wiring::Wiring;
