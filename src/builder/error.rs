//! Configuration errors raised while assembling a machine.

use thiserror::Error;

/// Errors that can occur when building rotors, reflectors, plugboards and machines.
///
/// Every variant is a construction-time failure. Once a machine exists,
/// processing text cannot fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Duplicate letter '{letter}' in plugboard connections")]
    DuplicatePlugboardLetter { letter: char },

    #[error("Plugboard pair {pair:?} must be exactly two letters")]
    InvalidPlugboardPair { pair: String },

    #[error("Wiring must contain 26 letters, got {len}")]
    InvalidWiringLength { len: usize },

    #[error("Wiring contains non-letter character {ch:?}")]
    InvalidWiringChar { ch: char },

    #[error("Wiring maps to '{letter}' more than once")]
    RepeatedWiringLetter { letter: char },

    /// A position, ring or notch value is not a single alphabet letter.
    #[error("Invalid {field} {value:?}: expected a single letter a-z")]
    InvalidLetter { field: &'static str, value: String },

    #[error("Unknown rotor {0:?}")]
    UnknownRotor(String),

    #[error("Unknown reflector {0:?}")]
    UnknownReflector(String),

    #[error("Machine needs exactly 3 rotors, got {count}")]
    WrongRotorCount { count: usize },

    #[error("Reflector not specified. Call .reflector(reflector) before .build()")]
    MissingReflector,

    #[error("Invalid catalog or settings document: {0}")]
    Document(#[from] serde_json::Error),
}
