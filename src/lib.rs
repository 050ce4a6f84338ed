//! Enigma: a three-rotor Enigma I cipher machine
//!
//! The machine is a small state machine. Its only mutable state is the
//! three rotor positions; every keypress steps the rotors (including the
//! historical double-step) and then routes the letter through
//! plugboard, rotors right to left, reflector, rotors left to right and
//! the plugboard again. Enciphering and deciphering are the same
//! operation from the same starting setting.
//!
//! # Core Concepts
//!
//! - **Components**: `Rotor`, `Reflector` and `Plugboard` in [`core`]
//! - **Machine**: [`Enigma`] owns stepping and the signal path
//! - **Configuration**: [`Catalog`] tables and [`MachineSettings`]
//!
//! # Example
//!
//! ```rust
//! use enigma::catalog::Catalog;
//! use enigma::settings::MachineSettings;
//!
//! let settings = MachineSettings {
//!     rotors: ["I".into(), "II".into(), "III".into()],
//!     positions: "abc".into(),
//!     rings: "aaa".into(),
//!     reflector: "B".into(),
//!     plugboard: vec!["ab".into(), "cd".into(), "ef".into()],
//! };
//! let catalog = Catalog::historical();
//!
//! let ciphertext = settings.build(&catalog).unwrap().process("hello world");
//! let plaintext = settings.build(&catalog).unwrap().process(&ciphertext);
//! assert_eq!(plaintext, "hello world");
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod machine;
pub mod settings;

// Re-export commonly used types
pub use builder::{ConfigError, EnigmaBuilder};
pub use catalog::{Catalog, RotorSpec};
pub use crate::core::{Letter, Plugboard, Reflector, Rotor};
pub use machine::{Enigma, RotorSetting};
pub use settings::MachineSettings;
