//! Rotor and reflector specification tables.
//!
//! Wirings and notches are data. [`Catalog::historical`] carries the five
//! Enigma I rotors and reflectors B and C; further entries can be added in
//! code or loaded from JSON without touching the machine.

use crate::builder::ConfigError;
use crate::core::{Letter, Reflector, Rotor, Wiring};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const HISTORICAL_ROTORS: [(&str, &str, char); 5] = [
    ("I", "ekmflgdqvzntowyhxuspaibrcj", 'q'),
    ("II", "ajdksiruxblhwtmcqgznpyfvoe", 'e'),
    ("III", "bdfhjlcprtxvznyeiwgakmusqo", 'v'),
    ("IV", "esovpzjayquirhxlnftgkdcmwb", 'j'),
    ("V", "vzbrgityupsdnhlxawmjqofeck", 'z'),
];

const HISTORICAL_REFLECTORS: [(&str, &str); 2] = [
    ("B", "yruhqsldpxngokmiebfzcwvjat"),
    ("C", "fvpjiaoyedrzxwgctkuqsbnmhl"),
];

/// Wiring and notch of one rotor type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    /// 26-letter permutation, entry `i` wired from alphabet index `i`.
    pub wiring: Wiring,
    pub notch: Letter,
}

/// Named rotor and reflector tables.
///
/// # Example
///
/// ```rust
/// use enigma::catalog::Catalog;
/// use enigma::core::Letter;
///
/// let catalog = Catalog::historical();
/// let rotor = catalog.rotor("III", Letter::A, Letter::A).unwrap();
/// assert_eq!(rotor.notch().to_char(), 'v');
///
/// assert!(catalog.reflector("B").is_ok());
/// assert!(catalog.reflector("Z").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub rotors: BTreeMap<String, RotorSpec>,
    #[serde(default)]
    pub reflectors: BTreeMap<String, Wiring>,
}

impl Catalog {
    /// Rotors I-V and reflectors B and C of the Enigma I.
    pub fn historical() -> Self {
        let rotors = HISTORICAL_ROTORS
            .iter()
            .filter_map(|(name, wiring, notch)| {
                let spec = RotorSpec {
                    wiring: Wiring::parse(wiring).ok()?,
                    notch: Letter::from_char(*notch)?,
                };
                Some((name.to_string(), spec))
            })
            .collect();
        let reflectors = HISTORICAL_REFLECTORS
            .iter()
            .filter_map(|(name, wiring)| Some((name.to_string(), Wiring::parse(wiring).ok()?)))
            .collect();

        Self { rotors, reflectors }
    }

    /// Load tables from a JSON document.
    ///
    /// ```json
    /// { "rotors": { "VI": { "wiring": "jpgvoumfyqbenhzrdkasxlictw", "notch": "z" } },
    ///   "reflectors": { "B": "yruhqsldpxngokmiebfzcwvjat" } }
    /// ```
    ///
    /// Every wiring is validated while loading, so a malformed table fails
    /// here rather than when the rotor is first used.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_rotor(mut self, name: impl Into<String>, spec: RotorSpec) -> Self {
        self.rotors.insert(name.into(), spec);
        self
    }

    pub fn with_reflector(mut self, name: impl Into<String>, wiring: Wiring) -> Self {
        self.reflectors.insert(name.into(), wiring);
        self
    }

    pub fn rotor_spec(&self, name: &str) -> Result<&RotorSpec, ConfigError> {
        self.rotors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownRotor(name.to_string()))
    }

    /// Build the named rotor at the given position and ring setting.
    pub fn rotor(&self, name: &str, position: Letter, ring: Letter) -> Result<Rotor, ConfigError> {
        Ok(Rotor::from_spec(self.rotor_spec(name)?, position, ring))
    }

    pub fn reflector(&self, name: &str) -> Result<Reflector, ConfigError> {
        let wiring = self
            .reflectors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownReflector(name.to_string()))?;
        Ok(Reflector::from_spec(wiring))
    }
}
