//! Validated alphabet permutations.

use super::alphabet::{Letter, ALPHABET_LEN};
use crate::builder::ConfigError;
use serde::{Deserialize, Serialize};

/// A bijection on the alphabet with its inverse precomputed.
///
/// Rotors need both directions on every keypress, so the inverse is built
/// once here instead of being searched for on each backward pass.
///
/// Serializes as its 26-letter string; deserializing validates it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Wiring {
    forward: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
}

impl Wiring {
    /// Parse a 26-letter permutation such as `"ekmflgdqvzntowyhxuspaibrcj"`.
    ///
    /// Entry `i` is the letter that alphabet index `i` is wired to. Case is
    /// ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enigma::core::{Letter, Wiring};
    ///
    /// let wiring = Wiring::parse("ekmflgdqvzntowyhxuspaibrcj").unwrap();
    /// let a = Letter::from_char('a').unwrap();
    /// assert_eq!(wiring.map(a).to_char(), 'e');
    /// assert_eq!(wiring.unmap(wiring.map(a)), a);
    ///
    /// assert!(Wiring::parse("abc").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let len = spec.chars().count();
        if len != ALPHABET_LEN {
            return Err(ConfigError::InvalidWiringLength { len });
        }

        let mut forward = [Letter::A; ALPHABET_LEN];
        let mut inverse = [Letter::A; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (i, ch) in spec.chars().enumerate() {
            let target = Letter::from_char(ch.to_ascii_lowercase())
                .ok_or(ConfigError::InvalidWiringChar { ch })?;
            if seen[target.index()] {
                return Err(ConfigError::RepeatedWiringLetter {
                    letter: target.to_char(),
                });
            }
            seen[target.index()] = true;

            // i < 26 because the length was checked above
            let source = Letter::from_index(i).ok_or(ConfigError::InvalidWiringLength { len })?;
            forward[i] = target;
            inverse[target.index()] = source;
        }

        Ok(Self { forward, inverse })
    }

    /// The identity permutation.
    pub fn identity() -> Self {
        let mut forward = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            forward[letter.index()] = letter;
        }
        Self {
            forward,
            inverse: forward,
        }
    }

    pub fn map(&self, letter: Letter) -> Letter {
        self.forward[letter.index()]
    }

    pub fn unmap(&self, letter: Letter) -> Letter {
        self.inverse[letter.index()]
    }

    /// The wiring written back out as 26 lowercase letters.
    pub fn as_string(&self) -> String {
        self.forward.iter().map(|l| l.to_char()).collect()
    }
}

impl TryFrom<String> for Wiring {
    type Error = ConfigError;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        Wiring::parse(&spec)
    }
}

impl From<Wiring> for String {
    fn from(wiring: Wiring) -> Self {
        wiring.as_string()
    }
}
