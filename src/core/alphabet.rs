//! The 26-letter alphabet and its index bijection.
//!
//! All rotor arithmetic happens on indices modulo 26. `Letter` is the
//! only way components see a character, so a component never has to
//! handle anything outside `'a'..='z'`.

use crate::builder::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of letters on every wheel.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in index order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A lowercase alphabet letter, stored as its index 0..25.
///
/// # Example
///
/// ```rust
/// use enigma::core::Letter;
///
/// let c = Letter::from_char('c').unwrap();
/// assert_eq!(c.index(), 2);
/// assert_eq!(c.shift(-3).to_char(), 'z');
/// assert!(Letter::from_char('C').is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// The letter `'a'`, index 0.
    pub const A: Letter = Letter(0);

    /// Letter at `index`, or `None` when the index is past `'z'`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_LEN).then_some(Letter(index as u8))
    }

    /// Letter for a lowercase ASCII character.
    ///
    /// Uppercase letters are not alphabet members; the machine passes them
    /// through untouched.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_lowercase().then(|| Letter(ch as u8 - b'a'))
    }

    /// Parse a configuration value such as a position, ring or notch.
    ///
    /// Accepts exactly one ASCII letter in either case.
    pub fn parse(value: &str, field: &'static str) -> Result<Self, ConfigError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Letter::from_char(ch.to_ascii_lowercase()).ok_or_else(|| {
                ConfigError::InvalidLetter {
                    field,
                    value: value.to_string(),
                }
            }),
            _ => Err(ConfigError::InvalidLetter {
                field,
                value: value.to_string(),
            }),
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        ALPHABET[self.index()]
    }

    /// Add `offset` modulo 26. Negative offsets wrap backwards.
    pub fn shift(self, offset: i32) -> Self {
        let shifted = (self.0 as i32 + offset).rem_euclid(ALPHABET_LEN as i32);
        Letter(shifted as u8)
    }

    /// The next letter, wrapping `'z'` to `'a'`.
    pub fn succ(self) -> Self {
        self.shift(1)
    }

    /// Iterate all 26 letters in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({:?})", self.to_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = ConfigError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch.to_ascii_lowercase()).ok_or_else(|| ConfigError::InvalidLetter {
            field: "letter",
            value: ch.to_string(),
        })
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_char()
    }
}
