//! The assembled machine: stepping and the signal path.

use crate::builder::ConfigError;
use crate::core::{Letter, Plugboard, Reflector, Rotor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// The three rotor positions, left to right.
///
/// This is the machine's whole mutable state. Resetting a machine to the
/// setting it started from lets it decipher its own output.
///
/// ```rust
/// use enigma::machine::RotorSetting;
///
/// let setting: RotorSetting = "abc".parse().unwrap();
/// assert_eq!(setting.to_string(), "abc");
/// assert!("ab".parse::<RotorSetting>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotorSetting {
    pub left: Letter,
    pub middle: Letter,
    pub right: Letter,
}

impl RotorSetting {
    pub fn new(left: Letter, middle: Letter, right: Letter) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }
}

impl FromStr for RotorSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidLetter {
            field: "rotor setting",
            value: s.to_string(),
        };
        let letters: Vec<Letter> = s
            .chars()
            .map(|ch| Letter::from_char(ch.to_ascii_lowercase()).ok_or_else(invalid))
            .collect::<Result<_, _>>()?;

        match letters.as_slice() {
            [left, middle, right] => Ok(Self::new(*left, *middle, *right)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for RotorSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.middle, self.right)
    }
}

/// A three-rotor Enigma.
///
/// Rotors are held left, middle, right. The right rotor is where the
/// signal enters the stack and the one that steps on every key.
///
/// `process` mutates rotor positions, so a machine needs exclusive access
/// while it runs. Build a second machine with the same configuration (or
/// call [`set_setting`](Self::set_setting)) to decipher.
///
/// # Example
///
/// ```rust
/// use enigma::catalog::Catalog;
/// use enigma::core::{Letter, Plugboard};
/// use enigma::machine::Enigma;
///
/// let catalog = Catalog::historical();
/// let a = Letter::A;
/// let rotors = [
///     catalog.rotor("I", a, a).unwrap(),
///     catalog.rotor("II", a, a).unwrap(),
///     catalog.rotor("III", a, a).unwrap(),
/// ];
/// let mut machine = Enigma::new(rotors, catalog.reflector("B").unwrap(), Plugboard::default());
/// let start = machine.setting();
///
/// let ciphertext = machine.process("aaaaa");
/// assert_eq!(ciphertext, "bdzgo");
///
/// machine.set_setting(start);
/// assert_eq!(machine.process(&ciphertext), "aaaaa");
/// ```
#[derive(Clone, Debug)]
pub struct Enigma {
    rotors: [Rotor; 3],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    /// Assemble a machine from rotors in left, middle, right order.
    pub fn new(rotors: [Rotor; 3], reflector: Reflector, plugboard: Plugboard) -> Self {
        let machine = Self {
            rotors,
            reflector,
            plugboard,
        };
        debug!(
            setting = %machine.setting(),
            plugboard_pairs = machine.plugboard.pairs().len(),
            "Assembled machine"
        );
        machine
    }

    pub fn rotors(&self) -> &[Rotor; 3] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Current rotor positions.
    pub fn setting(&self) -> RotorSetting {
        let [left, middle, right] = &self.rotors;
        RotorSetting::new(left.position(), middle.position(), right.position())
    }

    /// Move the rotors to `setting`. Ring settings are unchanged.
    pub fn set_setting(&mut self, setting: RotorSetting) {
        let [left, middle, right] = &mut self.rotors;
        left.set_position(setting.left);
        middle.set_position(setting.middle);
        right.set_position(setting.right);
    }

    /// Advance the rotors for one keypress.
    ///
    /// Both notch checks read the positions before anything moves. A middle
    /// rotor sitting on its notch carries the left rotor and also steps
    /// itself, which is the double-step.
    pub fn step_rotors(&mut self) {
        let [left, middle, right] = &mut self.rotors;

        let middle_at_notch = middle.at_notch();
        let right_at_notch = right.at_notch();

        if middle_at_notch {
            trace!(middle = %middle.position(), "Double-step");
            left.rotate();
        }
        if middle_at_notch || right_at_notch {
            middle.rotate();
        }
        right.rotate();
    }

    /// Send one letter through the machine, stepping first.
    pub fn press(&mut self, letter: Letter) -> Letter {
        self.step_rotors();

        let mut signal = self.plugboard.swap(letter);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.encode_forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter() {
            signal = rotor.encode_backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Encipher or decipher `text`.
    ///
    /// Only `'a'..='z'` are enciphered and step the rotors. Everything else,
    /// uppercase included, is copied through in place. Lowercase the input
    /// first for case-insensitive behaviour.
    pub fn process(&mut self, text: &str) -> String {
        text.chars()
            .map(|ch| match Letter::from_char(ch) {
                Some(letter) => self.press(letter).to_char(),
                None => ch,
            })
            .collect()
    }
}
