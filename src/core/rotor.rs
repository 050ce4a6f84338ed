//! A single rotating wheel.
//!
//! A rotor is a fixed wiring seen through two offsets: the ring setting,
//! fixed when the wheel is assembled, and the position, which advances as
//! keys are pressed. Only the difference `position - ring` matters for the
//! signal path; the notch is compared against the position alone.

use super::alphabet::Letter;
use super::wiring::Wiring;
use crate::builder::ConfigError;
use crate::catalog::RotorSpec;

/// One rotor: wiring, notch, ring setting and current position.
///
/// # Example
///
/// ```rust
/// use enigma::core::{Letter, Rotor};
///
/// let mut rotor = Rotor::parse("ekmflgdqvzntowyhxuspaibrcj", "q", "a", "a").unwrap();
/// let a = Letter::from_char('a').unwrap();
///
/// assert_eq!(rotor.encode_forward(a).to_char(), 'e');
/// assert_eq!(rotor.encode_backward(rotor.encode_forward(a)), a);
///
/// rotor.rotate();
/// assert_eq!(rotor.position().to_char(), 'b');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    notch: Letter,
    ring: Letter,
    position: Letter,
}

impl Rotor {
    pub fn new(wiring: Wiring, notch: Letter, position: Letter, ring: Letter) -> Self {
        Self {
            wiring,
            notch,
            ring,
            position,
        }
    }

    /// Build a rotor from textual configuration.
    ///
    /// Fails if the wiring is not a 26-letter permutation or if the notch,
    /// position or ring is not a single letter.
    pub fn parse(wiring: &str, notch: &str, position: &str, ring: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(
            Wiring::parse(wiring)?,
            Letter::parse(notch, "notch")?,
            Letter::parse(position, "position")?,
            Letter::parse(ring, "ring")?,
        ))
    }

    /// Build a rotor from a catalog entry. The entry's wiring was validated
    /// when the catalog was built.
    pub fn from_spec(spec: &RotorSpec, position: Letter, ring: Letter) -> Self {
        Self::new(spec.wiring.clone(), spec.notch, position, ring)
    }

    pub fn position(&self) -> Letter {
        self.position
    }

    pub fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    pub fn ring(&self) -> Letter {
        self.ring
    }

    pub fn notch(&self) -> Letter {
        self.notch
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Whether the current position is the notch letter.
    ///
    /// The machine reads this before rotating anything on a keypress.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Advance the position by one, wrapping `'z'` to `'a'`.
    pub fn rotate(&mut self) {
        self.position = self.position.succ();
    }

    fn offset(&self) -> i32 {
        self.position.index() as i32 - self.ring.index() as i32
    }

    /// Map a letter entering from the plugboard side, before reflection.
    pub fn encode_forward(&self, letter: Letter) -> Letter {
        let offset = self.offset();
        self.wiring.map(letter.shift(offset)).shift(-offset)
    }

    /// Map a letter returning from the reflector.
    ///
    /// Exact inverse of [`encode_forward`](Self::encode_forward) for the
    /// same position and ring.
    pub fn encode_backward(&self, letter: Letter) -> Letter {
        let offset = self.offset();
        self.wiring.unmap(letter.shift(offset)).shift(-offset)
    }
}
