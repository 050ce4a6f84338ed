//! The fixed reflector at the far end of the rotor stack.

use super::alphabet::Letter;
use super::wiring::Wiring;
use crate::builder::ConfigError;

/// A fixed letter-to-letter mapping that turns the signal back.
///
/// The wiring is accepted as given. Historical reflectors are involutions
/// with no fixed points, but neither property is enforced; use
/// [`is_involution`](Self::is_involution) and
/// [`fixed_points`](Self::fixed_points) to inspect a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    pub fn new(wiring: Wiring) -> Self {
        Self { wiring }
    }

    /// Build a reflector pairing alphabet index `i` with `wiring[i]`.
    pub fn parse(wiring: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(Wiring::parse(wiring)?))
    }

    /// Build a reflector from a catalog wiring.
    pub fn from_spec(wiring: &Wiring) -> Self {
        Self::new(wiring.clone())
    }

    pub fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.map(letter)
    }

    pub fn is_involution(&self) -> bool {
        Letter::all().all(|l| self.reflect(self.reflect(l)) == l)
    }

    /// Letters the reflector sends back to themselves.
    pub fn fixed_points(&self) -> Vec<Letter> {
        Letter::all().filter(|&l| self.reflect(l) == l).collect()
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}
