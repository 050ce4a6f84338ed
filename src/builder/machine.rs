//! Builder for assembling machines.

use crate::builder::error::ConfigError;
use crate::core::{Plugboard, Reflector, Rotor};
use crate::machine::Enigma;

/// Builder for constructing machines with a fluent API.
///
/// Rotors are added left to right. The plugboard defaults to no
/// connections.
pub struct EnigmaBuilder {
    rotors: Vec<Rotor>,
    reflector: Option<Reflector>,
    plugboard: Plugboard,
}

impl EnigmaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            rotors: Vec::new(),
            reflector: None,
            plugboard: Plugboard::default(),
        }
    }

    /// Add the next rotor, left to right.
    pub fn rotor(mut self, rotor: Rotor) -> Self {
        self.rotors.push(rotor);
        self
    }

    /// Add several rotors at once, left to right.
    pub fn rotors(mut self, rotors: impl IntoIterator<Item = Rotor>) -> Self {
        self.rotors.extend(rotors);
        self
    }

    /// Set the reflector (required).
    pub fn reflector(mut self, reflector: Reflector) -> Self {
        self.reflector = Some(reflector);
        self
    }

    pub fn plugboard(mut self, plugboard: Plugboard) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Connect plugboard pairs such as `["ab", "cd"]`.
    /// Returns an error if a letter is plugged twice.
    pub fn plugs<S: AsRef<str>>(mut self, pairs: &[S]) -> Result<Self, ConfigError> {
        self.plugboard = Plugboard::new(pairs)?;
        Ok(self)
    }

    /// Build the machine.
    /// Returns an error unless exactly three rotors and a reflector were given.
    pub fn build(self) -> Result<Enigma, ConfigError> {
        let count = self.rotors.len();
        let rotors: [Rotor; 3] = self
            .rotors
            .try_into()
            .map_err(|_| ConfigError::WrongRotorCount { count })?;
        let reflector = self.reflector.ok_or(ConfigError::MissingReflector)?;

        Ok(Enigma::new(rotors, reflector, self.plugboard))
    }
}

impl Default for EnigmaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::Letter;

    fn rotor(name: &str) -> Rotor {
        Catalog::historical()
            .rotor(name, Letter::A, Letter::A)
            .unwrap()
    }

    fn reflector() -> Reflector {
        Catalog::historical().reflector("B").unwrap()
    }

    #[test]
    fn builder_requires_three_rotors() {
        let result = EnigmaBuilder::new()
            .rotor(rotor("I"))
            .rotor(rotor("II"))
            .reflector(reflector())
            .build();
        assert!(matches!(result, Err(ConfigError::WrongRotorCount { count: 2 })));

        let result = EnigmaBuilder::new()
            .rotors(["I", "II", "III", "IV"].map(rotor))
            .reflector(reflector())
            .build();
        assert!(matches!(result, Err(ConfigError::WrongRotorCount { count: 4 })));
    }

    #[test]
    fn builder_requires_reflector() {
        let result = EnigmaBuilder::new()
            .rotors(["I", "II", "III"].map(rotor))
            .build();
        assert!(matches!(result, Err(ConfigError::MissingReflector)));
    }

    #[test]
    fn builder_rejects_duplicate_plugs() {
        let result = EnigmaBuilder::new().plugs(&["ab", "ba"]);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicatePlugboardLetter { letter: 'b' })
        ));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = EnigmaBuilder::new()
            .rotor(rotor("I"))
            .rotor(rotor("II"))
            .rotor(rotor("III"))
            .reflector(reflector())
            .build()
            .unwrap();

        assert_eq!(machine.setting().to_string(), "aaa");
        assert_eq!(machine.process("aaaaa"), "bdzgo");
    }

    #[test]
    fn builder_keeps_rotor_order() {
        let machine = EnigmaBuilder::new()
            .rotors(["V", "I", "III"].map(rotor))
            .reflector(reflector())
            .plugs(&["xy"])
            .unwrap()
            .build()
            .unwrap();

        let notches: Vec<char> = machine
            .rotors()
            .iter()
            .map(|r| r.notch().to_char())
            .collect();
        assert_eq!(notches, vec!['z', 'q', 'v']);
        assert_eq!(machine.plugboard().pairs().len(), 1);
    }
}
