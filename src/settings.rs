//! Serializable machine configuration.

use crate::builder::{ConfigError, EnigmaBuilder};
use crate::catalog::Catalog;
use crate::core::Plugboard;
use crate::machine::{Enigma, RotorSetting};
use serde::{Deserialize, Serialize};

fn default_rings() -> String {
    "aaa".to_string()
}

/// Everything needed to set up a machine by name.
///
/// Rotor names, positions and rings are all left, middle, right.
///
/// # Example
///
/// ```rust
/// use enigma::catalog::Catalog;
/// use enigma::settings::MachineSettings;
///
/// let settings = MachineSettings::from_json(r#"{
///     "rotors": ["I", "II", "III"],
///     "positions": "abc",
///     "reflector": "B",
///     "plugboard": ["ab", "cd", "ef"]
/// }"#).unwrap();
///
/// let mut machine = settings.build(&Catalog::historical()).unwrap();
/// assert_eq!(machine.process("hello world"), "rvmul laiai");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    pub rotors: [String; 3],
    pub positions: String,
    #[serde(default = "default_rings")]
    pub rings: String,
    pub reflector: String,
    #[serde(default)]
    pub plugboard: Vec<String>,
}

impl MachineSettings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve names against `catalog` and assemble the machine.
    pub fn build(&self, catalog: &Catalog) -> Result<Enigma, ConfigError> {
        let positions: RotorSetting = self.positions.parse()?;
        let rings: RotorSetting = self.rings.parse()?;
        let [left, middle, right] = &self.rotors;

        EnigmaBuilder::new()
            .rotor(catalog.rotor(left, positions.left, rings.left)?)
            .rotor(catalog.rotor(middle, positions.middle, rings.middle)?)
            .rotor(catalog.rotor(right, positions.right, rings.right)?)
            .reflector(catalog.reflector(&self.reflector)?)
            .plugboard(Plugboard::new(self.plugboard.as_slice())?)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> MachineSettings {
        MachineSettings {
            rotors: ["I".to_string(), "II".to_string(), "III".to_string()],
            positions: "abc".to_string(),
            rings: "aaa".to_string(),
            reflector: "B".to_string(),
            plugboard: vec!["ab".to_string(), "cd".to_string(), "ef".to_string()],
        }
    }

    #[test]
    fn defaults_fill_rings_and_plugboard() {
        let parsed = MachineSettings::from_json(
            r#"{ "rotors": ["I", "II", "III"], "positions": "aaa", "reflector": "B" }"#,
        )
        .unwrap();
        assert_eq!(parsed.rings, "aaa");
        assert!(parsed.plugboard.is_empty());
    }

    #[test]
    fn settings_survive_json() {
        let original = settings();
        let json = original.to_json().unwrap();
        assert_eq!(MachineSettings::from_json(&json).unwrap(), original);
    }

    #[test]
    fn rings_reach_the_rotors() {
        let mut s = settings();
        s.rings = "bcd".to_string();
        let machine = s.build(&Catalog::historical()).unwrap();
        let rings: String = machine.rotors().iter().map(|r| r.ring().to_char()).collect();
        assert_eq!(rings, "bcd");
    }

    #[test]
    fn invalid_settings_fail_to_build() {
        let catalog = Catalog::historical();

        let mut s = settings();
        s.positions = "ab".to_string();
        assert!(matches!(s.build(&catalog), Err(ConfigError::InvalidLetter { .. })));

        let mut s = settings();
        s.plugboard.push("ag".to_string());
        assert!(matches!(
            s.build(&catalog),
            Err(ConfigError::DuplicatePlugboardLetter { letter: 'a' })
        ));

        let mut s = settings();
        s.reflector = "D".to_string();
        assert!(matches!(s.build(&catalog), Err(ConfigError::UnknownReflector(_))));
    }

    #[test]
    fn wrong_rotor_count_is_a_document_error() {
        let result = MachineSettings::from_json(
            r#"{ "rotors": ["I", "II"], "positions": "aa", "reflector": "B" }"#,
        );
        assert!(matches!(result, Err(ConfigError::Document(_))));
    }
}
