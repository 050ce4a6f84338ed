//! Builder API and configuration errors.
//!
//! This module provides the fluent [`EnigmaBuilder`] and the
//! [`ConfigError`] every constructor in the crate returns.

pub mod error;
pub mod machine;

pub use error::ConfigError;
pub use machine::EnigmaBuilder;

use crate::catalog::Catalog;
use crate::core::Letter;
use crate::machine::{Enigma, RotorSetting};

/// Build a machine from catalog names with all rings at `'a'` and no plugs.
///
/// # Example
///
/// ```
/// use enigma::builder::from_catalog;
/// use enigma::catalog::Catalog;
///
/// let mut machine = from_catalog(&Catalog::historical(), ["I", "II", "III"], "B", "aaa").unwrap();
/// assert_eq!(machine.process("aaaaa"), "bdzgo");
/// ```
pub fn from_catalog(
    catalog: &Catalog,
    rotors: [&str; 3],
    reflector: &str,
    setting: &str,
) -> Result<Enigma, ConfigError> {
    let setting: RotorSetting = setting.parse()?;
    let ring = Letter::A;
    let [left, middle, right] = rotors;

    EnigmaBuilder::new()
        .rotor(catalog.rotor(left, setting.left, ring)?)
        .rotor(catalog.rotor(middle, setting.middle, ring)?)
        .rotor(catalog.rotor(right, setting.right, ring)?)
        .reflector(catalog.reflector(reflector)?)
        .build()
}
