//! The plugboard: pairwise letter swaps on both ends of the signal path.

use super::alphabet::{Letter, ALPHABET_LEN};
use crate::builder::ConfigError;

/// Symmetric letter swaps, identity for unplugged letters.
///
/// The mapping is always an involution: `swap(swap(x)) == x`.
///
/// # Example
///
/// ```rust
/// use enigma::core::{Letter, Plugboard};
///
/// let plugboard = Plugboard::new(&["ab", "cd"]).unwrap();
/// let a = Letter::from_char('a').unwrap();
/// let z = Letter::from_char('z').unwrap();
///
/// assert_eq!(plugboard.swap(a).to_char(), 'b');
/// assert_eq!(plugboard.swap(z), z);
///
/// assert!(Plugboard::new(&["ab", "ac"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [Letter; ALPHABET_LEN],
    pairs: Vec<(Letter, Letter)>,
}

impl Plugboard {
    /// Connect each two-letter pair.
    ///
    /// Fails with [`ConfigError::DuplicatePlugboardLetter`] when a letter
    /// appears more than once across all pairs, and with
    /// [`ConfigError::InvalidPlugboardPair`] when a pair is not two letters.
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self, ConfigError> {
        let mut plugboard = Self::default();
        let mut used = [false; ALPHABET_LEN];

        for pair in pairs {
            let pair = pair.as_ref();
            let (a, b) = parse_pair(pair)?;

            for letter in [a, b] {
                if used[letter.index()] {
                    return Err(ConfigError::DuplicatePlugboardLetter {
                        letter: letter.to_char(),
                    });
                }
                used[letter.index()] = true;
            }

            plugboard.mapping[a.index()] = b;
            plugboard.mapping[b.index()] = a;
            plugboard.pairs.push((a, b));
        }

        Ok(plugboard)
    }

    pub fn swap(&self, letter: Letter) -> Letter {
        self.mapping[letter.index()]
    }

    /// The connected pairs, in the order they were supplied.
    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        let mut mapping = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            mapping[letter.index()] = letter;
        }
        Self {
            mapping,
            pairs: Vec::new(),
        }
    }
}

fn parse_pair(pair: &str) -> Result<(Letter, Letter), ConfigError> {
    let invalid = || ConfigError::InvalidPlugboardPair {
        pair: pair.to_string(),
    };
    let mut letters = pair
        .chars()
        .map(|ch| Letter::from_char(ch.to_ascii_lowercase()));

    match (letters.next(), letters.next(), letters.next()) {
        (Some(Some(a)), Some(Some(b)), None) => Ok((a, b)),
        _ => Err(invalid()),
    }
}
