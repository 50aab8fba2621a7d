//! Reflector: the fixed involution that turns the signal around.

use crate::alphabet::ALPHABET_LEN;
use crate::error::{EnigmaError, Result};
use crate::rotor::parse_wiring;

/// An involutive, fixed-point-free substitution.
///
/// Applying [`reflect`](Self::reflect) twice yields the original index and
/// no index maps to itself. Both properties are checked at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    id: String,
    wiring: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the wiring is not a
    /// permutation, is not its own inverse, or maps any letter to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::reflector::Reflector;
    ///
    /// let ukw_b = Reflector::new("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// assert_eq!(ukw_b.reflect(0), 24);
    /// assert_eq!(ukw_b.reflect(24), 0);
    /// ```
    pub fn new(id: &str, wiring: &str) -> Result<Self> {
        let table = parse_wiring(id, wiring)?;
        for (input, &output) in table.iter().enumerate() {
            let output = output as usize;
            if output == input {
                return Err(EnigmaError::InvalidWiring {
                    id: id.to_string(),
                    reason: "reflector maps a letter to itself",
                });
            }
            if table[output] as usize != input {
                return Err(EnigmaError::InvalidWiring {
                    id: id.to_string(),
                    reason: "reflector wiring is not symmetric",
                });
            }
        }
        Ok(Reflector {
            id: id.to_string(),
            wiring: table,
        })
    }

    /// Reflector identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Maps a contact index to its partner. The index is taken modulo 26.
    #[inline]
    pub fn reflect(&self, index: usize) -> usize {
        usize::from(self.wiring[index % ALPHABET_LEN])
    }
}
