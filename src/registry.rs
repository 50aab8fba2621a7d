//! Historical rotor and reflector tables.
//!
//! The tables are `static` data and are never mutated. Lookups hand out
//! owned [`Rotor`]/[`Reflector`] values built from a template, so machines
//! never share mutable state with the registry or with each other.
//!
//! Identifiers are matched ignoring ASCII case (`B-Thin` and `b-thin` are
//! the same reflector).

use crate::error::{EnigmaError, Result};
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Immutable description of a historical rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorTemplate {
    /// Identifier as accepted by [`get_rotor_template`].
    pub id: &'static str,
    /// Forward wiring, contact `A` first.
    pub wiring: &'static str,
    /// Turnover letters; empty for rotors that never carry.
    pub notches: &'static str,
}

impl RotorTemplate {
    /// Builds a fresh rotor at ring 1, position `A`.
    ///
    /// # Errors
    /// Propagates [`EnigmaError::InvalidWiring`] from [`Rotor::new`].
    pub fn instantiate(&self) -> Result<Rotor> {
        Rotor::new(self.id, self.wiring, self.notches)
    }
}

#[derive(Debug, Clone, Copy)]
struct ReflectorTemplate {
    id: &'static str,
    wiring: &'static str,
}

/// Enigma I / M3 rotors I-VIII and the M4 thin rotors Beta and Gamma.
#[rustfmt::skip]
static ROTORS: [RotorTemplate; 10] = [
    RotorTemplate { id: "I", wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ", notches: "Q" },
    RotorTemplate { id: "II", wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE", notches: "E" },
    RotorTemplate { id: "III", wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO", notches: "V" },
    RotorTemplate { id: "IV", wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB", notches: "J" },
    RotorTemplate { id: "V", wiring: "VZBRGITYUPSDNHLXAWMJQOFECK", notches: "Z" },
    RotorTemplate { id: "VI", wiring: "JPGVOUMFYQBENHZRDKASXLICTW", notches: "ZM" },
    RotorTemplate { id: "VII", wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT", notches: "ZM" },
    RotorTemplate { id: "VIII", wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV", notches: "ZM" },
    RotorTemplate { id: "Beta", wiring: "LEYJVCNIXWPBQMDRTAKZGFUHOS", notches: "" },
    RotorTemplate { id: "Gamma", wiring: "FSOKANUERHMBTIYCWLQPZXVGJD", notches: "" },
];

/// Wide reflectors A-C and the M4 thin reflectors.
#[rustfmt::skip]
static REFLECTORS: [ReflectorTemplate; 5] = [
    ReflectorTemplate { id: "A", wiring: "EJMZALYXVBWFCRQUONTSPIKHGD" },
    ReflectorTemplate { id: "B", wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT" },
    ReflectorTemplate { id: "C", wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL" },
    ReflectorTemplate { id: "B-Thin", wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS" },
    ReflectorTemplate { id: "C-Thin", wiring: "RDOBJNTKVEHMLFCWZAXGYIPSUQ" },
];

/// Looks up a rotor template by identifier.
///
/// # Errors
/// Returns [`EnigmaError::UnknownRotorId`] if no rotor has that identifier.
///
/// # Examples
///
/// ```
/// use enigma::registry::get_rotor_template;
///
/// assert_eq!(get_rotor_template("III").unwrap().notches, "V");
/// assert!(get_rotor_template("IX").is_err());
/// ```
pub fn get_rotor_template(id: &str) -> Result<&'static RotorTemplate> {
    ROTORS
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| EnigmaError::UnknownRotorId(id.to_string()))
}

/// Builds a reflector by identifier.
///
/// # Errors
/// Returns [`EnigmaError::UnknownReflectorId`] if no reflector has that
/// identifier.
pub fn get_reflector(id: &str) -> Result<Reflector> {
    let template = REFLECTORS
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| EnigmaError::UnknownReflectorId(id.to_string()))?;
    Reflector::new(template.id, template.wiring)
}

/// Identifiers of all known rotors, in table order.
pub fn rotor_ids() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|t| t.id)
}

/// Identifiers of all known reflectors, in table order.
pub fn reflector_ids() -> impl Iterator<Item = &'static str> {
    REFLECTORS.iter().map(|t| t.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET_LEN;

    #[test]
    fn test_all_rotor_templates_are_valid() {
        for template in &ROTORS {
            assert!(template.instantiate().is_ok(), "rotor {}", template.id);
        }
    }

    #[test]
    fn test_all_reflectors_are_fixed_point_free_involutions() {
        for id in reflector_ids() {
            let reflector = get_reflector(id).unwrap();
            for i in 0..ALPHABET_LEN {
                assert_ne!(reflector.reflect(i), i, "reflector {}", id);
                assert_eq!(reflector.reflect(reflector.reflect(i)), i);
            }
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(get_reflector("b-thin").unwrap().id(), "B-Thin");
        assert_eq!(get_rotor_template("beta").unwrap().id, "Beta");
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(
            get_rotor_template("IX"),
            Err(EnigmaError::UnknownRotorId("IX".to_string()))
        );
        assert_eq!(
            get_reflector("D"),
            Err(EnigmaError::UnknownReflectorId("D".to_string()))
        );
    }

    #[test]
    fn test_greek_rotors_have_no_notches() {
        for id in ["Beta", "Gamma"] {
            assert!(get_rotor_template(id).unwrap().notches.is_empty());
        }
    }

    #[test]
    fn test_instantiate_returns_independent_copies() {
        let template = get_rotor_template("I").unwrap();
        let mut a = template.instantiate().unwrap();
        let b = template.instantiate().unwrap();
        a.advance();
        assert_eq!(a.offset(), 1);
        assert_eq!(b.offset(), 0);
        assert_eq!(template.instantiate().unwrap().offset(), 0);
    }

    #[test]
    fn test_id_listing() {
        assert_eq!(rotor_ids().count(), 10);
        assert_eq!(
            reflector_ids().collect::<Vec<_>>(),
            ["A", "B", "C", "B-Thin", "C-Thin"]
        );
    }
}
