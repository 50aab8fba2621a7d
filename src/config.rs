//! Machine configuration values.
//!
//! These are plain data: how they were gathered (flags, prompts, files) is
//! up to the caller. Structural checks happen when the machine is built.

use crate::error::{EnigmaError, Result};

/// Default rotor order, leftmost first.
pub const DEFAULT_ROTORS: [&str; 3] = ["I", "II", "III"];
/// Default reflector.
pub const DEFAULT_REFLECTOR: &str = "B";
/// Default ring setting for every rotor.
pub const DEFAULT_RING: u8 = 1;
/// Default start position for every rotor.
pub const DEFAULT_POSITION: char = 'A';

/// Settings for one rotor slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorConfig {
    /// Registry identifier, e.g. `"III"` or `"Beta"`.
    pub id: String,
    /// Ring setting, 1-26.
    pub ring: u8,
    /// Start position, `'A'`-`'Z'`.
    pub start: char,
}

impl RotorConfig {
    /// Settings for rotor `id` at ring `ring` (1-26), starting at `start`.
    ///
    /// Nothing is validated here; out-of-range values are reported when the
    /// machine is built.
    pub fn new(id: impl Into<String>, ring: u8, start: char) -> Self {
        RotorConfig {
            id: id.into(),
            ring,
            start,
        }
    }
}

/// Full machine setup: rotor slots leftmost first, reflector and plug pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor slots, leftmost (next to the reflector) first.
    pub rotors: Vec<RotorConfig>,
    /// Reflector registry identifier, e.g. `"B"` or `"C-Thin"`.
    pub reflector: String,
    /// Two-letter plug pairs such as `"AB"`; empty for no cables.
    pub plugboard: Vec<String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: DEFAULT_ROTORS
                .iter()
                .map(|id| RotorConfig::new(*id, DEFAULT_RING, DEFAULT_POSITION))
                .collect(),
            reflector: DEFAULT_REFLECTOR.to_string(),
            plugboard: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Zips parallel rotor, ring and position lists into a configuration.
    ///
    /// An empty `rings` or `positions` list stands for "default for every
    /// rotor" (ring 1, position `A`).
    ///
    /// # Errors
    /// Returns [`EnigmaError::ConfigurationCountMismatch`] if the three
    /// lists (after defaulting) do not have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_settings(
    ///     &["III", "II", "I"], &[], &['A', 'D', 'U'], "B", &["AB"],
    /// ).unwrap();
    /// assert_eq!(config.rotors[1].start, 'D');
    /// assert_eq!(config.rotors[1].ring, 1);
    ///
    /// let mismatched = MachineConfig::from_settings(&["I", "II"], &[1], &[], "B", &["AB"]);
    /// assert!(mismatched.is_err());
    /// ```
    pub fn from_settings<R, P>(
        rotors: &[R],
        rings: &[u8],
        positions: &[char],
        reflector: &str,
        plugboard: &[P],
    ) -> Result<Self>
    where
        R: AsRef<str>,
        P: AsRef<str>,
    {
        let rings = if rings.is_empty() {
            vec![DEFAULT_RING; rotors.len()]
        } else {
            rings.to_vec()
        };
        let positions = if positions.is_empty() {
            vec![DEFAULT_POSITION; rotors.len()]
        } else {
            positions.to_vec()
        };

        if rotors.len() != rings.len() || rotors.len() != positions.len() {
            return Err(EnigmaError::ConfigurationCountMismatch {
                rotors: rotors.len(),
                rings: rings.len(),
                positions: positions.len(),
            });
        }

        Ok(MachineConfig {
            rotors: rotors
                .iter()
                .zip(rings)
                .zip(positions)
                .map(|((id, ring), start)| RotorConfig::new(id.as_ref(), ring, start))
                .collect(),
            reflector: reflector.to_string(),
            plugboard: plugboard.iter().map(|p| p.as_ref().to_string()).collect(),
        })
    }
}
