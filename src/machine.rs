//! Enigma: the assembled machine and its encoding pipeline.
//!
//! Signal path for one key press:
//!
//! ```text
//! key ─ step ─ plugboard ─ rotors (right→left) ─ reflector
//!                                                    │
//! lamp ─ plugboard ─ rotors (left→right, inverse) ───┘
//! ```
//!
//! Encoding is its own inverse: a second machine with identical settings
//! turns the ciphertext back into the plaintext.

use crate::alphabet::{index_to_letter, letter_to_index};
use crate::config::{MachineConfig, RotorConfig};
use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::registry;
use crate::rotor::{Direction, Rotor};
use crate::stepping;

/// Minimum number of rotors; the stepping mechanism drives three.
pub const MIN_ROTORS: usize = 3;

/// A configured Enigma machine.
///
/// All mutable state lives in the rotor offsets, which change on every
/// encoded letter. A machine must not be shared between concurrent
/// sessions; build (or clone) one per message instead.
#[derive(Debug, Clone)]
pub struct Enigma {
    /// Leftmost (next to the reflector) first.
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    /// Builds a machine from registry identifiers.
    ///
    /// Each rotor is a fresh copy of its registry template with the
    /// requested ring setting and start position applied.
    ///
    /// # Parameters
    /// - `rotors`: Rotor slots, leftmost first. At least three.
    /// - `reflector_id`: Registry identifier of the reflector.
    /// - `plug_pairs`: Two-letter plugboard pairs; may be empty.
    ///
    /// # Errors
    /// - [`EnigmaError::TooFewRotors`] for fewer than three rotors.
    /// - [`EnigmaError::UnknownRotorId`] / [`EnigmaError::UnknownReflectorId`]
    ///   for identifiers missing from the registry.
    /// - [`EnigmaError::RingOrPositionOutOfRange`] for a ring outside 1-26
    ///   or a start letter outside A-Z.
    /// - [`EnigmaError::InvalidPlugboardPairing`] for malformed or
    ///   overlapping plug pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Enigma, RotorConfig};
    ///
    /// let rotors = [
    ///     RotorConfig::new("I", 1, 'A'),
    ///     RotorConfig::new("II", 1, 'A'),
    ///     RotorConfig::new("III", 1, 'A'),
    /// ];
    /// let mut machine = Enigma::new(&rotors, "B", &[] as &[&str]).unwrap();
    /// assert_eq!(machine.encode_string("AAAAA"), "BDZGO");
    /// ```
    pub fn new<S: AsRef<str>>(
        rotors: &[RotorConfig],
        reflector_id: &str,
        plug_pairs: &[S],
    ) -> Result<Self> {
        if rotors.len() < MIN_ROTORS {
            return Err(EnigmaError::TooFewRotors(rotors.len()));
        }

        let rotors = rotors
            .iter()
            .map(|config| {
                registry::get_rotor_template(&config.id)?
                    .instantiate()?
                    .with_settings(config.ring, config.start)
            })
            .collect::<Result<Vec<_>>>()?;
        let reflector = registry::get_reflector(reflector_id)?;
        let plugboard = Plugboard::new(plug_pairs)?;

        let machine = Enigma {
            rotors,
            reflector,
            plugboard,
        };
        log::debug!(
            "assembled machine: rotors [{}], rings [{}], positions {}, reflector {}, {} plug pairs",
            machine
                .rotors
                .iter()
                .map(Rotor::id)
                .collect::<Vec<_>>()
                .join(" "),
            machine
                .rotors
                .iter()
                .map(|r| (r.ring_setting() + 1).to_string())
                .collect::<Vec<_>>()
                .join(" "),
            machine.positions(),
            machine.reflector.id(),
            machine.plugboard.pair_count()
        );
        Ok(machine)
    }

    /// Builds a machine from a [`MachineConfig`].
    ///
    /// # Errors
    /// Same as [`Enigma::new`].
    pub fn from_config(config: &MachineConfig) -> Result<Self> {
        Self::new(&config.rotors, &config.reflector, &config.plugboard)
    }

    /// Letters currently visible in the rotor windows, leftmost first.
    pub fn positions(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// The rotor stack, leftmost first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Encodes one letter, stepping the rotors first.
    ///
    /// # Parameters
    /// - `letter`: An upper-case letter `A`-`Z`. Other characters give an
    ///   unspecified (but in-alphabet) result.
    ///
    /// # Returns
    /// The lamp that lights. May equal `letter` when a plugboard is fitted.
    pub fn encode_char(&mut self, letter: char) -> char {
        stepping::step(&mut self.rotors);

        let mut index = self.plugboard.swap(letter_to_index(letter));
        for rotor in self.rotors.iter().rev() {
            index = rotor.substitute(index, Direction::Forward);
        }
        index = self.reflector.reflect(index);
        for rotor in &self.rotors {
            index = rotor.substitute(index, Direction::Inverse);
        }
        index_to_letter(self.plugboard.swap(index))
    }

    /// Encodes a string of upper-case letters.
    ///
    /// Rotor state carries from one letter to the next. The output always
    /// has the same length as the input.
    pub fn encode_string(&mut self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for letter in text.chars() {
            output.push(self.encode_char(letter));
        }
        output
    }
}
