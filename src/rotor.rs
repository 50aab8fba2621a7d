//! Rotor: a wired substitution wheel with ring setting and rotating offset.
//!
//! The wiring is stored as a forward table together with its inverse so
//! that both the inbound pass (towards the reflector) and the return pass
//! are single table lookups. The ring setting shifts the wiring relative
//! to the alphabet ring; the offset is the letter visible in the window
//! and is the only state that changes while encoding.

use crate::alphabet::{index_to_letter, parse_letter, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};

/// Direction of the signal through a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Entering from the right, travelling towards the reflector.
    Forward,
    /// Returning from the reflector towards the plugboard.
    Inverse,
}

/// A single rotor with its wiring, notches, ring setting and offset.
///
/// Values are owned: each machine holds its own copies, so stepping one
/// machine never affects another built from the same registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    id: String,
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    /// Bit `n` set when position `n` carries a turnover notch.
    notches: u32,
    ring_setting: usize,
    offset: usize,
}

/// Parses a 26-letter wiring string into a permutation table.
///
/// # Errors
/// Returns [`EnigmaError::InvalidWiring`] if the string is not exactly 26
/// upper-case letters or if any letter repeats.
pub(crate) fn parse_wiring(id: &str, wiring: &str) -> Result<[u8; ALPHABET_LEN]> {
    let invalid = |reason| EnigmaError::InvalidWiring {
        id: id.to_string(),
        reason,
    };

    if wiring.chars().count() != ALPHABET_LEN {
        return Err(invalid("wiring must have exactly 26 letters"));
    }

    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, letter) in table.iter_mut().zip(wiring.chars()) {
        let index = parse_letter(letter).ok_or_else(|| invalid("wiring must use letters A-Z"))?;
        if seen[index] {
            return Err(invalid("wiring is not a permutation"));
        }
        seen[index] = true;
        *slot = index as u8;
    }
    Ok(table)
}

impl Rotor {
    /// Creates a rotor from its wiring and notch letters.
    ///
    /// The rotor starts with ring setting 1 and offset `A`; use
    /// [`with_settings`](Self::with_settings) to position it.
    ///
    /// # Parameters
    /// - `id`: Identifier reported in errors and logs.
    /// - `wiring`: 26 letters; letter `i` is where contact `i` maps on the
    ///   forward pass.
    /// - `notches`: Zero or more letters at which this rotor carries the
    ///   next rotor on the following key press.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the wiring is not a
    /// permutation of `A-Z` or a notch is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::rotor::Rotor;
    ///
    /// let rotor = Rotor::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
    /// assert_eq!(rotor.window(), 'A');
    /// ```
    pub fn new(id: &str, wiring: &str, notches: &str) -> Result<Self> {
        let wiring = parse_wiring(id, wiring)?;

        let mut inverse = [0u8; ALPHABET_LEN];
        for (input, &output) in wiring.iter().enumerate() {
            inverse[output as usize] = input as u8;
        }

        let mut mask = 0u32;
        for letter in notches.chars() {
            let index = parse_letter(letter).ok_or_else(|| EnigmaError::InvalidWiring {
                id: id.to_string(),
                reason: "notches must use letters A-Z",
            })?;
            mask |= 1 << index;
        }

        Ok(Rotor {
            id: id.to_string(),
            wiring,
            inverse,
            notches: mask,
            ring_setting: 0,
            offset: 0,
        })
    }

    /// Applies a ring setting and start position, consuming the rotor.
    ///
    /// # Parameters
    /// - `ring`: Ring setting as printed on the rotor, 1-26.
    /// - `start`: Letter shown in the window before the first key press.
    ///
    /// # Errors
    /// Returns [`EnigmaError::RingOrPositionOutOfRange`] if `ring` is not in
    /// 1-26 or `start` is not an upper-case letter. Values are never clamped.
    pub fn with_settings(mut self, ring: u8, start: char) -> Result<Self> {
        if !(1..=ALPHABET_LEN as u8).contains(&ring) {
            return Err(EnigmaError::RingOrPositionOutOfRange {
                rotor: self.id,
                setting: format!("ring setting {ring}"),
            });
        }
        let Some(offset) = parse_letter(start) else {
            return Err(EnigmaError::RingOrPositionOutOfRange {
                rotor: self.id,
                setting: format!("start position {start:?}"),
            });
        };
        self.ring_setting = (ring - 1) as usize;
        self.offset = offset;
        Ok(self)
    }

    /// Rotor identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current rotational position, 0-25.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Zero-based ring setting (ring 1 is 0).
    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// Letter currently visible in the window.
    pub fn window(&self) -> char {
        index_to_letter(self.offset)
    }

    /// Turns the rotor by one position.
    pub fn advance(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
    }

    /// Whether the current position carries a turnover notch.
    ///
    /// Must be read before the rotor is advanced in the same key press.
    pub fn is_at_notch(&self) -> bool {
        self.notches & (1 << self.offset) != 0
    }

    /// Substitutes a contact index through the rotor.
    ///
    /// The index is shifted into the wiring's frame by `offset - ring`,
    /// looked up in the forward or inverse table, and shifted back.
    /// Forward followed by inverse at the same position is the identity.
    ///
    /// # Parameters
    /// - `index`: Contact position, 0-25.
    /// - `direction`: Which table to use.
    ///
    /// # Returns
    /// The output contact position, 0-25.
    pub fn substitute(&self, index: usize, direction: Direction) -> usize {
        let shift = self.offset + ALPHABET_LEN - self.ring_setting;
        let contact = (index + shift) % ALPHABET_LEN;
        let mapped = usize::from(match direction {
            Direction::Forward => self.wiring[contact],
            Direction::Inverse => self.inverse[contact],
        });
        (mapped + ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
    }
}
