//! Enigma rotor cipher machine emulator.
//!
//! Reproduces the Enigma I, M3 and M4 machines: historical rotors I-VIII
//! and the thin Beta/Gamma rotors, reflectors A, B, C and their thin
//! variants, ring settings, start positions, an optional plugboard, and
//! the double-stepping of the middle rotor.
//!
//! The crate is the cipher core. Text must already be restricted to
//! `A-Z`; [`text::sanitize_plaintext`] does that for free-form input.
//!
//! # Architecture
//!
//! ```text
//! registry   (static rotor / reflector tables)
//!     ↓ copied per machine
//! Rotor ×N + Reflector + Plugboard
//!     ↓ composed by
//! Enigma     (stepping → plugboard → rotors → reflector → rotors⁻¹ → plugboard)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with identical settings:
//!
//! ```
//! use enigma::{Enigma, MachineConfig};
//!
//! let config = MachineConfig::from_settings(
//!     &["III", "II", "I"],
//!     &[1, 1, 1],
//!     &['A', 'A', 'A'],
//!     "B",
//!     &["AB", "CD"],
//! )
//! .unwrap();
//!
//! let mut encoder = Enigma::from_config(&config).unwrap();
//! let ciphertext = encoder.encode_string("HELLOXWORLD");
//! assert_ne!(ciphertext, "HELLOXWORLD");
//!
//! let mut decoder = Enigma::from_config(&config).unwrap();
//! assert_eq!(decoder.encode_string(&ciphertext), "HELLOXWORLD");
//! ```
//!
//! A four-rotor M4 with a thin reflector:
//!
//! ```
//! use enigma::{Enigma, RotorConfig};
//!
//! let rotors = [
//!     RotorConfig::new("Beta", 1, 'A'),
//!     RotorConfig::new("II", 1, 'N'),
//!     RotorConfig::new("IV", 1, 'J'),
//!     RotorConfig::new("I", 22, 'V'),
//! ];
//! let mut m4 = Enigma::new(&rotors, "B-Thin", &["AT", "BL", "DF"]).unwrap();
//! assert_eq!(m4.encode_string("HELLOWORLD").len(), 10);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod registry;
pub mod rotor;
pub mod text;

mod machine;
pub(crate) mod stepping;

pub use config::{MachineConfig, RotorConfig};
pub use error::{EnigmaError, Result};
pub use machine::{Enigma, MIN_ROTORS};
