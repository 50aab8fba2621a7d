//! Error types for the Enigma library.

use thiserror::Error;

/// Convenience alias used by every fallible constructor in the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;

/// Configuration errors reported while assembling a machine.
///
/// Encoding itself never fails: once an [`Enigma`](crate::Enigma) exists,
/// every step of the pipeline is total over the 26-letter alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Requested rotor identifier is not in the registry.
    #[error("unknown rotor \"{0}\"")]
    UnknownRotorId(String),
    /// Requested reflector identifier is not in the registry.
    #[error("unknown reflector \"{0}\"")]
    UnknownReflectorId(String),
    /// A plug pair is malformed, pairs a letter with itself, or reuses a letter.
    #[error("invalid plugboard pair \"{0}\"")]
    InvalidPlugboardPairing(String),
    /// Ring setting outside 1-26 or start position outside A-Z.
    #[error("rotor {rotor}: {setting} is out of range")]
    RingOrPositionOutOfRange { rotor: String, setting: String },
    /// Rotor ids, ring settings and start positions have different lengths.
    #[error(
        "number of rotors ({rotors}), rings ({rings}) and positions ({positions}) should be equal"
    )]
    ConfigurationCountMismatch {
        rotors: usize,
        rings: usize,
        positions: usize,
    },
    /// Fewer than three rotors were requested.
    #[error("at least 3 rotors are required, got {0}")]
    TooFewRotors(usize),
    /// A wiring or notch table is structurally broken.
    #[error("invalid wiring for {id}: {reason}")]
    InvalidWiring { id: String, reason: &'static str },
}
