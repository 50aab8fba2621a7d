//! Letter/index conversion over the 26-letter Latin alphabet.
//!
//! Every component of the machine works on zero-based positions
//! (`'A'` = 0 … `'Z'` = 25). Text that reaches these helpers must already
//! be restricted to `A-Z`; see [`crate::text`] for the sanitizer.

/// Number of letters (and rotor contacts).
pub const ALPHABET_LEN: usize = 26;

/// Returns the zero-based position of an upper-case letter.
///
/// The result for characters outside `A-Z` is unspecified but always lies
/// in `0..26`, so downstream table lookups cannot go out of bounds.
///
/// # Examples
///
/// ```
/// use enigma::alphabet::letter_to_index;
///
/// assert_eq!(letter_to_index('A'), 0);
/// assert_eq!(letter_to_index('Z'), 25);
/// ```
#[inline]
pub fn letter_to_index(letter: char) -> usize {
    (letter as u32).wrapping_sub('A' as u32) as usize % ALPHABET_LEN
}

/// Returns the upper-case letter at a zero-based position.
///
/// Positions are reduced modulo 26.
#[inline]
pub fn index_to_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Checked variant of [`letter_to_index`] for configuration input.
///
/// Returns `None` for anything that is not an ASCII upper-case letter.
pub fn parse_letter(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some(letter as usize - 'A' as usize)
    } else {
        None
    }
}
