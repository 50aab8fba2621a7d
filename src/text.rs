//! Plaintext preparation for the 26-key keyboard.
//!
//! The machine only accepts `A-Z`. Callers run free text through
//! [`sanitize_plaintext`] before handing it to [`Enigma`](crate::Enigma).

/// Letter typed in place of a space.
pub const SPACE_FILLER: char = 'X';

/// Prepares free text for encoding.
///
/// Surrounding whitespace is trimmed, letters are upper-cased, spaces
/// become [`SPACE_FILLER`], and everything outside `A-Z` is dropped.
/// Letters whose upper case is not a single `A-Z` letter (`ö`, `ß`) are
/// dropped whole rather than expanded.
///
/// # Examples
///
/// ```
/// use enigma::text::sanitize_plaintext;
///
/// assert_eq!(sanitize_plaintext("  Hello, world! "), "HELLOXWORLD");
/// ```
pub fn sanitize_plaintext(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter_map(|c| match c {
            ' ' => Some(SPACE_FILLER),
            'A'..='Z' => Some(c),
            _ => None,
        })
        .collect()
}
