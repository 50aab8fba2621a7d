//! Plugboard (Steckerbrett): optional letter swaps around the rotor stack.

use crate::alphabet::{parse_letter, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};

/// A partial involution over the alphabet built from disjoint letter pairs.
///
/// Unplugged letters map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// A plugboard with no cables.
    pub fn identity() -> Self {
        let mut wiring = [0u8; ALPHABET_LEN];
        for (i, slot) in wiring.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { wiring }
    }

    /// Builds a plugboard from two-letter pairs such as `"AB"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugboardPairing`] naming the offending
    /// pair if it is not two upper-case letters, pairs a letter with itself,
    /// or uses a letter already plugged by an earlier pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::plugboard::Plugboard;
    ///
    /// let board = Plugboard::new(&["AB", "CD"]).unwrap();
    /// assert_eq!(board.swap(0), 1);
    /// assert_eq!(board.swap(4), 4);
    ///
    /// assert!(Plugboard::new(&["AB", "AC"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        let mut board = Self::identity();
        let mut used = [false; ALPHABET_LEN];

        for pair in pairs {
            let pair = pair.as_ref();
            let invalid = || EnigmaError::InvalidPlugboardPairing(pair.to_string());

            let mut letters = pair.chars().map(parse_letter);
            let (Some(Some(a)), Some(Some(b)), None) =
                (letters.next(), letters.next(), letters.next())
            else {
                return Err(invalid());
            };
            if a == b || used[a] || used[b] {
                return Err(invalid());
            }

            used[a] = true;
            used[b] = true;
            board.wiring[a] = b as u8;
            board.wiring[b] = a as u8;
        }
        Ok(board)
    }

    /// Returns the partner of a plugged letter, or the letter itself. The
    /// index is taken modulo 26.
    #[inline]
    pub fn swap(&self, index: usize) -> usize {
        usize::from(self.wiring[index % ALPHABET_LEN])
    }

    /// Number of cables plugged in.
    pub fn pair_count(&self) -> usize {
        self.wiring
            .iter()
            .enumerate()
            .filter(|&(i, &out)| out as usize != i)
            .count()
            / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_identity() {
        let board = Plugboard::new::<&str>(&[]).unwrap();
        assert_eq!(board, Plugboard::identity());
        for i in 0..ALPHABET_LEN {
            assert_eq!(board.swap(i), i);
        }
        assert_eq!(board.pair_count(), 0);
    }

    #[test]
    fn test_pairs_swap_both_ways() {
        let board = Plugboard::new(&["AZ", "MN"]).unwrap();
        assert_eq!(board.swap(0), 25);
        assert_eq!(board.swap(25), 0);
        assert_eq!(board.swap(12), 13);
        assert_eq!(board.swap(13), 12);
        assert_eq!(board.swap(1), 1);
        assert_eq!(board.pair_count(), 2);
    }

    #[test]
    fn test_swap_twice_is_identity() {
        let board = Plugboard::new(&["AT", "BL", "DF", "GJ", "HM"]).unwrap();
        for i in 0..ALPHABET_LEN {
            assert_eq!(board.swap(board.swap(i)), i);
        }
    }

    #[test]
    fn test_swap_wraps_index() {
        let board = Plugboard::new(&["AZ", "BY"]).unwrap();
        assert_eq!(board.swap(26), 25);
        assert_eq!(board.swap(27), 24);
        assert_eq!(board.swap(28), 2);
    }

    #[test]
    fn test_rejects_reused_letter() {
        assert_eq!(
            Plugboard::new(&["AB", "AC"]),
            Err(EnigmaError::InvalidPlugboardPairing("AC".to_string()))
        );
        assert_eq!(
            Plugboard::new(&["AB", "CB"]),
            Err(EnigmaError::InvalidPlugboardPairing("CB".to_string()))
        );
    }

    #[test]
    fn test_rejects_self_pair() {
        assert_eq!(
            Plugboard::new(&["AA"]),
            Err(EnigmaError::InvalidPlugboardPairing("AA".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_pairs() {
        for pair in ["", "A", "ABC", "ab", "A1"] {
            assert_eq!(
                Plugboard::new(&[pair]),
                Err(EnigmaError::InvalidPlugboardPairing(pair.to_string()))
            );
        }
    }
}
