//! Rotor stepping with the double-step anomaly.
//!
//! Only the three rightmost rotors take part; a fourth (M4 Zusatzwalze)
//! rotor to their left stays where it was set.
//!
//! Each key press reads both notches first, then turns the rotors:
//!
//! ```text
//!   rightmost      always advances
//!   middle         advances if rightmost was at its notch
//!                  OR middle itself was at its notch (double step)
//!   third          advances if middle was at its notch
//! ```
//!
//! A middle rotor sitting on its notch pushes itself along with its left
//! neighbour, so it turns on two consecutive key presses: once when the
//! rightmost rotor carries it onto the notch and again on the very next
//! press. With rotors I-II-III this gives the familiar ADU, ADV, AEW, BFX.

use crate::rotor::Rotor;

/// Advances the rotor stack by one key press.
///
/// `rotors` is ordered leftmost first. Stacks shorter than three rotors are
/// rejected when the machine is built, so this is never called with one.
pub(crate) fn step(rotors: &mut [Rotor]) {
    let [.., third, middle, rightmost] = rotors else {
        return;
    };

    let rightmost_at_notch = rightmost.is_at_notch();
    let middle_at_notch = middle.is_at_notch();

    if rightmost_at_notch || middle_at_notch {
        middle.advance();
    }
    if middle_at_notch {
        third.advance();
    }
    rightmost.advance();

    log::trace!(
        "stepped to {}{}{}",
        third.window(),
        middle.window(),
        rightmost.window()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(start: [char; 3]) -> Vec<Rotor> {
        [
            ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
            ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
            ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
        ]
        .iter()
        .zip(start)
        .map(|(&(id, wiring, notch), s)| {
            Rotor::new(id, wiring, notch)
                .unwrap()
                .with_settings(1, s)
                .unwrap()
        })
        .collect()
    }

    fn windows(rotors: &[Rotor]) -> String {
        rotors.iter().map(Rotor::window).collect()
    }

    #[test]
    fn test_single_step() {
        let mut rotors = stack(['A', 'A', 'A']);
        step(&mut rotors);
        assert_eq!(windows(&rotors), "AAB");
    }

    #[test]
    fn test_carry_into_middle() {
        let mut rotors = stack(['A', 'A', 'V']);
        step(&mut rotors);
        assert_eq!(windows(&rotors), "ABW");
    }

    #[test]
    fn test_double_step_sequence() {
        let mut rotors = stack(['A', 'D', 'U']);
        let mut seen = Vec::new();
        for _ in 0..4 {
            step(&mut rotors);
            seen.push(windows(&rotors));
        }
        assert_eq!(seen, ["ADV", "AEW", "BFX", "BFY"]);
    }

    #[test]
    fn test_both_notches_advance_middle_once() {
        // Rightmost on V and middle on E in the same press.
        let mut rotors = stack(['A', 'E', 'V']);
        step(&mut rotors);
        assert_eq!(windows(&rotors), "BFW");
    }

    #[test]
    fn test_fourth_rotor_never_steps() {
        let mut rotors = stack(['A', 'D', 'U']);
        let greek = Rotor::new("Beta", "LEYJVCNIXWPBQMDRTAKZGFUHOS", "")
            .unwrap()
            .with_settings(1, 'Q')
            .unwrap();
        rotors.insert(0, greek);
        for _ in 0..(26 * 26) {
            step(&mut rotors);
        }
        assert_eq!(rotors[0].window(), 'Q');
    }
}
