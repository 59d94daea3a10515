// Nearest-pitch quantization and random note selection.
//
// `nearest_pitch` is a brute-force scan of every (allowed note, octave)
// candidate. The space is tiny (at most 17 x 6 entries) so there is nothing
// to be clever about; what matters is the iteration order, because ties are
// broken by keeping the *first* candidate that reached the minimum. Notes
// are visited in the order the caller supplies them, octaves 0 through 5
// within each note, and the comparison is strict `<`.

use wren_prng::WrenRng;

use crate::error::TheoryError;
use crate::pitch::{OCTAVE_MAX, OCTAVE_MIN, pitch, pitch_row};

/// Quantize `value` to the nearest pitch obtainable from `allowed_notes`.
///
/// Fails with `EmptyAllowedNotes` if the candidate set is empty and with
/// `UnknownNote` if any member is not a recognized spelling.
pub fn nearest_pitch(value: f64, allowed_notes: &[&str]) -> Result<u8, TheoryError> {
    let mut closest = None;
    let mut min_difference = f64::INFINITY;

    for note in allowed_notes {
        for &candidate in pitch_row(note)? {
            let difference = (value - f64::from(candidate)).abs();
            if difference < min_difference {
                min_difference = difference;
                closest = Some(candidate);
            }
        }
    }

    closest.ok_or(TheoryError::EmptyAllowedNotes)
}

/// Draw `length` uniformly-random notes (with replacement) from
/// `allowed_notes`, resolved to pitches at the fixed `octave`, in draw
/// order.
///
/// The octave is validated before anything is drawn, so an out-of-range
/// octave never consumes randomness.
pub fn random_notes(
    allowed_notes: &[&str],
    octave: i32,
    length: usize,
    rng: &mut WrenRng,
) -> Result<Vec<u8>, TheoryError> {
    if !(OCTAVE_MIN..=OCTAVE_MAX).contains(&octave) {
        return Err(TheoryError::InvalidOctave(octave));
    }
    if allowed_notes.is_empty() {
        return Err(TheoryError::EmptyAllowedNotes);
    }

    let mut pitches = Vec::with_capacity(length);
    for _ in 0..length {
        let note = allowed_notes[rng.range_usize(0, allowed_notes.len())];
        pitches.push(pitch(note, octave)?);
    }
    Ok(pitches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{Mode, scale};
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_hit_is_returned_unchanged() {
        // 60 is C octave 2.
        assert_eq!(nearest_pitch(60.0, &["C"]), Ok(60));
    }

    #[test]
    fn result_is_optimal_over_the_candidate_set() {
        let notes = scale("C", Mode::Major).unwrap();
        for value in [0, 33, 45, 59, 61, 70, 92, 104, 140] {
            let result = nearest_pitch(f64::from(value), &notes).unwrap();
            let best = notes
                .iter()
                .flat_map(|n| pitch_row(n).unwrap().iter().copied())
                .map(|p| (f64::from(value) - f64::from(p)).abs())
                .fold(f64::INFINITY, f64::min);
            assert_eq!((f64::from(value) - f64::from(result)).abs(), best);
        }
    }

    #[test]
    fn ties_keep_the_first_candidate_in_iteration_order() {
        // 37 is one semitone from both C (36) and D (38) in octave 0.
        assert_eq!(nearest_pitch(37.0, &["C", "D"]), Ok(36));
        assert_eq!(nearest_pitch(37.0, &["D", "C"]), Ok(38));
    }

    #[test]
    fn empty_allowed_set_is_rejected() {
        assert_eq!(nearest_pitch(60.0, &[]), Err(TheoryError::EmptyAllowedNotes));
    }

    #[test]
    fn unknown_member_propagates() {
        assert_eq!(
            nearest_pitch(60.0, &["C", "E#"]),
            Err(TheoryError::UnknownNote("E#".to_string()))
        );
    }

    #[test]
    fn random_notes_validates_octave_first() {
        let notes = scale("C", Mode::Major).unwrap();
        let mut rng = WrenRng::new(7);
        assert_eq!(
            random_notes(&notes, -1, 5, &mut rng),
            Err(TheoryError::InvalidOctave(-1))
        );
        assert_eq!(
            random_notes(&notes, 6, 5, &mut rng),
            Err(TheoryError::InvalidOctave(6))
        );
    }

    #[test]
    fn random_notes_returns_length_pitches_at_the_given_octave() {
        let notes = scale("C", Mode::Major).unwrap();
        let mut rng = WrenRng::new(7);
        let pitches = random_notes(&notes, 3, 5, &mut rng).unwrap();
        assert_eq!(pitches.len(), 5);
        for p in pitches {
            assert!(
                notes.iter().any(|n| pitch(n, 3) == Ok(p)),
                "pitch {p} is not in the scale at octave 3"
            );
        }
    }

    #[test]
    fn random_notes_is_deterministic_per_seed() {
        let notes = scale("A", Mode::MinorPentatonic).unwrap();
        let a = random_notes(&notes, 2, 16, &mut WrenRng::new(99)).unwrap();
        let b = random_notes(&notes, 2, 16, &mut WrenRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_notes_rejects_empty_set() {
        let mut rng = WrenRng::new(1);
        assert_eq!(
            random_notes(&[], 2, 5, &mut rng),
            Err(TheoryError::EmptyAllowedNotes)
        );
    }
}
