// The pitch table: (note name, octave index) -> MIDI pitch number.
//
// Six octaves are pre-tabulated per note name, octave index 0 through 5.
// Octave 0 of A is MIDI 33 (A1 in scientific pitch notation) and each row
// ascends in steps of 12, topping out at G# octave 5 = MIDI 104, so every
// value sits comfortably in the 0-127 MIDI range.
//
// Seventeen spellings are recognized: the 12 chromatic classes plus flat
// aliases for the five accidentals. An alias shares its row with the sharp
// spelling (one match arm per pitch class), so enharmonic pairs are
// element-wise identical by construction. Double-accidental spellings that
// appear in the chord catalog (E#, F##, Ebb, ...) are deliberately *not* in
// this table; looking one up is an `UnknownNote` error.

use crate::error::TheoryError;

/// Lowest valid octave index.
pub const OCTAVE_MIN: i32 = 0;
/// Highest valid octave index.
pub const OCTAVE_MAX: i32 = 5;

/// All six tabulated pitches for a note name, octave 0 through 5.
pub fn pitch_row(note: &str) -> Result<&'static [u8; 6], TheoryError> {
    let row: &'static [u8; 6] = match note {
        "A" => &[33, 45, 57, 69, 81, 93],
        "A#" | "Bb" => &[34, 46, 58, 70, 82, 94],
        "B" => &[35, 47, 59, 71, 83, 95],
        "C" => &[36, 48, 60, 72, 84, 96],
        "C#" | "Db" => &[37, 49, 61, 73, 85, 97],
        "D" => &[38, 50, 62, 74, 86, 98],
        "D#" | "Eb" => &[39, 51, 63, 75, 87, 99],
        "E" => &[40, 52, 64, 76, 88, 100],
        "F" => &[41, 53, 65, 77, 89, 101],
        "F#" | "Gb" => &[42, 54, 66, 78, 90, 102],
        "G" => &[43, 55, 67, 79, 91, 103],
        "G#" | "Ab" => &[44, 56, 68, 80, 92, 104],
        _ => return Err(TheoryError::UnknownNote(note.to_string())),
    };
    Ok(row)
}

/// Look up the MIDI pitch of `note` at `octave`.
///
/// Fails with `InvalidOctave` if `octave` is outside 0..=5 and with
/// `UnknownNote` if `note` is not a recognized spelling.
pub fn pitch(note: &str, octave: i32) -> Result<u8, TheoryError> {
    if !(OCTAVE_MIN..=OCTAVE_MAX).contains(&octave) {
        return Err(TheoryError::InvalidOctave(octave));
    }
    Ok(pitch_row(note)?[octave as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn middle_c_is_60() {
        assert_eq!(pitch("C", 2), Ok(60));
    }

    #[test]
    fn lowest_a_is_33() {
        assert_eq!(pitch("A", 0), Ok(33));
    }

    #[test]
    fn enharmonic_aliases_match_across_all_octaves() {
        let pairs = [("A#", "Bb"), ("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab")];
        for (sharp, flat) in pairs {
            for octave in 0..=5 {
                assert_eq!(
                    pitch(sharp, octave),
                    pitch(flat, octave),
                    "{sharp}/{flat} differ at octave {octave}"
                );
            }
        }
    }

    #[test]
    fn octave_out_of_range_is_rejected() {
        assert_eq!(pitch("C", -1), Err(TheoryError::InvalidOctave(-1)));
        assert_eq!(pitch("C", 6), Err(TheoryError::InvalidOctave(6)));
    }

    #[test]
    fn double_accidentals_are_unknown() {
        // Catalog spellings like F## exist for written-form consistency only.
        for spelling in ["E#", "B#", "F##", "C##", "Ebb", "Gbb", "Cb", "Fb"] {
            assert_eq!(
                pitch(spelling, 2),
                Err(TheoryError::UnknownNote(spelling.to_string()))
            );
        }
    }

    #[test]
    fn rows_ascend_by_octaves() {
        for note in ["A", "C", "F#", "Ab"] {
            let row = pitch_row(note).unwrap();
            for i in 1..6 {
                assert_eq!(row[i], row[i - 1] + 12, "{note} row not octave-spaced");
            }
        }
    }
}
