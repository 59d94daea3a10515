// Scale construction: walk a mode's interval pattern around the chromatic
// ordering, starting at the root.
//
// The ordering here is sharp-only. Flat spellings are accepted by the pitch
// table and the chord catalog but *not* as a scale root; passing `Bb` where
// `A#` is meant fails with `UnknownNote`. This asymmetry is intentional and
// kept from the reference behavior — callers are expected to hand scale
// roots in their sharp spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TheoryError;

/// The chromatic ordering used for scale walks, sharp spellings only.
pub const NOTE_ORDER: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// A named interval pattern.
///
/// Each pattern is a sequence of semitone deltas beginning with 0 (the tonic
/// itself). The final delta is dropped during scale construction, so
/// heptatonic modes yield 7 notes and the pentatonic/blues patterns yield 5.
/// All patterns except Blues sum to 12, closing the octave; the Blues table
/// stops a whole step short, so its scale never revisits the tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    AhavaRaba,
    MinorPentatonic,
    Pentatonic,
    Blues,
}

impl Mode {
    /// Every supported mode, in table order.
    pub const ALL: [Mode; 13] = [
        Mode::Major,
        Mode::NaturalMinor,
        Mode::HarmonicMinor,
        Mode::MelodicMinor,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Locrian,
        Mode::AhavaRaba,
        Mode::MinorPentatonic,
        Mode::Pentatonic,
        Mode::Blues,
    ];

    /// Semitone deltas from each scale degree to the next, tonic first.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Mode::Major => &[0, 2, 2, 1, 2, 2, 2, 1],
            Mode::NaturalMinor => &[0, 2, 1, 2, 2, 1, 2, 2],
            Mode::HarmonicMinor => &[0, 2, 1, 2, 2, 1, 3, 1],
            Mode::MelodicMinor => &[0, 2, 1, 2, 2, 2, 2, 1],
            Mode::Dorian => &[0, 2, 1, 2, 2, 2, 1, 2],
            Mode::Phrygian => &[0, 1, 2, 2, 2, 1, 2, 2],
            Mode::Lydian => &[0, 2, 2, 2, 1, 2, 2, 1],
            Mode::Mixolydian => &[0, 2, 2, 1, 2, 2, 1, 2],
            Mode::Locrian => &[0, 1, 2, 2, 1, 2, 2, 2],
            Mode::AhavaRaba => &[0, 1, 3, 1, 2, 1, 2, 2],
            Mode::MinorPentatonic => &[0, 3, 2, 2, 3, 2],
            Mode::Pentatonic => &[0, 2, 2, 3, 2, 3],
            Mode::Blues => &[0, 3, 2, 1, 1, 3],
        }
    }

    /// The mode's display name, matching the accepted `from_name` strings.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::NaturalMinor => "Natural minor",
            Mode::HarmonicMinor => "Harmonic minor",
            Mode::MelodicMinor => "Melodic minor",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Locrian => "Locrian",
            Mode::AhavaRaba => "Ahava raba",
            Mode::MinorPentatonic => "Minor pentatonic",
            Mode::Pentatonic => "Pentatonic",
            Mode::Blues => "Blues",
        }
    }

    /// Parse a mode name. Fails with `UnknownMode` for anything not in the
    /// table (matching is exact, including case).
    pub fn from_name(name: &str) -> Result<Mode, TheoryError> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| TheoryError::UnknownMode(name.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the scale rooted at `root` for `mode`.
///
/// Starts a chromatic index at the root's position, then advances it by each
/// delta of the pattern except the closing one, appending the note name now
/// under the index. The first delta is 0, so the tonic is always emitted
/// first, and the result length is one less than the pattern length.
///
/// `root` must use its sharp spelling (`NOTE_ORDER` membership); a flat
/// alias fails with `UnknownNote`.
pub fn scale(root: &str, mode: Mode) -> Result<Vec<&'static str>, TheoryError> {
    let mut index = NOTE_ORDER
        .iter()
        .position(|&n| n == root)
        .ok_or_else(|| TheoryError::UnknownNote(root.to_string()))?;

    let intervals = mode.intervals();
    let mut notes = Vec::with_capacity(intervals.len() - 1);
    for &delta in &intervals[..intervals.len() - 1] {
        index = (index + delta as usize) % NOTE_ORDER.len();
        notes.push(NOTE_ORDER[index]);
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_pattern_starts_at_zero_and_closes_the_octave() {
        for mode in Mode::ALL {
            let intervals = mode.intervals();
            assert_eq!(intervals[0], 0, "{mode} does not start at the tonic");
            let total: u8 = intervals.iter().sum();
            // The Blues pattern tops out a whole step short of the octave;
            // its scale simply does not revisit the tonic. Every other mode
            // closes the octave exactly.
            let expected = if mode == Mode::Blues { 10 } else { 12 };
            assert_eq!(total, expected, "{mode} delta sum drifted");
        }
    }

    #[test]
    fn a_blues() {
        assert_eq!(
            scale("A", Mode::Blues).unwrap(),
            vec!["A", "C", "D", "D#", "E"]
        );
    }

    #[test]
    fn c_major() {
        assert_eq!(
            scale("C", Mode::Major).unwrap(),
            vec!["C", "D", "E", "F", "G", "A", "B"]
        );
    }

    #[test]
    fn a_natural_minor() {
        assert_eq!(
            scale("A", Mode::NaturalMinor).unwrap(),
            vec!["A", "B", "C", "D", "E", "F", "G"]
        );
    }

    #[test]
    fn e_phrygian_starts_with_half_step() {
        assert_eq!(
            scale("E", Mode::Phrygian).unwrap(),
            vec!["E", "F", "G", "A", "B", "C", "D"]
        );
    }

    #[test]
    fn pentatonic_scales_have_five_notes() {
        assert_eq!(
            scale("A", Mode::MinorPentatonic).unwrap(),
            vec!["A", "C", "D", "E", "G"]
        );
        assert_eq!(scale("C", Mode::Pentatonic).unwrap().len(), 5);
        assert_eq!(scale("C", Mode::Blues).unwrap().len(), 5);
    }

    #[test]
    fn scale_length_is_pattern_length_minus_one() {
        for mode in Mode::ALL {
            let built = scale("C", mode).unwrap();
            assert_eq!(built.len(), mode.intervals().len() - 1, "{mode}");
        }
    }

    #[test]
    fn flat_roots_are_rejected() {
        // The chromatic ordering is sharp-only; Bb is valid elsewhere but
        // not as a scale root.
        assert_eq!(
            scale("Bb", Mode::Major),
            Err(TheoryError::UnknownNote("Bb".to_string()))
        );
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.name()), Ok(mode));
        }
        assert_eq!(
            Mode::from_name("major"),
            Err(TheoryError::UnknownMode("major".to_string()))
        );
    }
}
