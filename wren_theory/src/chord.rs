// The chord catalog: chord symbol -> triad, as a literal enumeration.
//
// Triads are not derived from intervals at runtime. The catalog fixes the
// *written* spelling of every major and minor triad, which is why entries
// like C# major carry E# and A# major carries C## — the third must be
// spelled on the right letter even when that forces a double accidental.
// Those spellings are not guaranteed to resolve through the pitch table;
// `chord_pitches` surfaces that as `UnknownNote` rather than silently
// renaming the note.
//
// Symbols are a root note name (sharp or flat spelling, plus the Cb/Fb
// white-key flats) optionally suffixed `m` for minor quality.

use crate::error::TheoryError;
use crate::pitch::pitch;

/// Octave index used when expanding chords for playback. Puts the root of a
/// C chord at middle C (MIDI 60).
pub const CHORD_REFERENCE_OCTAVE: i32 = 2;

/// The three written notes of `symbol`'s triad, root first.
///
/// Fails with `UnknownChordSymbol` if the symbol is not in the catalog.
pub fn chord_notes(symbol: &str) -> Result<[&'static str; 3], TheoryError> {
    let triad = match symbol {
        // Major triads
        "C" => ["C", "E", "G"],
        "C#" => ["C#", "E#", "G#"],
        "Db" => ["Db", "F", "Ab"],
        "D" => ["D", "F#", "A"],
        "D#" => ["D#", "F##", "A#"],
        "Eb" => ["Eb", "G", "Bb"],
        "E" => ["E", "G#", "B"],
        "Fb" => ["Fb", "Ab", "Cb"],
        "F" => ["F", "A", "C"],
        "F#" => ["F#", "A#", "C#"],
        "Gb" => ["Gb", "Bb", "Db"],
        "G" => ["G", "B", "D"],
        "G#" => ["G#", "B#", "D#"],
        "Ab" => ["Ab", "C", "Eb"],
        "A" => ["A", "C#", "E"],
        "A#" => ["A#", "C##", "F"],
        "Bb" => ["Bb", "D", "F"],
        "B" => ["B", "D#", "F#"],
        "Cb" => ["Cb", "Eb", "Gb"],
        // Minor triads
        "Cm" => ["C", "Eb", "G"],
        "C#m" => ["C#", "E", "G#"],
        "Dbm" => ["Db", "E", "Ab"],
        "Dm" => ["D", "F", "A"],
        "D#m" => ["D#", "F#", "A#"],
        "Ebm" => ["Eb", "Gb", "Bb"],
        "Em" => ["E", "G", "B"],
        "Fm" => ["F", "Ab", "C"],
        "F#m" => ["F#", "A", "C#"],
        "Gbm" => ["Gb", "A", "Db"],
        "Gm" => ["G", "Bb", "D"],
        "G#m" => ["G#", "B", "D#"],
        "Abm" => ["Ab", "B", "Eb"],
        "Am" => ["A", "C", "E"],
        "A#m" => ["A#", "C#", "F"],
        "Bbm" => ["Bb", "Db", "F"],
        "Bm" => ["B", "D", "F#"],
        "Cbm" => ["Cb", "Ebb", "Gbb"],
        _ => return Err(TheoryError::UnknownChordSymbol(symbol.to_string())),
    };
    Ok(triad)
}

/// Expand a chord symbol to three MIDI pitches at `octave`.
///
/// Catalog entries whose written form uses a spelling outside the pitch
/// table (E#, F##, Ebb, ...) fail with `UnknownNote`.
pub fn chord_pitches(symbol: &str, octave: i32) -> Result<[u8; 3], TheoryError> {
    let [root, third, fifth] = chord_notes(symbol)?;
    Ok([
        pitch(root, octave)?,
        pitch(third, octave)?,
        pitch(fifth, octave)?,
    ])
}
