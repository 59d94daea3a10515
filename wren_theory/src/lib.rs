// Wren music theory core.
//
// A deterministic 12-tone-equal-temperament computation engine: given a root
// note and a mode it produces concrete note names, chord triads, and MIDI
// pitch numbers; given arbitrary numeric input it quantizes to the nearest
// pitch obtainable from a restricted note set.
//
// Architecture (leaf-first):
// - pitch.rs: immutable (note name, octave) -> MIDI pitch table
// - scale.rs: mode interval patterns + scale construction over the chromatic
//   ordering
// - chord.rs: literal triad catalog for all major and minor chord symbols
// - progression.rs: roman-numeral progression strings -> chord symbols
// - quantize.rs: nearest-pitch search and random note selection
//
// Every function is a pure, synchronous computation over fixed inputs; the
// only impurity is the `WrenRng` injected into `quantize::random_notes`.
// All tables are compiled-in constants, safe to share across threads.

pub mod chord;
pub mod error;
pub mod pitch;
pub mod progression;
pub mod quantize;
pub mod scale;

pub use chord::{CHORD_REFERENCE_OCTAVE, chord_notes, chord_pitches};
pub use error::TheoryError;
pub use pitch::{pitch, pitch_row};
pub use progression::progression;
pub use quantize::{nearest_pitch, random_notes};
pub use scale::{Mode, NOTE_ORDER, scale};
