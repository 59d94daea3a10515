// Error taxonomy for the theory core.
//
// Every component fails fast and locally: a caller either receives a fully
// valid result or an error naming exactly which precondition was violated.
// There is no retry, partial result, or silent coercion anywhere in the
// crate; recovery policy belongs to the caller.

use thiserror::Error;

/// All failure modes of the theory core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Octave index outside the tabulated range 0..=5.
    #[error("octave {0} out of range, pick a number between 0 and 5 (both ends included)")]
    InvalidOctave(i32),

    /// Note name not among the 17 recognized spellings.
    #[error("unknown note name `{0}`")]
    UnknownNote(String),

    /// Mode name not in the interval-pattern table.
    #[error("unknown mode `{0}`")]
    UnknownMode(String),

    /// Chord symbol absent from the triad catalog.
    #[error("unknown chord symbol `{0}`")]
    UnknownChordSymbol(String),

    /// Roman-numeral token that does not resolve to a valid scale degree.
    #[error("cannot resolve progression token `{0}` to a scale degree")]
    UnknownDegreeToken(String),

    /// Quantization requested against an empty candidate set.
    #[error("allowed note set is empty, no nearest pitch exists")]
    EmptyAllowedNotes,
}
