// Wren song assembly.
//
// Turns the theory core's pitches into files you can listen to:
// - melody.rs: the random-melody workflow (draw a value, quantize it to the
//   scale, give it a duration, repeat until the target length is covered)
// - midi.rs: Standard MIDI File output for melodies, chord progressions,
//   and raw pitch sequences, via the `midly` crate
// - wav.rs: mono 16-bit PCM output via `hound`
// - trace.rs: waveform extraction from decoded image pixels, one value per
//   column, for feeding drawings into the quantizer
//
// Generation is deterministic given a seed: all randomness comes in through
// a `WrenRng` handed to the melody functions.

pub mod melody;
pub mod midi;
pub mod trace;
pub mod wav;

pub use melody::{MelodyConfig, MelodyNote, random_melody};
pub use midi::{write_chords, write_melody, write_pitches};
pub use trace::{linear_map, waveform_from_rgba};
pub use wav::write_samples;

use thiserror::Error;

/// Failure modes of the output writers.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A pitch or chord symbol failed to resolve in the theory core.
    #[error(transparent)]
    Theory(#[from] wren_theory::TheoryError),

    /// Tempo of zero, which has no microseconds-per-beat representation.
    #[error("tempo must be at least 1 bpm")]
    InvalidTempo,

    /// MIDI or filesystem write failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV encoding failure.
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
}
