// Random melody generation.
//
// The loop draws an integer from a bounded range, quantizes it to the
// nearest pitch in the allowed note set, and tacks on a random duration.
// The running duration total is checked *before* each append, so the final
// note can carry the total slightly past the target length. That overshoot
// is deliberate: a melody ends on a full note, not on a truncated one.

use serde::{Deserialize, Serialize};
use wren_prng::WrenRng;
use wren_theory::{TheoryError, nearest_pitch};

/// One melody event: a MIDI pitch and how many duration units it lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MelodyNote {
    pub pitch: u8,
    pub duration: u32,
}

/// Tunables for `random_melody`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MelodyConfig {
    /// Inclusive lower bound of the raw value draw.
    pub value_low: u64,
    /// Inclusive upper bound of the raw value draw.
    pub value_high: u64,
    /// Inclusive duration bounds, in duration units.
    pub min_duration: u32,
    pub max_duration: u32,
    /// Generation stops once accumulated duration reaches this.
    pub target_length: u32,
}

impl Default for MelodyConfig {
    fn default() -> Self {
        // Raw values span roughly the playable middle of the pitch table;
        // durations alternate between one and two units.
        Self {
            value_low: 45,
            value_high: 92,
            min_duration: 1,
            max_duration: 2,
            target_length: 128,
        }
    }
}

/// Generate a melody constrained to `allowed_notes`.
///
/// Draws values uniformly from `[value_low, value_high]`, quantizes each to
/// the nearest allowed pitch, and assigns a uniform duration from
/// `[min_duration, max_duration]`, accumulating until `target_length` is
/// reached or exceeded.
pub fn random_melody(
    allowed_notes: &[&str],
    config: &MelodyConfig,
    rng: &mut WrenRng,
) -> Result<Vec<MelodyNote>, TheoryError> {
    let mut notes = Vec::new();
    let mut elapsed: u32 = 0;

    while elapsed < config.target_length {
        let value = rng.range_u64_inclusive(config.value_low, config.value_high);
        let pitch = nearest_pitch(value as f64, allowed_notes)?;
        let duration =
            rng.range_u64_inclusive(u64::from(config.min_duration), u64::from(config.max_duration))
                as u32;
        notes.push(MelodyNote { pitch, duration });
        elapsed += duration;
    }

    Ok(notes)
}
