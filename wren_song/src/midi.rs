// Standard MIDI File output.
//
// All three writers produce a single-track SMF: a tempo event, a track
// name, then note-on/note-off pairs at a fixed velocity. Duration units
// from the melody generator map to quarter notes, so a duration of 2 is a
// half note at the given tempo.
//
// Uses the `midly` crate for MIDI assembly. The `*_to_smf` constructors are
// split from the file-writing wrappers so tests can inspect tracks without
// touching the filesystem.

use crate::RenderError;
use crate::melody::MelodyNote;
use midly::{
    Format, Header, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;
use tracing::debug;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

/// Fixed note-on velocity for melody and chord output. The pitch-sequence
/// writer takes its velocity from the caller instead.
const VELOCITY: u8 = 85;

/// Convert a melody to MIDI and write it to a file.
pub fn write_melody(
    notes: &[MelodyNote],
    bpm: u16,
    name: &str,
    path: &Path,
) -> Result<(), RenderError> {
    check_tempo(bpm)?;
    let smf = melody_to_smf(notes, bpm, name);
    write_smf(&smf, path)?;
    debug!(notes = notes.len(), bpm, ?path, "wrote melody midi");
    Ok(())
}

/// Convert a chord sequence to MIDI and write it to a file. Each chord
/// sounds for `duration` quarter notes.
pub fn write_chords(
    chords: &[[u8; 3]],
    duration: u32,
    bpm: u16,
    name: &str,
    path: &Path,
) -> Result<(), RenderError> {
    check_tempo(bpm)?;
    let smf = chords_to_smf(chords, duration, bpm, name);
    write_smf(&smf, path)?;
    debug!(chords = chords.len(), duration, bpm, ?path, "wrote chord midi");
    Ok(())
}

/// Write a plain pitch sequence with a fixed per-note duration and
/// velocity, truncating once the accumulated time reaches `max_beats`.
/// This is the path used for quantized image traces, which can be
/// arbitrarily long.
pub fn write_pitches(
    pitches: &[u8],
    duration: u32,
    max_beats: u32,
    velocity: u8,
    bpm: u16,
    name: &str,
    path: &Path,
) -> Result<(), RenderError> {
    check_tempo(bpm)?;
    let smf = pitches_to_smf(pitches, duration, max_beats, velocity, bpm, name);
    write_smf(&smf, path)?;
    debug!(pitches = pitches.len(), max_beats, ?path, "wrote pitch midi");
    Ok(())
}

/// Convert a melody to an in-memory SMF.
pub fn melody_to_smf<'a>(notes: &[MelodyNote], bpm: u16, name: &'a str) -> Smf<'a> {
    let mut track = track_preamble(bpm, name);

    for note in notes {
        track.push(note_on(0, note.pitch, VELOCITY));
        track.push(note_off(note.duration * u32::from(TICKS_PER_QUARTER), note.pitch));
    }

    finish_track(track)
}

/// Convert a chord sequence to an in-memory SMF. The notes of each triad
/// start on the same tick.
pub fn chords_to_smf<'a>(chords: &[[u8; 3]], duration: u32, bpm: u16, name: &'a str) -> Smf<'a> {
    let mut track = track_preamble(bpm, name);

    for chord in chords {
        for &pitch in chord {
            track.push(note_on(0, pitch, VELOCITY));
        }
        let mut delta = duration * u32::from(TICKS_PER_QUARTER);
        for &pitch in chord {
            track.push(note_off(delta, pitch));
            delta = 0;
        }
    }

    finish_track(track)
}

/// Convert a pitch sequence to an in-memory SMF, stopping once the
/// accumulated time reaches `max_beats`.
pub fn pitches_to_smf<'a>(
    pitches: &[u8],
    duration: u32,
    max_beats: u32,
    velocity: u8,
    bpm: u16,
    name: &'a str,
) -> Smf<'a> {
    let mut track = track_preamble(bpm, name);

    let mut time = 0;
    for &pitch in pitches {
        if time >= max_beats {
            break;
        }
        track.push(note_on(0, pitch, velocity));
        track.push(note_off(duration * u32::from(TICKS_PER_QUARTER), pitch));
        time += duration;
    }

    finish_track(track)
}

fn track_preamble(bpm: u16, name: &str) -> Track<'_> {
    let mut track: Track<'_> = Vec::new();
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::TrackName(name.as_bytes())),
    });
    let tempo_microseconds = 60_000_000 / u32::from(bpm);
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::Tempo(u24::new(tempo_microseconds))),
    });
    track
}

fn finish_track(mut track: Track<'_>) -> Smf<'_> {
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
    });

    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));
    smf.tracks.push(track);
    smf
}

fn check_tempo(bpm: u16) -> Result<(), RenderError> {
    if bpm == 0 {
        return Err(RenderError::InvalidTempo);
    }
    Ok(())
}

fn note_on(delta: u32, pitch: u8, velocity: u8) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(0),
            message: MidiMessage::NoteOn {
                key: u7::new(pitch),
                vel: u7::new(velocity),
            },
        },
    }
}

fn note_off(delta: u32, pitch: u8) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(0),
            message: MidiMessage::NoteOff {
                key: u7::new(pitch),
                vel: u7::new(0),
            },
        },
    }
}

fn write_smf(smf: &Smf<'_>, path: &Path) -> Result<(), RenderError> {
    let mut buf = Vec::new();
    // write_std is the io::Write path; plain write wants midly's own trait.
    smf.write_std(&mut buf)?;
    std::fs::write(path, &buf)?;
    Ok(())
}
