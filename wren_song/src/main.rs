// Wren composer — CLI entry point.
//
// Two pipelines:
//   compose progression <PROGRESSION> [--root C] [--mode Major]
//       [--duration 4] [--tempo 110] [--out chords.mid]
//   compose melody [--root C] [--mode Major] [--length 128] [--seed N]
//       [--tempo 110] [--out melody.mid]
//
// Mode names match the theory tables exactly: Major, "Natural minor",
// "Harmonic minor", "Melodic minor", Dorian, Phrygian, Lydian, Mixolydian,
// Locrian, "Ahava raba", "Minor pentatonic", Pentatonic, Blues.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use wren_prng::WrenRng;
use wren_song::{MelodyConfig, random_melody, write_chords, write_melody};
use wren_theory::{CHORD_REFERENCE_OCTAVE, Mode, chord_pitches, progression, scale};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let command = args.get(1).map(String::as_str);
    let result = match command {
        Some("progression") => run_progression(&args),
        Some("melody") => run_melody(&args),
        _ => {
            eprintln!("usage: compose <progression|melody> [options]");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_progression(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let input = args
        .get(2)
        .filter(|s| !s.starts_with("--"))
        .ok_or("progression: missing progression string (e.g. I-V-vi-IV)")?;
    let root: String = parse_flag(args, "--root").unwrap_or_else(|| "C".to_string());
    let mode_name: String = parse_flag(args, "--mode").unwrap_or_else(|| "Major".to_string());
    let duration: u32 = parse_flag(args, "--duration").unwrap_or(4);
    let tempo: u16 = parse_flag(args, "--tempo").unwrap_or(110);
    let out: String = parse_flag(args, "--out").unwrap_or_else(|| "chords.mid".to_string());

    let mode = Mode::from_name(&mode_name)?;
    let chords = progression(input, &root, mode)?;
    println!("Progression: {input} in {root} {mode}");
    println!("Chords: {}", chords.join(", "));

    let mut pitched = Vec::with_capacity(chords.len());
    for chord in &chords {
        pitched.push(chord_pitches(chord, CHORD_REFERENCE_OCTAVE)?);
    }

    write_chords(&pitched, duration, tempo, "wren_chords", Path::new(&out))?;
    println!("Done! Midi file: {out}");
    Ok(())
}

fn run_melody(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let root: String = parse_flag(args, "--root").unwrap_or_else(|| "C".to_string());
    let mode_name: String = parse_flag(args, "--mode").unwrap_or_else(|| "Major".to_string());
    let length: u32 = parse_flag(args, "--length").unwrap_or(128);
    let tempo: u16 = parse_flag(args, "--tempo").unwrap_or(110);
    let seed: Option<u64> = parse_flag(args, "--seed");
    let out: String = parse_flag(args, "--out").unwrap_or_else(|| "melody.mid".to_string());

    let mode = Mode::from_name(&mode_name)?;
    let allowed = scale(&root, mode)?;

    let seed = seed.unwrap_or_else(entropy_seed);
    let mut rng = WrenRng::new(seed);
    println!("Melody in {root} {mode}, target length {length}, seed {seed}");

    let config = MelodyConfig {
        target_length: length,
        ..MelodyConfig::default()
    };
    let melody = random_melody(&allowed, &config, &mut rng)?;
    println!("Generated {} notes.", melody.len());

    write_melody(&melody, tempo, "wren_melody", Path::new(&out))?;
    println!("Done! Midi file: {out}");
    Ok(())
}

/// Seed from the wall clock when the caller did not pin one.
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
