// Roman-numeral progression resolution.
//
// A progression string like `I-V-vi-IV` is split on hyphens (en-dashes are
// normalized first, they show up constantly in pasted text) and each token
// is resolved against the scale built from the given root and mode. Token
// case selects chord quality: all-uppercase is major, all-lowercase is minor
// with an `m` suffix on the resulting symbol. Mixed-case or otherwise
// malformed tokens are rejected up front with `UnknownDegreeToken` instead
// of falling through to a lookup failure.
//
// Degree indices are not wrapped: `vi` against a five-note pentatonic scale
// is an `UnknownDegreeToken` error, not degree 0.

use crate::error::TheoryError;
use crate::scale::{Mode, scale};

/// Resolve `input` to an ordered list of chord symbols in the key of
/// `root` / `mode`.
///
/// On success the output has exactly one chord symbol per hyphen-separated
/// token.
pub fn progression(input: &str, root: &str, mode: Mode) -> Result<Vec<String>, TheoryError> {
    let normalized = input.replace('\u{2013}', "-");
    let notes = scale(root, mode)?;

    let mut chords = Vec::new();
    for token in normalized.split('-') {
        chords.push(resolve_token(token, &notes)?);
    }
    Ok(chords)
}

fn resolve_token(token: &str, notes: &[&'static str]) -> Result<String, TheoryError> {
    let unknown = || TheoryError::UnknownDegreeToken(token.to_string());

    if token.is_empty() {
        return Err(unknown());
    }

    if token.chars().all(|c| c.is_ascii_uppercase()) {
        let degree = major_degree(token).ok_or_else(unknown)?;
        let note = notes.get(degree).ok_or_else(unknown)?;
        Ok((*note).to_string())
    } else if token.chars().all(|c| c.is_ascii_lowercase()) {
        let degree = minor_degree(token).ok_or_else(unknown)?;
        let note = notes.get(degree).ok_or_else(unknown)?;
        Ok(format!("{note}m"))
    } else {
        Err(unknown())
    }
}

fn major_degree(token: &str) -> Option<usize> {
    let degree = match token {
        "I" => 0,
        "II" => 1,
        "III" => 2,
        "IV" => 3,
        "V" => 4,
        "VI" => 5,
        "VII" => 6,
        _ => return None,
    };
    Some(degree)
}

fn minor_degree(token: &str) -> Option<usize> {
    let degree = match token {
        "i" => 0,
        "ii" => 1,
        "iii" => 2,
        "iv" => 3,
        "v" => 4,
        "vi" => 5,
        "vii" => 6,
        _ => return None,
    };
    Some(degree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn axis_progression_in_c_major() {
        assert_eq!(
            progression("I-V-vi-IV", "C", Mode::Major).unwrap(),
            vec!["C", "G", "Am", "F"]
        );
    }

    #[test]
    fn en_dash_separators_are_normalized() {
        assert_eq!(
            progression("I\u{2013}V\u{2013}vi\u{2013}IV", "C", Mode::Major).unwrap(),
            progression("I-V-vi-IV", "C", Mode::Major).unwrap()
        );
    }

    #[test]
    fn output_length_matches_token_count() {
        let chords = progression("I-IV-V-I-vi-ii-V-I", "G", Mode::Major).unwrap();
        assert_eq!(chords.len(), 8);
    }

    #[test]
    fn minor_key_progression() {
        assert_eq!(
            progression("i-iv-v", "A", Mode::NaturalMinor).unwrap(),
            vec!["Am", "Dm", "Em"]
        );
    }

    #[test]
    fn mixed_case_token_is_rejected() {
        assert_eq!(
            progression("I-Vi-IV", "C", Mode::Major),
            Err(TheoryError::UnknownDegreeToken("Vi".to_string()))
        );
    }

    #[test]
    fn non_numeral_token_is_rejected() {
        assert_eq!(
            progression("I-X", "C", Mode::Major),
            Err(TheoryError::UnknownDegreeToken("X".to_string()))
        );
    }

    #[test]
    fn degree_beyond_pentatonic_scale_is_rejected() {
        // Pentatonic scales have five degrees, so VI does not exist.
        assert_eq!(
            progression("I-VI", "C", Mode::Pentatonic),
            Err(TheoryError::UnknownDegreeToken("VI".to_string()))
        );
    }

    #[test]
    fn invalid_root_propagates() {
        assert_eq!(
            progression("I-V", "Bb", Mode::Major),
            Err(TheoryError::UnknownNote("Bb".to_string()))
        );
    }
}
