use crate::note_range::MAX_NOTE;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/**
 * The note returned for text that can't be read as a pitch (A4).
 */
pub const FALLBACK_NOTE: u8 = 69;

/**
 * Display a note number as its pitch class followed by its octave, using sharps.
 * Middle C (60) is written `C4`, so the lowest MIDI note is `C-1` and the highest is `G9`.
 */
pub fn format(note: u8) -> String {
    let note = note.min(MAX_NOTE);
    let octave = note as i32 / 12 - 1;
    format!("{}{}", NOTE_NAMES[(note % 12) as usize], octave)
}

/**
 * Read a note number from user text.
 * Plain numbers are taken as note numbers, anything else is read as `<letter>[#|b]<octave>`.
 * This never fails: text that can't be read gives `FALLBACK_NOTE`.
 */
pub fn parse(text: &str) -> u8 {
    let text = text.trim().to_lowercase();
    if !text.chars().any(char::is_alphabetic) {
        return parse_number(&text);
    }

    let mut chars = text.chars();
    let mut index: i32 = match chars.next() {
        Some('c') => 0,
        Some('d') => 2,
        Some('e') => 4,
        Some('f') => 5,
        Some('g') => 7,
        Some('a') => 9,
        Some('b') => 11,
        _ => return FALLBACK_NOTE,
    };

    // The accidental is optional, without it the octave starts right after the letter.
    let mut octave_text = chars.as_str();
    if let Some(rest) = octave_text.strip_prefix('#') {
        index += 1;
        octave_text = rest;
    } else if let Some(rest) = octave_text.strip_prefix('b') {
        index -= 1;
        octave_text = rest;
    }

    let Ok(octave) = octave_text.parse::<i32>() else {
        return FALLBACK_NOTE;
    };

    let mut note = index
        .saturating_add(12)
        .saturating_add(octave.saturating_mul(12));
    if note < 0 {
        // Lift by whole octaves until the note is positive again.
        note = note.rem_euclid(12);
    }
    note.clamp(0, MAX_NOTE as i32) as u8
}

fn parse_number(text: &str) -> u8 {
    if let Ok(value) = text.parse::<i64>() {
        return value.clamp(0, MAX_NOTE as i64) as u8;
    }
    // Decimals keep their integer part.
    match text.parse::<f32>() {
        Ok(value) if value.is_finite() => value.trunc().clamp(0.0, MAX_NOTE as f32) as u8,
        _ => FALLBACK_NOTE,
    }
}
