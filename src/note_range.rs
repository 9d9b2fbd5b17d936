/**
 * The highest MIDI note number.
 */
pub const MAX_NOTE: u8 = 127;

/**
 * The inclusive range of notes that incoming notes are wrapped into.
 * The bounds are not required to be ordered, an inverted range wraps like its swapped version.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRange {
    pub lower: u8,
    pub upper: u8,
}

impl NoteRange {
    /**
     * Every MIDI note, nothing gets wrapped.
     */
    pub const FULL: Self = Self {
        lower: 0,
        upper: MAX_NOTE,
    };

    pub fn new(lower: u8, upper: u8) -> Self {
        Self {
            lower: lower.min(MAX_NOTE),
            upper: upper.min(MAX_NOTE),
        }
    }

    /**
     * Build a range from the continuous parameter values, rounded to the nearest note.
     */
    pub fn from_limits(lower: f32, upper: f32) -> Self {
        Self::new(
            limit_to_note(lower, Self::FULL.lower),
            limit_to_note(upper, Self::FULL.upper),
        )
    }

    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    pub fn contains(&self, note: u8) -> bool {
        let (lower, upper) = self.ordered();
        (lower..=upper).contains(&note)
    }

    /**
     * Move a note by whole octaves until it lands in the range.
     *
     * When the range is narrower than an octave, a pitch class may have no note inside it.
     * Such a note ends up on the octave just below the range, or just above it when
     * going below would leave the MIDI range.
     */
    pub fn wrap(&self, note: u8) -> u8 {
        if self.contains(note) {
            return note;
        }

        let (lower, upper) = self.ordered();
        let (lower, upper) = (lower as i16, upper as i16);

        let mut note = note as i16;
        while note < lower {
            note += 12;
        }
        while note > upper {
            note -= 12;
        }
        if note < 0 {
            note += 12;
        }
        note as u8
    }

    fn ordered(&self) -> (u8, u8) {
        if self.is_inverted() {
            (self.upper, self.lower)
        } else {
            (self.lower, self.upper)
        }
    }
}

/**
 * Round a parameter value to a note number. NaN gives the default.
 */
pub fn limit_to_note(value: f32, default: u8) -> u8 {
    if value.is_nan() {
        return default;
    }
    value.round().clamp(0.0, MAX_NOTE as f32) as u8
}
