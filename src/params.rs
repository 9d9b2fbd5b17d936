use nih_plug::prelude::*;
use std::sync::Arc;

use crate::note_range::{limit_to_note, NoteRange, MAX_NOTE};
use crate::pitch;

/**
 * The two limits of the range notes are wrapped into.
 * The ids are the ones saved in the plugin state, they must not change.
 */
#[derive(Params)]
pub struct MidiWrapParams {
    #[id = "lowerLimit"]
    pub lower_limit: FloatParam,
    #[id = "upperLimit"]
    pub upper_limit: FloatParam,
}

impl Default for MidiWrapParams {
    fn default() -> Self {
        Self {
            lower_limit: limit_param("Lower Limit", NoteRange::FULL.lower),
            upper_limit: limit_param("Upper Limit", NoteRange::FULL.upper),
        }
    }
}

impl MidiWrapParams {
    /**
     * Read both limits once, as the range to use for the current block.
     */
    pub fn note_range(&self) -> NoteRange {
        NoteRange::from_limits(self.lower_limit.value(), self.upper_limit.value())
    }
}

/**
 * A note limit, displayed and typed in as a pitch name.
 */
fn limit_param(name: &'static str, default: u8) -> FloatParam {
    FloatParam::new(
        name,
        default as f32,
        FloatRange::Linear {
            min: 0.0,
            max: MAX_NOTE as f32,
        },
    )
    .with_step_size(1.0)
    .with_value_to_string(Arc::new(move |value| {
        pitch::format(limit_to_note(value, default))
    }))
    .with_string_to_value(Arc::new(|text: &str| Some(pitch::parse(text) as f32)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_full_range() {
        let params = MidiWrapParams::default();
        assert_eq!(params.note_range(), NoteRange::FULL);
    }

    #[test]
    fn limits_are_displayed_as_pitch_names() {
        let params = MidiWrapParams::default();
        assert_eq!(params.lower_limit.to_string(), "C-1");
        assert_eq!(params.upper_limit.to_string(), "G9");
        assert_eq!(
            params
                .lower_limit
                .normalized_value_to_string(60.0 / 127.0, false),
            "C4"
        );
    }

    #[test]
    fn limits_accept_pitch_names_and_numbers() {
        let params = MidiWrapParams::default();
        for (text, expected) in [("A4", 69.0), ("a4", 69.0), ("48", 48.0), ("zz", 69.0)] {
            let normalized = params
                .upper_limit
                .string_to_normalized_value(text)
                .unwrap_or(-1.0);
            let plain = params.upper_limit.preview_plain(normalized);
            assert!((plain - expected).abs() < 1e-3, "{text} gave {plain}");
        }
    }
}
