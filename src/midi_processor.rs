use nih_plug::prelude::NoteEvent;
use nih_plug::{nih_debug_assert, nih_trace};

use crate::note_range::NoteRange;
use crate::sysex::RawSysEx;

pub(crate) type MidiEvent = NoteEvent<RawSysEx>;

pub(crate) const NUM_CHANNELS: u8 = 16;
pub(crate) const NUM_NOTES: u8 = 128;

/**
 * Number of note offs sent when the range changes, one per channel and note.
 */
pub(crate) const ALL_NOTES_OFF_LEN: usize = NUM_CHANNELS as usize * NUM_NOTES as usize;

/**
 * Number of incoming events a single block can hold without growing the output buffer.
 */
pub(crate) const MAX_BLOCK_EVENTS: usize = 2048;

/**
 * Output events nih-plug's wrappers have room for before their queue grows.
 */
pub(crate) const HOST_OUTPUT_EVENTS_CAPACITY: usize = 512;

pub(crate) struct MidiProcessor {
    /**
     * The range used to wrap the notes of the last processed block
     */
    range: NoteRange,

    /**
     * The events produced for the current block
     */
    midi_events: Vec<MidiEvent>,
}

impl MidiProcessor {
    pub fn new() -> Self {
        Self {
            range: NoteRange::FULL,
            midi_events: Vec::with_capacity(ALL_NOTES_OFF_LEN + MAX_BLOCK_EVENTS),
        }
    }

    /**
     * Process a whole block of events with the range currently set by the host.
     * Returns the events to send back, in the order they were received.
     */
    pub fn process_block<I>(
        &mut self,
        range: NoteRange,
        num_samples: usize,
        events: I,
    ) -> &[MidiEvent]
    where
        I: IntoIterator<Item = MidiEvent>,
    {
        self.clear_events();

        // Empty blocks carry no timeline, the events go through as they are.
        if num_samples == 0 {
            for event in events {
                self.push_event(event);
            }
            return self.get_events();
        }

        self.begin_block(range);
        for event in events {
            nih_debug_assert!(
                (event.timing() as usize) < num_samples,
                "Event timing {} is outside of a {} samples block",
                event.timing(),
                num_samples
            );
            self.process_event(&event);
        }

        self.get_events()
    }

    /**
     * Update the range for the new block.
     * When it changed, every note of every channel is turned off so nothing stays stuck
     * from a note on that was wrapped with the previous range.
     */
    pub fn begin_block(&mut self, range: NoteRange) -> bool {
        if range == self.range {
            return false;
        }

        nih_trace!(
            "Note range changed from {:?} to {:?}, turning all notes off",
            self.range,
            range
        );
        self.range = range;
        self.all_notes_off();
        true
    }

    /**
     * Wrap the note of note on and note off events, anything else is forwarded untouched.
     */
    pub fn process_event(&mut self, event: &MidiEvent) {
        let event = match *event {
            NoteEvent::NoteOn {
                timing,
                voice_id,
                channel,
                note,
                velocity,
            } => NoteEvent::NoteOn {
                timing,
                voice_id,
                channel,
                note: self.range.wrap(note),
                velocity,
            },
            NoteEvent::NoteOff {
                timing,
                voice_id,
                channel,
                note,
                velocity,
            } => NoteEvent::NoteOff {
                timing,
                voice_id,
                channel,
                note: self.range.wrap(note),
                velocity,
            },
            other => other,
        };
        self.push_event(event);
    }

    fn all_notes_off(&mut self) {
        for channel in 0..NUM_CHANNELS {
            for note in 0..NUM_NOTES {
                self.push_event(NoteEvent::NoteOff {
                    timing: 0,
                    voice_id: None,
                    channel,
                    note,
                    velocity: 0.0,
                });
            }
        }
    }

    fn push_event(&mut self, event: MidiEvent) {
        nih_debug_assert!(
            self.midi_events.len() < self.midi_events.capacity(),
            "The output buffer is full, it will grow on the audio thread"
        );
        self.midi_events.push(event);
    }

    /**
     * Whether sending the current events will grow the host's output queue.
     * That only happens on blocks that turn all notes off, the queue keeps its size afterwards.
     */
    pub fn exceeds_host_queue(&self) -> bool {
        self.midi_events.len() > HOST_OUTPUT_EVENTS_CAPACITY
    }

    /**
     * Clear the processed events
     */
    pub fn clear_events(&mut self) {
        self.midi_events.clear();
    }

    /**
     * Return the processed events
     */
    pub fn get_events(&self) -> &[MidiEvent] {
        &self.midi_events
    }
}
