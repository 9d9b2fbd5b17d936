use midi_processor::MidiProcessor;
use nih_plug::nih_log;
use nih_plug::util::permit_alloc;
use nih_plug::prelude::*;
use std::sync::Arc;

mod midi_processor;
mod note_range;
mod params;
mod pitch;
mod sysex;

use crate::params::MidiWrapParams;
use crate::sysex::RawSysEx;

struct MidiWrap {
    params: Arc<MidiWrapParams>,

    processor: MidiProcessor,
}

impl Default for MidiWrap {
    fn default() -> Self {
        Self {
            params: Arc::new(MidiWrapParams::default()),
            processor: MidiProcessor::new(),
        }
    }
}

impl Plugin for MidiWrap {
    const NAME: &'static str = "Midi Wrap";
    const VENDOR: &'static str = "Stfufane";
    const URL: &'static str = env!("CARGO_PKG_HOMEPAGE");
    const EMAIL: &'static str = "albanese.stephane@gmail.com";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    // This plugin doesn't have any audio IO
    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[];

    // CCs, pitch bend and pressure are needed so they can be forwarded untouched.
    const MIDI_INPUT: MidiConfig = MidiConfig::MidiCCs;
    const MIDI_OUTPUT: MidiConfig = MidiConfig::MidiCCs;

    // The range is read once per block.
    const SAMPLE_ACCURATE_AUTOMATION: bool = false;

    // SysEx is forwarded as is, like every other non note message.
    type SysExMessage = RawSysEx;
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn initialize(
        &mut self,
        _audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        nih_log!(
            "Initialized at {} Hz with blocks of up to {} samples, wrapping into {:?}",
            buffer_config.sample_rate,
            buffer_config.max_buffer_size,
            self.params.note_range()
        );
        true
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        let range = self.params.note_range();

        // Rewrite the incoming events, then send them all back.
        self.processor.process_block(
            range,
            buffer.samples(),
            std::iter::from_fn(|| context.next_event()),
        );

        // Turning all notes off grows the host's output queue once, that allocation is expected.
        if self.processor.exceeds_host_queue() {
            permit_alloc(|| send_events(&self.processor, context));
        } else {
            send_events(&self.processor, context);
        }

        ProcessStatus::Normal
    }
}

fn send_events(processor: &MidiProcessor, context: &mut impl ProcessContext<MidiWrap>) {
    for event in processor.get_events() {
        context.send_event(*event);
    }
}

impl ClapPlugin for MidiWrap {
    const CLAP_ID: &'static str = "com.stfufane.midi-wrap";
    const CLAP_DESCRIPTION: Option<&'static str> =
        Some("Wraps notes into a range by moving them by octaves");
    const CLAP_MANUAL_URL: Option<&'static str> = Some(Self::URL);
    const CLAP_SUPPORT_URL: Option<&'static str> = None;

    const CLAP_FEATURES: &'static [ClapFeature] = &[ClapFeature::NoteEffect, ClapFeature::Utility];
}

impl Vst3Plugin for MidiWrap {
    const VST3_CLASS_ID: [u8; 16] = *b"MidiWrapRange!!!";

    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Tools, Vst3SubCategory::Fx];
}

nih_export_clap!(MidiWrap);
nih_export_vst3!(MidiWrap);
