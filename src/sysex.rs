use nih_plug::prelude::SysExMessage;

/**
 * The longest SysEx message that can be forwarded, in bytes, including the F0 and F7 framing.
 */
pub const SYSEX_CAPACITY: usize = 256;

/**
 * An opaque SysEx message, stored inline so events stay `Copy` and the audio thread never
 * allocates. The bytes are forwarded exactly as they were received.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSysEx {
    data: [u8; SYSEX_CAPACITY],
    len: usize,
}

impl RawSysEx {
    /**
     * Copy a message, `None` if it doesn't fit.
     */
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > SYSEX_CAPACITY {
            return None;
        }

        let mut data = [0; SYSEX_CAPACITY];
        data[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            data,
            len: bytes.len(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl SysExMessage for RawSysEx {
    type Buffer = [u8; SYSEX_CAPACITY];

    // Longer messages are left to the host wrapper, which drops them.
    fn from_buffer(buffer: &[u8]) -> Option<Self> {
        Self::new(buffer)
    }

    fn to_buffer(self) -> (Self::Buffer, usize) {
        (self.data, self.len)
    }
}
