//! Public, minimal types for the PCM source API.

/// Basic PCM specification of an open source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count (1 = mono, 2 = stereo, ...).
    pub channels: u16,
}

/// One unit of decoded audio produced by a [`DecoderBackend`].
///
/// Invariants:
/// - `samples.len()` is a multiple of `channels` (`channels == 0` is invalid).
/// - Samples are interleaved floats in approximately `[-1.0, 1.0]`:
///   for stereo it's `L R L R ...`.
///
/// A block is produced once per iteration step and never retained.
///
/// [`DecoderBackend`]: crate::backend::DecoderBackend
#[derive(Debug, Clone)]
pub struct AudioBlock {
    /// Interleaved float samples.
    pub samples: Vec<f32>,
    /// Channel count the samples were decoded with.
    pub channels: u16,
}

impl AudioBlock {
    /// Number of sample-frames in this block (one frame = one sample per channel).
    ///
    /// Defined as 0 for the invalid `channels == 0` case rather than panicking.
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    /// `true` when the block carries no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
