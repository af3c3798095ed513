//! Lossy float-to-PCM quantization.
//!
//! Conversion policy (fixed, see the crate docs):
//! - scale by 32768,
//! - round to nearest, ties away from zero,
//! - saturate to `[-32768, 32767]`,
//! - serialize as native-endian `i16`.
//!
//! The conversion is lossy and irreversible (f32 -> i16).

use bytes::{BufMut, Bytes, BytesMut};

use crate::types::AudioBlock;

/// Quantize one interleaved float block into a flat native-endian byte buffer.
pub(crate) fn quantize_block(block: &AudioBlock) -> Bytes {
    let mut out = BytesMut::with_capacity(block.samples.len() * 2);
    for &sample in &block.samples {
        out.put_i16_ne(quantize_sample(sample));
    }
    out.freeze()
}

#[inline]
fn quantize_sample(sample: f32) -> i16 {
    (sample * 32768.0)
        .round()
        .clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
}
