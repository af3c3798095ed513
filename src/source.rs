//! The decode adapter: [`PcmSource`].
//!
//! Design notes
//! ------------
//! - The backend is held by composition (`Option<Box<dyn DecoderBackend>>`),
//!   never by wrapping the external decoder's own types in the public API.
//! - Stream parameters are captured once at open; `duration` is recomputed
//!   from them on every call and is safe at any point after construction.
//! - Iteration is lazy, finite, forward-only and not restartable. One
//!   backend block becomes one emitted byte buffer.

use std::fmt;
use std::io;
use std::path::Path;

use bytes::Bytes;
use symphonia::core::io::MediaSource;

use crate::backend::{DecoderBackend, SymphoniaBackend};
use crate::convert::quantize_block;
use crate::error::DecodeError;
use crate::settings::SourceSettings;
use crate::types::AudioSpec;

/// A blocking source of interleaved 16-bit signed PCM byte buffers.
///
/// Lifecycle: `Open -> (iterating)* -> Exhausted | Closed`. Closing (or
/// dropping) the source releases the underlying decoder; afterwards
/// iteration yields nothing while the stream parameters and `duration`
/// keep answering from values captured at open.
///
/// A source is single-threaded: every operation blocks the calling thread
/// until the decoder completes it, and one source must not be driven from
/// multiple threads at once.
pub struct PcmSource {
    backend: Option<Box<dyn DecoderBackend>>,
    spec: AudioSpec,
    total_frames: u64,
    exhausted: bool,
}

impl PcmSource {
    /// Open a media file with default settings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        Self::open_with_settings(path, &SourceSettings::default())
    }

    /// Open a media file.
    pub fn open_with_settings(
        path: impl AsRef<Path>,
        settings: &SourceSettings,
    ) -> Result<Self, DecodeError> {
        let backend = SymphoniaBackend::open(path.as_ref(), settings)?;
        Ok(Self::from_backend(Box::new(backend)))
    }

    /// Open an arbitrary media source, e.g. an in-memory cursor.
    pub fn from_media_source(
        source: Box<dyn MediaSource>,
        settings: &SourceSettings,
    ) -> Result<Self, DecodeError> {
        let backend = SymphoniaBackend::from_media_source(source, settings)?;
        Ok(Self::from_backend(Box::new(backend)))
    }

    /// Build a source over a custom decoder backend.
    pub fn with_backend(backend: Box<dyn DecoderBackend>) -> Self {
        Self::from_backend(backend)
    }

    fn from_backend(backend: Box<dyn DecoderBackend>) -> Self {
        let spec = AudioSpec {
            sample_rate: backend.sample_rate(),
            channels: backend.channels(),
        };
        let total_frames = backend.total_frames();

        Self {
            backend: Some(backend),
            spec,
            total_frames,
            exhausted: false,
        }
    }

    /// PCM specification of the emitted buffers.
    pub fn spec(&self) -> AudioSpec {
        self.spec
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.spec.sample_rate
    }

    /// Channel count.
    pub fn channels(&self) -> u16 {
        self.spec.channels
    }

    /// Total sample frames as declared by the container; 0 when unknown.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Length of the audio in seconds.
    ///
    /// Recomputed on every call as `total_frames / sample_rate`; never
    /// cached, side-effect-free, and valid before, during and after
    /// iteration. Returns 0.0 when the container declares no frame count.
    pub fn duration(&self) -> f64 {
        if self.spec.sample_rate == 0 {
            return 0.0;
        }
        self.total_frames as f64 / f64::from(self.spec.sample_rate)
    }

    /// Release the underlying decoder immediately.
    ///
    /// Subsequent iteration yields `None`; the stream parameters and
    /// [`duration`](Self::duration) remain readable. Dropping the source has
    /// the same effect.
    pub fn close(&mut self) {
        if self.backend.take().is_some() {
            tracing::debug!("pcm source closed");
        }
    }

    /// `true` once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.backend.is_none()
    }
}

// Manual impl: the boxed backend is not `Debug`.
impl fmt::Debug for PcmSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcmSource")
            .field("spec", &self.spec)
            .field("total_frames", &self.total_frames)
            .field("exhausted", &self.exhausted)
            .field("closed", &self.backend.is_none())
            .finish_non_exhaustive()
    }
}

impl Iterator for PcmSource {
    type Item = io::Result<Bytes>;

    /// Pull the next decoded block as a quantized byte buffer.
    ///
    /// An empty block from the backend counts as end of stream. After an
    /// error the source is exhausted: the failure is yielded once and the
    /// iterator then stays at `None` (no retries).
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let backend = self.backend.as_mut()?;

        match backend.next_block() {
            Ok(Some(block)) if !block.is_empty() => Some(Ok(quantize_block(&block))),
            Ok(_) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            }
        }
    }
}
