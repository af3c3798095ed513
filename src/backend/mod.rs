//! The narrow decoder collaborator behind a [`PcmSource`].
//!
//! Decoding itself is never implemented here: a backend wraps an external
//! decoding library and exposes exactly what the adapter needs — open (a
//! constructor on the concrete type), block-by-block pull, the stream
//! parameters, and the library's raw duration. Release is RAII: dropping a
//! backend releases the underlying resource on every exit path.
//!
//! [`PcmSource`]: crate::PcmSource

use std::io;

use crate::types::AudioBlock;

pub mod symphonia;

pub use self::symphonia::SymphoniaBackend;

/// An open handle to a media resource capable of producing successive blocks
/// of decoded audio.
///
/// Backends are blocking and single-threaded: every call blocks the calling
/// thread until the underlying decoder completes it, and concurrent calls
/// into one backend are not supported.
pub trait DecoderBackend: Send {
    /// Pull the next decoded block.
    ///
    /// Returns `Ok(None)` at end of stream. Errors are the backend's own
    /// I/O failures and are not translated further; after an error the
    /// stream is unusable and must be reopened.
    fn next_block(&mut self) -> io::Result<Option<AudioBlock>>;

    /// Sample rate of the open stream in Hz. Positive for any stream this
    /// crate accepts at open time.
    fn sample_rate(&self) -> u32;

    /// Channel count of the open stream. Positive for any stream this crate
    /// accepts at open time.
    fn channels(&self) -> u16;

    /// The external library's raw duration, in sample frames.
    ///
    /// Zero when the container does not declare a frame count.
    fn total_frames(&self) -> u64;
}
