//! Blocking PCM source over a pluggable audio decoder backend.
//!
//! This crate exposes media files and byte streams as a lazy, forward-only
//! sequence of interleaved 16-bit signed PCM byte buffers. The actual
//! decoding is delegated to an external decoder behind the narrow
//! [`backend::DecoderBackend`] trait; the bundled implementation uses
//! Symphonia. Implementation details live in dedicated modules; this file
//! only wires modules and re-exports.
//!
//! ```no_run
//! use pcm_source::PcmSource;
//!
//! # fn main() -> pcm_source::Result<()> {
//! let mut source = PcmSource::open("something.flac")?;
//! println!("{} Hz, {} channels, {:.2}s", source.sample_rate(), source.channels(), source.duration());
//! for block in &mut source {
//!     let pcm = block?;
//!     // feed `pcm` (native-endian i16, channel-interleaved) downstream
//! }
//! # Ok(())
//! # }
//! ```

mod convert;
mod error;
mod settings;
mod source;
mod types;

pub mod backend;

// Re-export the buffer type callers receive from iteration.
pub use bytes::Bytes;

pub use crate::error::{DecodeError, Result};
pub use crate::settings::SourceSettings;
pub use crate::source::PcmSource;
pub use crate::types::{AudioBlock, AudioSpec};
