//! Crate-level error type.
//!
//! This module provides the single [`DecodeError`] type raised when a source
//! cannot be opened, and a convenient [`Result`] alias.
//!
//! Rationale
//! ---------
//! Error translation is deliberately limited to the open path: once a source
//! is open, failures surface as the backend's `std::io::Error` through the
//! iterator items instead of being re-wrapped. Callers that need to retry
//! must reopen the source; there is no partial-result recovery.

use std::io;

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// The external decoder could not open or initialize the requested resource.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The resource could not be read.
    ///
    /// Uses the concrete `std::io::Error` to preserve error kinds and sources.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container or format was not recognized by any registered reader.
    #[error("unrecognized or unsupported media format")]
    Probe {
        /// The underlying probe failure.
        #[source]
        source: symphonia::core::errors::Error,
    },

    /// A decoder for the selected track's codec could not be created.
    #[error("decoder initialization failed")]
    DecoderInit {
        /// The underlying codec registry failure.
        #[source]
        source: symphonia::core::errors::Error,
    },

    /// The probed container carries no decodable audio track.
    #[error("no decodable audio track")]
    NoAudioTrack,

    /// The stream does not declare a parameter this crate requires.
    #[error("stream is missing {0}")]
    MissingParams(&'static str),
}
