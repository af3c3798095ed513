//! Symphonia-backed [`DecoderBackend`].
//!
//! ## Open path
//! Probe the container, select the first decodable audio track, create the
//! codec decoder, and capture the stream parameters. Every failure on this
//! path is mapped into [`DecodeError`]; this is the only error translation
//! the crate performs.
//!
//! ## Pull path
//! `next_block` reads packets for the selected track and converts each
//! decoded buffer to interleaved f32 via Symphonia's `SampleBuffer` (the
//! planar-to-interleaved transpose happens there). Recoverable bitstream
//! errors skip the packet; end-of-stream signals surface as `Ok(None)`,
//! never as an error.

use std::fs::File;
use std::io;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::{MediaSource, MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::default::{get_codecs, get_probe};

use crate::backend::DecoderBackend;
use crate::error::DecodeError;
use crate::settings::SourceSettings;
use crate::types::AudioBlock;

/// Blocking decoder backend over Symphonia's probe and codec registry.
pub struct SymphoniaBackend {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    sample_rate: u32,
    channels: u16,
    total_frames: u64,
}

impl SymphoniaBackend {
    /// Open a media file.
    ///
    /// The probe hint is derived from the file extension unless the settings
    /// override it.
    pub fn open(path: &Path, settings: &SourceSettings) -> Result<Self, DecodeError> {
        let file = File::open(path)?;

        let mut hint = Hint::new();
        match &settings.hint_extension {
            Some(ext) => {
                hint.with_extension(ext);
            }
            None => {
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    hint.with_extension(ext);
                }
            }
        }

        Self::from_source(Box::new(file), hint, settings)
    }

    /// Open an arbitrary media source (in-memory cursor, custom stream, ...).
    pub fn from_media_source(
        source: Box<dyn MediaSource>,
        settings: &SourceSettings,
    ) -> Result<Self, DecodeError> {
        let mut hint = Hint::new();
        if let Some(ext) = &settings.hint_extension {
            hint.with_extension(ext);
        }

        Self::from_source(source, hint, settings)
    }

    fn from_source(
        source: Box<dyn MediaSource>,
        hint: Hint,
        settings: &SourceSettings,
    ) -> Result<Self, DecodeError> {
        let mss = MediaSourceStream::new(source, MediaSourceStreamOptions::default());

        let format_opts = FormatOptions {
            enable_gapless: settings.enable_gapless,
            ..FormatOptions::default()
        };

        let probed = get_probe()
            .format(&hint, mss, &format_opts, &MetadataOptions::default())
            .map_err(|e| match e {
                SymphoniaError::IoError(io_err) => DecodeError::Io(io_err),
                other => DecodeError::Probe { source: other },
            })?;

        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or(DecodeError::NoAudioTrack)?;

        let params = &track.codec_params;

        let sample_rate = params
            .sample_rate
            .ok_or(DecodeError::MissingParams("a sample rate"))?;
        let channels = params
            .channels
            .map(|c| c.count() as u16)
            .ok_or(DecodeError::MissingParams("a channel count"))?;
        let total_frames = params.n_frames.unwrap_or(0);
        let track_id = track.id;

        let decoder = get_codecs()
            .make(
                params,
                &DecoderOptions {
                    verify: settings.verify,
                    ..DecoderOptions::default()
                },
            )
            .map_err(|e| DecodeError::DecoderInit { source: e })?;

        tracing::info!(
            sample_rate,
            channels,
            total_frames,
            "decoder source opened"
        );

        Ok(Self {
            format,
            decoder,
            track_id,
            sample_rate,
            channels,
            total_frames,
        })
    }
}

impl DecoderBackend for SymphoniaBackend {
    fn next_block(&mut self) -> io::Result<Option<AudioBlock>> {
        loop {
            let packet = match self.format.next_packet() {
                Ok(p) => p,
                // The reader surfaces a clean end of stream as an EOF-ish
                // I/O error; a reset request also means this stream is done.
                Err(SymphoniaError::IoError(e))
                    if e.kind() == io::ErrorKind::UnexpectedEof =>
                {
                    return Ok(None);
                }
                Err(SymphoniaError::ResetRequired) => return Ok(None),
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = match self.decoder.decode(&packet) {
                Ok(buf) => buf,
                Err(SymphoniaError::DecodeError(e)) => {
                    // Recoverable bitstream error; skip the packet.
                    tracing::debug!("decode error (skipping packet): {e}");
                    continue;
                }
                Err(SymphoniaError::IoError(e))
                    if e.kind() == io::ErrorKind::UnexpectedEof =>
                {
                    return Ok(None);
                }
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
            };

            if decoded.frames() == 0 {
                continue;
            }

            let spec = *decoded.spec();
            let channels = spec.channels.count() as u16;

            let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
            buf.copy_interleaved_ref(decoded);

            return Ok(Some(AudioBlock {
                samples: buf.samples().to_vec(),
                channels,
            }));
        }
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
