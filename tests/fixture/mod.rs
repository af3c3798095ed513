//! Test fixtures for decode integration tests.
//!
//! WAV is generated by hand because it is the simplest container to build
//! without external tooling, and the bundled backend decodes it. The
//! generators return the 16-bit samples alongside the file so tests can
//! assert exact round-trips.

/// Build a complete 16-bit PCM WAV file from interleaved samples.
pub fn wav_from_samples(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
    assert!(channels > 0);
    assert_eq!(samples.len() % channels as usize, 0);

    let data_len = (samples.len() * 2) as u32;
    let mut wav = Vec::with_capacity(44 + data_len as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    let byte_rate = sample_rate * u32::from(channels) * 2;
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&(channels * 2).to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }

    wav
}

/// Generate a sine wave WAV of exactly `frames` sample-frames.
///
/// Returns the file bytes and the interleaved samples it contains.
pub fn sine_wav(
    freq_hz: f32,
    frames: usize,
    sample_rate: u32,
    channels: u16,
) -> (Vec<u8>, Vec<i16>) {
    let mut samples = Vec::with_capacity(frames * channels as usize);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let value = (2.0 * std::f32::consts::PI * freq_hz * t).sin();
        let sample = (value * f32::from(i16::MAX)) as i16;
        for _ in 0..channels {
            samples.push(sample);
        }
    }

    let wav = wav_from_samples(&samples, sample_rate, channels);
    (wav, samples)
}

/// Generate an all-zero WAV of exactly `frames` sample-frames.
pub fn silence_wav(frames: usize, sample_rate: u32, channels: u16) -> Vec<u8> {
    wav_from_samples(&vec![0i16; frames * channels as usize], sample_rate, channels)
}

/// Decode a native-endian i16 byte buffer back into samples.
pub fn i16_from_ne(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|b| i16::from_ne_bytes([b[0], b[1]]))
        .collect()
}

/// Opt-in test logging: `RUST_LOG=debug cargo test -- --nocapture`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
