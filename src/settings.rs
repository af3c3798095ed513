//! Open-time settings for a [`PcmSource`].
//!
//! Block granularity is not configurable: the source yields blocks at the
//! decoder's own packet size, equivalent to asking the decoder for its
//! default hop.
//!
//! [`PcmSource`]: crate::PcmSource

/// Settings applied when opening a source.
#[derive(Debug, Clone, Default)]
pub struct SourceSettings {
    /// Ask the codec decoder to verify checksums where the codec supports it.
    /// Default: false.
    pub verify: bool,

    /// Enable gapless trimming in the format reader (removes encoder
    /// padding/delay for formats that declare it).
    /// Default: false.
    pub enable_gapless: bool,

    /// Override the probe hint normally derived from the file extension.
    ///
    /// Useful when the resource name carries no extension (e.g. a raw byte
    /// stream). Default: none.
    pub hint_extension: Option<String>,
}

impl SourceSettings {
    /// Create default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set checksum verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Set gapless trimming.
    pub fn with_gapless(mut self, enable: bool) -> Self {
        self.enable_gapless = enable;
        self
    }

    /// Set an explicit probe hint extension.
    pub fn with_hint_extension(mut self, extension: impl Into<String>) -> Self {
        self.hint_extension = Some(extension.into());
        self
    }
}
