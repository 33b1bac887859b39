//! Decoder configuration

/// Limits applied by [`crate::Decoder`] before parsing
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Largest accepted frame in bytes (`None` = unbounded)
    pub max_frame_len: Option<usize>,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject frames longer than `len` bytes
    pub fn with_max_frame_len(mut self, len: usize) -> Self {
        self.max_frame_len = Some(len);
        self
    }

    /// Remove the frame size limit
    pub fn unbounded(mut self) -> Self {
        self.max_frame_len = None;
        self
    }
}
