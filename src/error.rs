//! The single error surface of the crate.

use thiserror::Error;

/// Errors surfaced by encoding and rendering.
///
/// Lookup-table misses are programmer errors, not variants here; they panic.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The chosen mode cannot represent the input
    #[error("input not representable in {mode} mode: {preview:?}")]
    InputNotRepresentable {
        /// CLI token of the rejecting mode
        mode: &'static str,
        /// Short prefix of the offending input
        preview: String,
    },

    /// The payload does not fit version 40 at the chosen correction level
    #[error("data of {bits} bits exceeds version 40 capacity at correction level {level}")]
    CapacityExceeded {
        /// Payload size before headers
        bits: usize,
        /// Correction level the capacity was checked against
        level: String,
    },

    /// A caller-supplied parameter is out of range or unparsable
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Renderer I/O failure
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failure
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}

impl EncodeError {
    /// Build the unsupported-input error with a bounded preview of the data
    pub(crate) fn not_representable(mode: &'static str, data: &[u8]) -> Self {
        const PREVIEW_LEN: usize = 24;
        let preview = String::from_utf8_lossy(&data[..data.len().min(PREVIEW_LEN)]).into_owned();
        EncodeError::InputNotRepresentable { mode, preview }
    }
}
