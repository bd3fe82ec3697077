//! qrgen - Model-2 QR code generator
//!
//! A pure Rust QR code encoding library covering versions 1-40, the four
//! error correction levels and the numeric, alphanumeric and byte data
//! modes, with penalty-based automatic mask selection.
//!
//! The result of an encode is a [`Canvas`]: a read-only module matrix that
//! the renderers in [`render`] turn into console art, PPM, SVG, EPS or PNG.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline (bit packing, modes, error correction, interleaving)
pub mod encoder;
/// The crate's error surface
pub mod error;
/// Symbol assembly (function patterns, placement, masking)
pub mod layout;
/// Core data structures (Canvas, Version, ECLevel, etc.)
pub mod models;
/// Canvas renderers (console, PPM, SVG, EPS, PNG)
pub mod render;

pub use error::EncodeError;
pub use models::{Canvas, Cell, ECLevel, EncodingMode, MaskPattern, PatternKind, Version};
pub use render::RenderOptions;

use encoder::qr_encoder::QrEncoder;

/// Encode `message` into a finished QR symbol.
///
/// A negative `mask` selects the lowest-penalty mask automatically; values
/// 0-7 force that pattern; anything above 7 is rejected.
///
/// # Errors
///
/// - [`EncodeError::InputNotRepresentable`] if `mode` cannot express the data
/// - [`EncodeError::CapacityExceeded`] if the payload does not fit version 40
/// - [`EncodeError::InvalidArgument`] if `mask` is above 7
///
/// # Example
///
/// ```
/// use qrgen::{encode, ECLevel, EncodingMode};
///
/// let canvas = encode(b"HELLO WORLD", ECLevel::M, EncodingMode::Alphanumeric, -1).unwrap();
/// assert_eq!(canvas.size(), 21);
/// ```
pub fn encode(
    message: &[u8],
    level: ECLevel,
    mode: EncodingMode,
    mask: i32,
) -> Result<Canvas, EncodeError> {
    let mask = parse_mask(mask)?;
    let context = QrEncoder::run(message, level, mode)?;
    Ok(layout::build_symbol(&context, mask))
}

fn parse_mask(mask: i32) -> Result<Option<MaskPattern>, EncodeError> {
    if mask < 0 {
        return Ok(None);
    }
    u8::try_from(mask)
        .ok()
        .and_then(MaskPattern::from_index)
        .map(Some)
        .ok_or_else(|| {
            EncodeError::InvalidArgument(format!(
                "mask must be negative (auto) or in [0, 7], got {}",
                mask
            ))
        })
}

/// Encoder with configuration options
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    level: ECLevel,
    mode: EncodingMode,
    mask: i32,
}

impl Encoder {
    /// Create an encoder with byte mode, level M and automatic masking
    pub fn new() -> Self {
        Self {
            level: ECLevel::M,
            mode: EncodingMode::Byte,
            mask: -1,
        }
    }

    /// Set the error correction level
    pub fn with_level(mut self, level: ECLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the data mode
    pub fn with_mode(mut self, mode: EncodingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Force a mask pattern (negative keeps automatic selection)
    pub fn with_mask(mut self, mask: i32) -> Self {
        self.mask = mask;
        self
    }

    /// Encode a message with this configuration
    pub fn encode(&self, message: &[u8]) -> Result<Canvas, EncodeError> {
        encode(message, self.level, self.mode, self.mask)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_smallest_symbol() {
        let canvas = encode(b"1", ECLevel::L, EncodingMode::Numeric, 0).unwrap();
        assert_eq!(canvas.version().value(), 1);
        assert_eq!(canvas.size(), 21);
    }

    #[test]
    fn test_mask_out_of_range() {
        let result = encode(b"1", ECLevel::L, EncodingMode::Numeric, 8);
        assert!(matches!(result, Err(EncodeError::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_mask_is_auto() {
        assert!(encode(b"1", ECLevel::L, EncodingMode::Numeric, -3).is_ok());
    }

    #[test]
    fn test_builder_matches_free_function() {
        let via_builder = Encoder::new()
            .with_level(ECLevel::Q)
            .with_mode(EncodingMode::Alphanumeric)
            .with_mask(2)
            .encode(b"TEST")
            .unwrap();
        let direct = encode(b"TEST", ECLevel::Q, EncodingMode::Alphanumeric, 2).unwrap();
        for row in 0..via_builder.size() {
            for col in 0..via_builder.size() {
                assert_eq!(via_builder.at(row, col), direct.at(row, col));
            }
        }
    }
}
