//! QR code data mode encoders
//!
//! One encoder per supported mode:
//! - Numeric: efficient packing for digits (0-9)
//! - Alphanumeric: the 45-character uppercase set
//! - Byte: 8-bit data (UTF-8, binary, etc.)
//!
//! Encoders emit payload bits only; the driver prepends the mode indicator
//! and the character count field.

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

use crate::encoder::bitstream::BitStream;
use crate::models::EncodingMode;

use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use numeric::NumericEncoder;

/// Check whether `data` is representable in `mode`
pub fn supports(mode: EncodingMode, data: &[u8]) -> bool {
    match mode {
        EncodingMode::Numeric => NumericEncoder::supports(data),
        EncodingMode::Alphanumeric => AlphanumericEncoder::supports(data),
        EncodingMode::Byte => ByteEncoder::supports(data),
    }
}

/// Append the payload bits of `data` in `mode`
pub fn convert(mode: EncodingMode, data: &[u8], stream: &mut BitStream) {
    match mode {
        EncodingMode::Numeric => NumericEncoder::convert(data, stream),
        EncodingMode::Alphanumeric => AlphanumericEncoder::convert(data, stream),
        EncodingMode::Byte => ByteEncoder::convert(data, stream),
    }
}
