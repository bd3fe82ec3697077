//! QR code encoding modules
//!
//! Everything between the input bytes and the final codeword stream:
//! - Bit stream packing
//! - Data mode encoders (numeric, alphanumeric, byte)
//! - Reed-Solomon error correction
//! - Version/capacity/format lookup tables
//! - The driver that selects a version, pads, blocks and interleaves

/// Append-only bit vector with byte-aligned storage
pub mod bitstream;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Encoder driver orchestrating the codeword pipeline
pub mod qr_encoder;
/// GF(256) arithmetic and ECC block generation
pub mod reed_solomon;
/// Static capacity, block, alignment, format and version tables
pub mod tables;
