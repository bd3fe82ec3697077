use crate::encoder::bitstream::BitStream;

/// Byte mode encoder (mode 0100): 8 bits per input byte.
/// No character-set detection is performed; the caller decides what the
/// bytes mean (UTF-8, Latin-1, binary).
pub struct ByteEncoder;

impl ByteEncoder {
    /// Any byte string is representable
    pub fn supports(_data: &[u8]) -> bool {
        true
    }

    /// Append each byte as 8 bits
    pub fn convert(data: &[u8], stream: &mut BitStream) {
        for &byte in data {
            stream.append_bits(u32::from(byte), 8);
        }
    }
}
