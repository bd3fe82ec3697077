use crate::encoder::bitstream::BitStream;

/// Numeric mode encoder (mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericEncoder;

impl NumericEncoder {
    /// Accepts strings of ASCII digits only
    pub fn supports(data: &[u8]) -> bool {
        data.iter().all(|b| b.is_ascii_digit())
    }

    /// Append the payload bits for `data`. The caller is responsible for the
    /// mode indicator and character count header, and for validating with
    /// [`supports`](Self::supports) first.
    pub fn convert(data: &[u8], stream: &mut BitStream) {
        for group in data.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            stream.append_bits(value, width);
        }
    }
}
