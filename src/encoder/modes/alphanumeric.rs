use crate::encoder::bitstream::BitStream;

/// Alphanumeric character set in code order: 0-9, A-Z, space, $%*+-./:
static ALPHANUMERIC_CHARSET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn char_code(b: u8) -> Option<u32> {
    ALPHANUMERIC_CHARSET
        .iter()
        .position(|&c| c == b)
        .map(|i| i as u32)
}

/// Alphanumeric mode encoder (mode 0010)
/// Pairs = 11 bits (45 * first + second), trailing single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Accepts the 45-character alphanumeric set only
    pub fn supports(data: &[u8]) -> bool {
        data.iter().all(|&b| char_code(b).is_some())
    }

    /// Append the payload bits for `data`. The caller adds the mode and
    /// count header and must have validated with [`supports`](Self::supports).
    pub fn convert(data: &[u8], stream: &mut BitStream) {
        for pair in data.chunks(2) {
            match *pair {
                [a, b] => {
                    let value = char_code(a).unwrap_or(0) * 45 + char_code(b).unwrap_or(0);
                    stream.append_bits(value, 11);
                }
                [a] => stream.append_bits(char_code(a).unwrap_or(0), 6),
                _ => unreachable!(),
            }
        }
    }
}
