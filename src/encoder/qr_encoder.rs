//! Encoder driver: version selection, headers, padding, block splitting,
//! error correction and interleaving.

use log::debug;

use crate::encoder::bitstream::BitStream;
use crate::encoder::modes;
use crate::encoder::reed_solomon::generate_ecc_block;
use crate::encoder::tables;
use crate::error::EncodeError;
use crate::models::{ECLevel, EncodingMode, Version};

/// Mode indicator width in bits
const MODE_FIELD_BITS: usize = 4;

/// Alternating pad codewords from the standard
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Intermediate state of one encode call, from payload bits to the
/// interleaved codeword stream placed on the canvas.
#[derive(Debug)]
pub struct EncodeContext {
    /// Input length in characters (bytes for byte mode)
    pub input_len: usize,
    /// Data mode the payload was packed with
    pub mode: EncodingMode,
    /// Requested error correction level
    pub level: ECLevel,
    /// Smallest version the message fits
    pub version: Version,
    /// Width of the character count header field in bits
    pub count_field_width: usize,
    /// Header + payload + terminator + padding, byte-aligned at the end
    pub stream: BitStream,
    /// Data capacity of (version, level) in bits
    pub max_data_bits: usize,
    /// Data codewords split per the block table, short blocks first
    pub data_blocks: Vec<Vec<u8>>,
    /// One ECC block per data block
    pub ecc_blocks: Vec<Vec<u8>>,
    /// Final codeword stream: data column-interleaved, then ECC
    pub interleaved: BitStream,
}

/// Stateless encoder front-end; [`run`](QrEncoder::run) drives the pipeline
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `message` into the interleaved codeword stream for the
    /// smallest version that fits.
    pub fn run(
        message: &[u8],
        level: ECLevel,
        mode: EncodingMode,
    ) -> Result<EncodeContext, EncodeError> {
        if !modes::supports(mode, message) {
            return Err(EncodeError::not_representable(mode.name(), message));
        }

        let mut payload = BitStream::new();
        modes::convert(mode, message, &mut payload);

        let (version, max_data_bits, count_field_width) =
            Self::select_version(payload.len(), level, mode)?;
        debug!(
            "selected version={} capacity={} bits, count field {} bits",
            version.value(),
            max_data_bits,
            count_field_width
        );

        let mut context = EncodeContext {
            input_len: message.len(),
            mode,
            level,
            version,
            count_field_width,
            stream: BitStream::new(),
            max_data_bits,
            data_blocks: Vec::new(),
            ecc_blocks: Vec::new(),
            interleaved: BitStream::new(),
        };

        context.stream.append_bits(mode.indicator(), MODE_FIELD_BITS);
        context
            .stream
            .append_bits(message.len() as u32, count_field_width);
        context.stream.append_stream(&payload);

        Self::add_terminator(&mut context.stream, max_data_bits);
        Self::add_pad_bytes(&mut context.stream, max_data_bits);
        Self::build_blocks(&mut context);
        context.interleaved = BitStream::from_bytes(Self::interleave(&context));

        Ok(context)
    }

    /// Pick the smallest version whose data capacity holds the mode header
    /// plus the payload. The count field width depends on the version bucket,
    /// so it is evaluated per candidate version.
    fn select_version(
        payload_bits: usize,
        level: ECLevel,
        mode: EncodingMode,
    ) -> Result<(Version, usize, usize), EncodeError> {
        for v in Version::MIN.value()..=Version::MAX.value() {
            let version = Version::new(v).expect("candidate version in range");
            let capacity = tables::data_capacity_bits(version, level);
            let width = mode.char_count_bits(version);
            if MODE_FIELD_BITS + width + payload_bits <= capacity {
                return Ok((version, capacity, width));
            }
        }
        Err(EncodeError::CapacityExceeded {
            bits: payload_bits,
            level: level.to_string(),
        })
    }

    /// Append up to four terminator zero bits, then zero-fill to the next
    /// byte boundary.
    fn add_terminator(stream: &mut BitStream, max_data_bits: usize) {
        let terminator = 4.min(max_data_bits - stream.len());
        if terminator > 0 {
            debug!("append {} terminator bits", terminator);
            stream.set_bit_len(stream.len() + terminator);
        }
        let rem = stream.len() % 8;
        if rem > 0 {
            debug!("append {} trailing zero bits", 8 - rem);
            stream.set_bit_len(stream.len() + 8 - rem);
        }
    }

    /// Fill the remaining data capacity with alternating 0xEC / 0x11 bytes
    fn add_pad_bytes(stream: &mut BitStream, max_data_bits: usize) {
        let target_bytes = max_data_bits / 8;
        let mut idx = 0;
        while stream.byte_len() < target_bytes {
            stream.append_bits(u32::from(PAD_BYTES[idx]), 8);
            idx = (idx + 1) % PAD_BYTES.len();
        }
    }

    /// Split the padded stream into data blocks and compute the ECC block
    /// for each.
    fn build_blocks(context: &mut EncodeContext) {
        let info = tables::ec_block_info(context.version, context.level);
        debug!(
            "{} blocks, {} ecc bytes per block",
            info.num_blocks, info.ecc_per_block
        );

        context.data_blocks = context
            .stream
            .split_into_blocks(info.num_blocks)
            .into_iter()
            .map(<[u8]>::to_vec)
            .collect();
        context.ecc_blocks = context
            .data_blocks
            .iter()
            .map(|block| generate_ecc_block(block, info.ecc_per_block))
            .collect();
    }

    /// Emit data codewords column by column across all blocks (short blocks
    /// are exhausted at their last position and skipped), then ECC codewords
    /// the same way.
    fn interleave(context: &EncodeContext) -> Vec<u8> {
        let data_len: usize = context.data_blocks.iter().map(Vec::len).sum();
        let ecc_len: usize = context.ecc_blocks.iter().map(Vec::len).sum();
        let mut out = Vec::with_capacity(data_len + ecc_len);

        let longest = context
            .data_blocks
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        for byte_idx in 0..longest {
            for block in &context.data_blocks {
                if let Some(&byte) = block.get(byte_idx) {
                    out.push(byte);
                }
            }
        }

        let ecc_per_block = context.ecc_blocks.first().map_or(0, Vec::len);
        for byte_idx in 0..ecc_per_block {
            for block in &context.ecc_blocks {
                out.push(block[byte_idx]);
            }
        }

        out
    }
}
