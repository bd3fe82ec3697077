//! Integration tests for QR code generation.
//!
//! These exercise the full pipeline through the public API: version
//! selection, codeword layout, masking and the renderers, plus the
//! Reed-Solomon output checked against a syndrome oracle.

use qrgen::encoder::bitstream::BitStream;
use qrgen::encoder::qr_encoder::QrEncoder;
use qrgen::encoder::reed_solomon::{generate_ecc_block, Gf256};
use qrgen::render::{ppm, svg, RenderOptions};
use qrgen::{encode, ECLevel, EncodeError, EncodingMode, MaskPattern, PatternKind};

/// A valid RS codeword has zero syndromes: evaluating the received
/// polynomial at alpha^0 .. alpha^(k-1) must give zero everywhere.
fn assert_zero_syndromes(codeword: &[u8], n_ecc: usize) {
    let n = codeword.len();
    for i in 0..n_ecc {
        let mut sum = 0u8;
        for (j, &coeff) in codeword.iter().enumerate() {
            sum ^= Gf256::mul(coeff, Gf256::exp(i * (n - 1 - j)));
        }
        assert_eq!(sum, 0, "syndrome {} is non-zero", i);
    }
}

#[test]
fn test_ecc_blocks_have_zero_syndromes() {
    let samples: [&[u8]; 3] = [
        &[64, 196, 132, 84, 196, 196, 242, 194, 4, 132, 20, 37, 34, 16, 236, 17],
        &[0x10, 0x20, 0x02, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11],
        &[0xFF; 19],
    ];
    for data in samples {
        for n_ecc in [7, 10, 18, 28, 30] {
            let ecc = generate_ecc_block(data, n_ecc);
            let mut codeword = data.to_vec();
            codeword.extend_from_slice(&ecc);
            assert_zero_syndromes(&codeword, n_ecc);
        }
    }
}

#[test]
fn test_hello_world_symbol_structure() {
    let canvas = encode(b"HELLO WORLD", ECLevel::M, EncodingMode::Alphanumeric, -1).unwrap();
    assert_eq!(canvas.version().value(), 1);
    assert_eq!(canvas.size(), 21);
    assert_eq!(canvas.count_kind(PatternKind::Unknown), 0);

    // The three finder cores are dark, the fourth corner is data territory
    assert!(canvas.at(3, 3).dark);
    assert!(canvas.at(3, 17).dark);
    assert!(canvas.at(17, 3).dark);
    assert_eq!(canvas.at(3, 3).kind, PatternKind::Finder);
    assert_eq!(canvas.at(17, 17).kind, PatternKind::Data);

    // Timing pattern survives data placement
    for a in 8..13 {
        assert_eq!(canvas.at(6, a).kind, PatternKind::Timing);
        assert_eq!(canvas.at(6, a).dark, a % 2 == 0);
    }

    // Dark module
    assert!(canvas.at(canvas.size() - 8, 8).dark);
}

#[test]
fn test_format_cells_match_table_for_fixed_mask() {
    for (level, mask, expected) in [
        (ECLevel::M, 0, 0x5412u16),
        (ECLevel::L, 7, 0x6976),
        (ECLevel::H, 5, 0x0255),
    ] {
        let canvas = encode(b"42", level, EncodingMode::Numeric, mask).unwrap();
        // Read the copy around the top-left finder in bit order
        let mut bits = 0u16;
        for i in 0..6 {
            bits |= u16::from(canvas.at(i, 8).dark) << i;
        }
        bits |= u16::from(canvas.at(7, 8).dark) << 6;
        bits |= u16::from(canvas.at(8, 8).dark) << 7;
        bits |= u16::from(canvas.at(8, 7).dark) << 8;
        for i in 9..15 {
            bits |= u16::from(canvas.at(8, 14 - i).dark) << i;
        }
        assert_eq!(bits, expected, "level {} mask {}", level, mask);
    }
}

#[test]
fn test_version_grows_with_payload() {
    // Larger byte-mode payloads must select monotonically larger versions,
    // each producing a fully placed symbol, up to version 40.
    let mut previous = 0;
    for target_bytes in [10, 100, 500, 1000, 1500, 2000, 2500, 2953] {
        let message = vec![b'q'; target_bytes];
        let canvas = encode(&message, ECLevel::L, EncodingMode::Byte, 3).unwrap();
        let v = canvas.version().value();
        assert!(v >= previous);
        previous = v;
        assert_eq!(canvas.count_kind(PatternKind::Unknown), 0);
        assert_eq!(
            canvas.count_kind(PatternKind::Data),
            canvas.version().raw_data_modules()
        );
    }
    assert_eq!(previous, 40);
}

#[test]
fn test_capacity_boundary_at_version_40() {
    // 2953 bytes is the last payload that fits v40-L byte mode
    assert!(encode(&vec![0u8; 2953], ECLevel::L, EncodingMode::Byte, 0).is_ok());
    let over = encode(&vec![0u8; 2954], ECLevel::L, EncodingMode::Byte, 0);
    assert!(matches!(over, Err(EncodeError::CapacityExceeded { .. })));
}

#[test]
fn test_auto_mask_beats_fixed_masks() {
    let message = b"https://example.com/some/long/path?with=query";
    let auto = encode(message, ECLevel::Q, EncodingMode::Byte, -1).unwrap();
    let auto_penalty = qrgen::layout::mask::penalty(&auto);
    for m in 0..8 {
        let fixed = encode(message, ECLevel::Q, EncodingMode::Byte, m).unwrap();
        assert!(auto_penalty <= qrgen::layout::mask::penalty(&fixed));
    }
}

#[test]
fn test_mode_rejections_surface_preview() {
    let err = encode(b"abc", ECLevel::M, EncodingMode::Numeric, 0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("num"));
    assert!(msg.contains("abc"));
}

#[test]
fn test_interleaved_stream_length_matches_capacity() {
    for (level, message_len) in [(ECLevel::L, 17), (ECLevel::M, 40), (ECLevel::H, 7)] {
        let message = vec![b'5'; message_len];
        let ctx = QrEncoder::run(&message, level, EncodingMode::Numeric).unwrap();
        let total_codewords = ctx.version.raw_data_modules() / 8;
        assert_eq!(
            ctx.interleaved.byte_len(),
            total_codewords,
            "level {} len {}",
            level,
            message_len
        );
    }
}

#[test]
fn test_version2_leaves_seven_remainder_bits() {
    // v2 offers 359 data modules for 352 codeword bits; the placer fills the
    // trailing 7 with zero bits, so unmasking must leave them light.
    let message = vec![b'7'; 45]; // needs v2 at level M
    let ctx = QrEncoder::run(&message, ECLevel::M, EncodingMode::Numeric).unwrap();
    assert_eq!(ctx.version.value(), 2);
    assert_eq!(ctx.version.raw_data_modules() - ctx.interleaved.len(), 7);

    let mut canvas = qrgen::layout::build_symbol(&ctx, Some(MaskPattern::Pattern0));
    qrgen::layout::mask::apply_mask(&mut canvas, MaskPattern::Pattern0);
    // With the mask undone, dark data modules correspond 1:1 to set bits in
    // the codeword stream; the remainder modules contribute none.
    let dark_data = (0..canvas.size())
        .flat_map(|r| (0..canvas.size()).map(move |c| (r, c)))
        .filter(|&(r, c)| {
            canvas.at(r, c).kind == PatternKind::Data && canvas.at(r, c).dark
        })
        .count();
    let stream_ones = (0..ctx.interleaved.len())
        .filter(|&i| ctx.interleaved.bit_at(i) == Some(1))
        .count();
    assert_eq!(dark_data, stream_ones);
}

#[test]
fn test_ppm_renderer_end_to_end() {
    let canvas = encode(b"PPM", ECLevel::M, EncodingMode::Alphanumeric, 1).unwrap();
    let options = RenderOptions {
        scale: 2,
        indent: 3,
    };
    let mut out = Vec::new();
    ppm::write_ppm(&mut out, &canvas, &options).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P1"));
    let expected = (21 + 6) * 2;
    assert_eq!(lines.next(), Some(format!("{0} {0}", expected).as_str()));
    assert_eq!(lines.count(), expected);
}

#[test]
fn test_svg_renderer_square_count() {
    let canvas = encode(b"SVG", ECLevel::M, EncodingMode::Alphanumeric, 0).unwrap();
    let mut out = Vec::new();
    svg::write_svg(&mut out, &canvas, &RenderOptions::default()).unwrap();
    let text = String::from_utf8(out).unwrap();
    let squares = text.matches("h1v1h-1z").count();
    assert_eq!(squares, canvas.dark_count());
}

#[test]
fn test_split_blocks_concatenation_round_trip() {
    let stream = BitStream::from_bytes((0u8..=134).collect());
    for count in [1, 2, 3, 5, 8, 13] {
        let joined: Vec<u8> = stream
            .split_into_blocks(count)
            .into_iter()
            .flatten()
            .copied()
            .collect();
        assert_eq!(joined, stream.as_bytes());
    }
}
