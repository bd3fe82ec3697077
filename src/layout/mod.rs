//! 2-D symbol assembly: function patterns, data placement, masking.

/// Format information reservation and writing
pub mod format;
/// Finder, separator, alignment, timing and version patterns
pub mod function_patterns;
/// Mask application and penalty scoring
pub mod mask;
/// Zig-zag codeword placement
pub mod placer;

use log::debug;

use crate::encoder::qr_encoder::EncodeContext;
use crate::models::{Canvas, MaskPattern};

/// Assemble the finished symbol for an encoded message.
///
/// With a fixed mask the symbol is built once. With `mask == None` all eight
/// candidates are built and scored; the lowest penalty wins and ties break
/// on the lower mask index.
pub fn build_symbol(context: &EncodeContext, mask: Option<MaskPattern>) -> Canvas {
    let mut base = Canvas::new(context.version);
    function_patterns::place_function_patterns(&mut base);

    match mask {
        Some(mask) => finish(base, context, mask),
        None => {
            let mut best: Option<(u32, Canvas)> = None;
            for candidate_mask in MaskPattern::ALL {
                let candidate = finish(base.clone(), context, candidate_mask);
                let score = mask::penalty(&candidate);
                debug!("mask {} penalty {}", candidate_mask.index(), score);
                if best.as_ref().map_or(true, |(min, _)| score < *min) {
                    best = Some((score, candidate));
                }
            }
            let (score, winner) = best.expect("eight candidates were scored");
            debug!("selected mask with penalty {}", score);
            winner
        }
    }
}

fn finish(mut canvas: Canvas, context: &EncodeContext, mask: MaskPattern) -> Canvas {
    placer::place_message(&mut canvas, &context.interleaved, mask);
    format::write_format_info(&mut canvas, context.level, mask);
    canvas
}
