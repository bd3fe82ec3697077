//! Core data structures for QR code generation
//!
//! This module defines the main types used throughout the library:
//! - Canvas: the square module matrix handed to renderers
//! - Cell, PatternKind: per-module role and color
//! - Version, ECLevel, MaskPattern, EncodingMode: QR code metadata

pub mod canvas;
pub mod qr_code;

pub use canvas::{Canvas, Cell, PatternKind};
pub use qr_code::{ECLevel, EncodingMode, MaskPattern, Version};
