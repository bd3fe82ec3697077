use crate::error::EncodeError;

/// QR Code version (1-40 for Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest Model 2 version
    pub const MIN: Version = Version(1);
    /// Largest Model 2 version
    pub const MAX: Version = Version(40);

    /// Create a version, failing outside [1, 40]
    pub fn new(value: u8) -> Result<Self, EncodeError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(EncodeError::InvalidArgument(format!(
                "version must be in [1, 40], got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Get the version number (1-40)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Get the symbol side length in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Total modules available for codewords (data + ECC + remainder bits),
    /// after all function patterns are subtracted
    pub fn raw_data_modules(&self) -> usize {
        let v = self.0 as usize;
        let mut result = (16 * v + 128) * v + 64;
        if v >= 2 {
            let num_align = v / 7 + 2;
            result -= (25 * num_align - 10) * num_align - 55;
            if v >= 7 {
                result -= 36;
            }
        }
        result
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Table row for this level (L=0, M=1, Q=2, H=3)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Nominal recovery capacity in percent
    pub fn recovery_percent(&self) -> usize {
        match self {
            ECLevel::L => 7,
            ECLevel::M => 15,
            ECLevel::Q => 25,
            ECLevel::H => 30,
        }
    }

    /// Parse the CLI token (L, M, Q or H)
    pub fn from_name(name: &str) -> Result<Self, EncodeError> {
        match name {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            other => Err(EncodeError::InvalidArgument(format!(
                "unknown correction level: {} (expected L, M, Q or H)",
                other
            ))),
        }
    }

    /// The CLI token for this level
    pub fn name(&self) -> &'static str {
        match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        }
    }
}

impl std::fmt::Display for ECLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (r + c) % 2 == 0
    Pattern0 = 0,
    /// r % 2 == 0
    Pattern1 = 1,
    /// c % 3 == 0
    Pattern2 = 2,
    /// (r + c) % 3 == 0
    Pattern3 = 3,
    /// (r/2 + c/3) % 2 == 0
    Pattern4 = 4,
    /// (r*c)%2 + (r*c)%3 == 0
    Pattern5 = 5,
    /// ((r*c)%2 + (r*c)%3) % 2 == 0
    Pattern6 = 6,
    /// ((r+c)%2 + (r*c)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in index order, for auto-selection sweeps
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Pattern index in [0, 7]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Check if the data module at (row, col) should be inverted
    pub fn is_masked(&self, r: usize, c: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (r + c) % 2 == 0,
            MaskPattern::Pattern1 => r % 2 == 0,
            MaskPattern::Pattern2 => c % 3 == 0,
            MaskPattern::Pattern3 => (r + c) % 3 == 0,
            MaskPattern::Pattern4 => (r / 2 + c / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((r * c) % 2 + (r * c) % 3) == 0,
            MaskPattern::Pattern6 => ((r * c) % 2 + (r * c) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((r + c) % 2 + (r * c) % 3) % 2 == 0,
        }
    }
}

/// Data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Digits 0-9, packed 3 per 10 bits
    Numeric,
    /// The 45-character alphanumeric set, packed 2 per 11 bits
    Alphanumeric,
    /// Arbitrary bytes, 8 bits each
    Byte,
}

impl EncodingMode {
    /// 4-bit mode indicator placed before the character count field
    pub fn indicator(&self) -> u32 {
        match self {
            EncodingMode::Numeric => 0b0001,
            EncodingMode::Alphanumeric => 0b0010,
            EncodingMode::Byte => 0b0100,
        }
    }

    /// Width of the character count field for this mode and version
    pub fn char_count_bits(&self, version: Version) -> usize {
        let bucket = match version.value() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            EncodingMode::Numeric => [10, 12, 14][bucket],
            EncodingMode::Alphanumeric => [9, 11, 13][bucket],
            EncodingMode::Byte => [8, 16, 16][bucket],
        }
    }

    /// Parse the CLI token. `kanji` is recognised but unsupported.
    pub fn from_name(name: &str) -> Result<Self, EncodeError> {
        match name {
            "num" => Ok(EncodingMode::Numeric),
            "alnum" => Ok(EncodingMode::Alphanumeric),
            "bytes" => Ok(EncodingMode::Byte),
            "kanji" => Err(EncodeError::InvalidArgument(
                "kanji encoding is not supported".into(),
            )),
            other => Err(EncodeError::InvalidArgument(format!(
                "unknown encoding type: {} (expected num, alnum, bytes or kanji)",
                other
            ))),
        }
    }

    /// The CLI token for this mode
    pub fn name(&self) -> &'static str {
        match self {
            EncodingMode::Numeric => "num",
            EncodingMode::Alphanumeric => "alnum",
            EncodingMode::Byte => "bytes",
        }
    }
}

impl std::fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
