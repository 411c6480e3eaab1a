//! Output format selection.
//!
//! The identifier → (bit depth, level count, container) table is a closed
//! enum so the container encoders match exhaustively; adding a format is a
//! compile-time-checked extension point rather than string dispatch.

use crate::error::ValidationError;
use crate::pack::RowAlignment;

/// Target container family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Tiff,
    Bmp,
}

/// Supported output formats.
///
/// | identifier | bits/pixel | levels | container |
/// |------------|-----------|--------|-----------|
/// | `tiff1b`   | 1         | 2      | TIFF      |
/// | `bmp2b`    | 2         | 4      | BMP       |
/// | `bmp4b`    | 4         | 16     | BMP       |
/// | `bmp8b`    | 8         | 256    | BMP       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tiff1Bit,
    Bmp2Bit,
    Bmp4Bit,
    Bmp8Bit,
}

impl OutputFormat {
    /// Parse a format identifier (`"tiff1b"`, `"bmp2b"`, `"bmp4b"`, `"bmp8b"`).
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        match token {
            "tiff1b" => Ok(Self::Tiff1Bit),
            "bmp2b" => Ok(Self::Bmp2Bit),
            "bmp4b" => Ok(Self::Bmp4Bit),
            "bmp8b" => Ok(Self::Bmp8Bit),
            _ => Err(ValidationError::UnknownFormat {
                token: token.to_string(),
            }),
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Tiff1Bit => "tiff1b",
            Self::Bmp2Bit => "bmp2b",
            Self::Bmp4Bit => "bmp4b",
            Self::Bmp8Bit => "bmp8b",
        }
    }

    pub fn bits_per_pixel(&self) -> u8 {
        match self {
            Self::Tiff1Bit => 1,
            Self::Bmp2Bit => 2,
            Self::Bmp4Bit => 4,
            Self::Bmp8Bit => 8,
        }
    }

    /// Quantization level count: exactly the bit depth's capacity.
    pub fn levels(&self) -> u16 {
        1u16 << self.bits_per_pixel()
    }

    pub fn container(&self) -> Container {
        match self {
            Self::Tiff1Bit => Container::Tiff,
            Self::Bmp2Bit | Self::Bmp4Bit | Self::Bmp8Bit => Container::Bmp,
        }
    }

    /// Row stride convention of the target container.
    pub fn row_alignment(&self) -> RowAlignment {
        match self.container() {
            Container::Tiff => RowAlignment::Byte,
            Container::Bmp => RowAlignment::Dword,
        }
    }

    /// Filename extension for the encoded container.
    pub fn extension(&self) -> &'static str {
        match self.container() {
            Container::Tiff => "tif",
            Container::Bmp => "bmp",
        }
    }
}
