//! Resolution token parsing.
//!
//! A resolution token is either a single positive integer (`"600"`,
//! symmetric density) or two positive integers separated by `x`
//! (`"1200x600"`, horizontal then vertical). The parsed density travels
//! with the image into the container's resolution metadata.

use crate::error::ValidationError;

/// Sample density in pixels per inch, horizontal and vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionSpec {
    pub horizontal: u32,
    pub vertical: u32,
}

impl ResolutionSpec {
    /// Symmetric density.
    pub fn symmetric(dpi: u32) -> Self {
        Self {
            horizontal: dpi,
            vertical: dpi,
        }
    }

    /// Parse a resolution token. Pure parse+validate, no I/O.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        let trimmed = token.trim();
        match trimmed.split_once(['x', 'X']) {
            Some((h, v)) => Ok(Self {
                horizontal: parse_component(h, token)?,
                vertical: parse_component(v, token)?,
            }),
            None => parse_component(trimmed, token).map(Self::symmetric),
        }
    }
}

fn parse_component(raw: &str, token: &str) -> Result<u32, ValidationError> {
    let value: u32 =
        raw.trim()
            .parse()
            .map_err(|_| ValidationError::MalformedResolution {
                token: token.to_string(),
            })?;
    if value == 0 {
        return Err(ValidationError::ZeroResolution {
            token: token.to_string(),
        });
    }
    Ok(value)
}
