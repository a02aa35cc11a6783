//! Hex color parsing.
//!
//! Hover colors in the content file are plain hex strings (`#1DA1F2`, `#fff`).
//! Social links render them as a translucent `rgba()` so the underline tint
//! stays readable on the page background.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("malformed hex color '{0}': expected 3 or 6 hex digits")]
    Malformed(String),
    #[error("opacity must be a percentage 0-100, got {0}")]
    Opacity(u8),
}

/// An RGB triple parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Parse `#rgb`, `rgb`, `#rrggbb` or `rrggbb`.
///
/// Length and charset are checked before any digit is converted, so malformed
/// input is rejected instead of decaying to black.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::Malformed(hex.to_string()));
    }

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ColorError::Malformed(hex.to_string()))
    };
    Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Convert a hex color to a CSS `rgba()` string with the given opacity percentage.
///
/// ```
/// assert_eq!(folio::color::hex_to_rgba("ef5350", 80).unwrap(), "rgba(239,83,80,0.8)");
/// ```
pub fn hex_to_rgba(hex: &str, opacity: u8) -> Result<String, ColorError> {
    if opacity > 100 {
        return Err(ColorError::Opacity(opacity));
    }
    let Rgb(r, g, b) = parse_hex(hex)?;
    let alpha = f64::from(opacity) / 100.0;
    Ok(format!("rgba({r},{g},{b},{alpha})"))
}
