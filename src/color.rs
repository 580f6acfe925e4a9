//! Color token parsing for heatmap fills, strokes, and grid lines.
//!
//! Color lookups and the configuration speak in CSS-like tokens; the view model
//! carries resolved RGBA so drawing backends never parse strings.

use serde::{Deserialize, Serialize};

/// RGBA color with u8 channels and a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse a color token.
    ///
    /// Supports formats:
    /// - "#RRGGBB" (hex without alpha)
    /// - "#AARRGGBB" (alpha first)
    /// - "RRGGBB" (hex without # prefix)
    /// - "rgb(r, g, b)"
    /// - "rgba(r, g, b, a)"
    /// - "transparent"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("transparent") {
            Some(Self::TRANSPARENT)
        } else if s.starts_with('#') {
            parse_hex(s)
        } else if s.starts_with("rgba(") {
            parse_rgba_string(s)
        } else if s.starts_with("rgb(") {
            parse_rgb_string(s)
        } else {
            parse_hex(&format!("#{s}"))
        }
    }

    /// Convert to a CSS color string usable by Canvas 2D.
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

fn hex_byte(hex: &str, at: usize) -> Option<u8> {
    u8::from_str_radix(hex.get(at..at + 2)?, 16).ok()
}

fn parse_hex(s: &str) -> Option<Rgba> {
    let hex = s.strip_prefix('#')?;

    match hex.len() {
        6 => Some(Rgba::opaque(
            hex_byte(hex, 0)?,
            hex_byte(hex, 2)?,
            hex_byte(hex, 4)?,
        )),
        8 => {
            let a = hex_byte(hex, 0)?;
            Some(Rgba::new(
                hex_byte(hex, 2)?,
                hex_byte(hex, 4)?,
                hex_byte(hex, 6)?,
                f64::from(a) / 255.0,
            ))
        }
        _ => None,
    }
}

fn parse_rgb_string(s: &str) -> Option<Rgba> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgba::opaque(r, g, b))
}

fn parse_rgba_string(s: &str) -> Option<Rgba> {
    let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    let a: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgba::new(r, g, b, a.clamp(0.0, 1.0)))
}

/// Default colors used by the heatmap theme (CSS format)
pub mod palette {
    pub const TRANSPARENT: &str = "transparent";

    /// Grid line color (light gray-blue)
    pub const GRID_LINE: &str = "#D3DAE6";

    /// Axis label text color
    pub const LABEL_TEXT: &str = "#343741";

    /// Brush area fill
    pub const BRUSH_AREA_FILL: &str = "rgba(0, 0, 0, 0)";

    /// Brush area stroke
    pub const BRUSH_AREA_STROKE: &str = "#69707D";

    /// Mask drawn over cells outside the brushed area
    pub const BRUSH_MASK_FILL: &str = "rgba(115, 115, 115, 0.2)";
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(Rgba::parse("#FF8040"), Some(Rgba::opaque(255, 128, 64)));
    }

    #[test]
    fn test_parse_hex_8_alpha_first() {
        let color = Rgba::parse("#80FF0000").unwrap();
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(
            Rgba::parse("rgb(255, 128, 64)"),
            Some(Rgba::opaque(255, 128, 64))
        );
        assert_eq!(
            Rgba::parse("rgba(255, 128, 64, 0.5)"),
            Some(Rgba::new(255, 128, 64, 0.5))
        );
    }

    #[test]
    fn test_parse_without_hash_and_keywords() {
        assert_eq!(Rgba::parse("FF0000"), Some(Rgba::opaque(255, 0, 0)));
        assert_eq!(Rgba::parse("Transparent"), Some(Rgba::TRANSPARENT));
        assert_eq!(Rgba::parse("not-a-color"), None);
        assert_eq!(Rgba::parse("rgb(1, 2)"), None);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgba::opaque(255, 0, 16).to_css(), "#FF0010");
        assert_eq!(Rgba::new(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.50)");
    }

    #[test]
    fn palette_tokens_parse() {
        for token in [
            palette::TRANSPARENT,
            palette::GRID_LINE,
            palette::LABEL_TEXT,
            palette::BRUSH_AREA_FILL,
            palette::BRUSH_AREA_STROKE,
            palette::BRUSH_MASK_FILL,
        ] {
            assert!(Rgba::parse(token).is_some(), "{token}");
        }
    }
}
