//! Text measurement seam.
//!
//! Layout only needs label widths to decide how many temporal ticks fit. Hosts
//! with a real canvas can plug in exact measurement; everything else uses the
//! character-width estimate.

/// Measures the rendered width of a label in pixels.
pub trait TextMeasure {
    fn width(&self, text: &str, font_size: f64, font_family: &str) -> f64;
}

/// Estimates width as `chars * font_size * ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasure {
    /// Average glyph advance relative to the font size.
    pub char_width_ratio: f64,
}

impl Default for EstimatedTextMeasure {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
        }
    }
}

impl TextMeasure for EstimatedTextMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn width(&self, text: &str, font_size: f64, _font_family: &str) -> f64 {
        text.chars().count() as f64 * font_size * self.char_width_ratio
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f64, &str) -> f64,
{
    fn width(&self, text: &str, font_size: f64, font_family: &str) -> f64 {
        self(text, font_size, font_family)
    }
}
