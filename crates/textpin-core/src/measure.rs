//! Text measurement seam.
//!
//! Rendered width depends on the host's font metrics, so measurement is
//! injected: hosts wrap their platform provider (canvas-2d `measureText`,
//! CoreText, ...) behind `TextMeasure`. Measurement is synchronous and
//! width-only.

/// Font family used for all items.
pub const FONT_FAMILY: &str = "Arial";

/// Synchronous width measurement for a single line of styled text.
pub trait TextMeasure {
    /// Width in pixels of `text` at the given weight, size, and family.
    fn measure(&self, text: &str, weight: u16, size_px: f32, family: &str) -> f32;
}

/// Width heuristic: a fixed advance per character as a fraction of the
/// font size. Suitable for tests and headless hosts without a real
/// metrics provider.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasure {
    /// Advance per character in em.
    pub advance_em: f32,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, text: &str, _weight: u16, size_px: f32, _family: &str) -> f32 {
        text.chars().count() as f32 * size_px * self.advance_em
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_scales_with_length_and_size() {
        let m = FixedAdvanceMeasure::default();
        let w = m.measure("Hello", 400, 16.0, FONT_FAMILY);
        assert_eq!(w, 5.0 * 16.0 * 0.6);
        assert!(m.measure("Hello!", 400, 16.0, FONT_FAMILY) > w);
        assert!(m.measure("Hello", 400, 32.0, FONT_FAMILY) > w);
    }
}
