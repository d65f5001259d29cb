//! Static font-metric tables for the resume typefaces.
//!
//! Character widths are in em units (relative to font size). Tables are an
//! approximation of the real glyph advances; they are accurate enough to
//! estimate line wrapping and block heights for pagination, within a line or
//! so per page.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Typefaces used by the template renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Modern, Minimal and Professional templates.
    Inter,
    /// Classic template.
    Merriweather,
}

impl FontFamily {
    /// CSS `font-family` value for the rendered HTML.
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter, system-ui, sans-serif",
            FontFamily::Merriweather => "Merriweather, Georgia, serif",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry of one exported page, in CSS pixels at 72 DPI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub page_width_px: f32,
    pub page_height_px: f32,
    /// Padding around the rendered resume on every side.
    pub padding_px: f32,
    /// Font size of body text (`text-sm`).
    pub body_size_px: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl PageConfig {
    pub fn content_width_px(&self) -> f32 {
        (self.page_width_px - 2.0 * self.padding_px).max(0.0)
    }

    /// Usable line width in em units for text set at `font_size_px`.
    pub fn width_em(&self, font_size_px: f32) -> f32 {
        self.content_width_px() / font_size_px
    }

    /// Height of `lines` lines of text set at `font_size_px`.
    pub fn lines_px(&self, lines: u16, font_size_px: f32) -> f32 {
        lines as f32 * font_size_px * self.line_height
    }
}

/// A4 portrait (595 × 842 px) with the renderers' 32 px padding and 14 px body text.
pub fn a4_page_config() -> PageConfig {
    PageConfig {
        page_width_px: 595.0,
        page_height_px: 842.0,
        padding_px: 32.0,
        body_size_px: 14.0,
        line_height: 1.43,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// All widths are in em units at 1em (i.e., at the configured font size).
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Estimates how many printed lines `s` occupies when greedily word-wrapped
    /// at `max_width_em`. Explicit newlines start a new line. Saturates at
    /// `u16::MAX`.
    pub fn estimated_lines(&self, s: &str, max_width_em: f32) -> u16 {
        s.lines()
            .map(|line| self.wrap_words(line.split_whitespace(), max_width_em))
            .fold(0u16, u16::saturating_add)
    }

    /// Lines needed to lay out `items` side by side (chips, inline lists),
    /// `gap_em` apart, wrapping whole items at `max_width_em`.
    pub fn run_lines<'a>(
        &self,
        items: impl IntoIterator<Item = &'a str>,
        gap_em: f32,
        max_width_em: f32,
    ) -> u16 {
        let mut lines = 0u16;
        let mut current = 0.0_f32;
        for item in items {
            let w = self.measure_str(item);
            if lines == 0 {
                lines = 1;
                current = w;
            } else if current + gap_em + w > max_width_em {
                lines = lines.saturating_add(1);
                current = w;
            } else {
                current += gap_em + w;
            }
        }
        lines
    }

    fn wrap_words<'a>(&self, words: impl Iterator<Item = &'a str>, max_width_em: f32) -> u16 {
        let mut line_count = 0u16;
        let mut current_width = 0.0_f32;

        for word in words {
            let word_w = self.measure_str(word);
            if line_count == 0 {
                line_count = 1;
                current_width = word_w;
            } else if current_width + self.space_width + word_w > max_width_em {
                line_count = line_count.saturating_add(1);
                current_width = word_w;
            } else {
                current_width += self.space_width + word_w;
            }
        }
        line_count
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static INTER_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Inter,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

/// Merriweather is a wide text serif, roughly 12% wider than Inter.
static MERRIWEATHER_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Merriweather,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.29, 0.35, 0.44, 0.64, 0.64, 1.01, 0.76, 0.26, 0.38, 0.38, 0.45, 0.67, 0.32, 0.38, 0.32, 0.36,
        // 0     1     2     3     4     5     6     7     8     9
        0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64,
        // :     ;     <     =     >     ?     @
        0.32, 0.32, 0.67, 0.67, 0.67, 0.57, 1.15,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.76, 0.69, 0.69, 0.76, 0.64, 0.57, 0.76, 0.76, 0.29, 0.45, 0.69, 0.60, 0.88,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.76, 0.82, 0.64, 0.82, 0.69, 0.57, 0.64, 0.76, 0.76, 1.01, 0.69, 0.69, 0.64,
        // [     \     ]     ^     _     `
        0.32, 0.36, 0.32, 0.54, 0.64, 0.39,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.64, 0.64, 0.57, 0.64, 0.64, 0.36, 0.64, 0.64, 0.26, 0.26, 0.60, 0.26, 0.94,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.64, 0.64, 0.64, 0.64, 0.38, 0.50, 0.45, 0.64, 0.57, 0.82, 0.57, 0.57, 0.50,
        // {     |     }     ~
        0.38, 0.30, 0.38, 0.67,
    ],
    average_char_width: 0.59,
    space_width: 0.29,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::Merriweather => &MERRIWEATHER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(&FontFamily::Inter);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(&FontFamily::Inter);
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.00).abs() < 1e-3,
            "Rust width should be ~2.00, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(&FontFamily::Merriweather);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_estimated_lines_empty_is_zero() {
        let metrics = get_metrics(&FontFamily::Inter);
        assert_eq!(metrics.estimated_lines("   ", 40.0), 0);
    }

    #[test]
    fn test_estimated_lines_saturates() {
        let metrics = get_metrics(&FontFamily::Inter);
        assert_eq!(metrics.estimated_lines(&"a\n".repeat(70_000), 40.0), u16::MAX);
    }

    #[test]
    fn test_estimated_lines_wraps_long_text() {
        let metrics = get_metrics(&FontFamily::Inter);
        let config = a4_page_config();
        let width = config.width_em(config.body_size_px);
        assert_eq!(metrics.estimated_lines("Rust", width), 1);

        let paragraph = "Led the migration of a monolith to event-driven services. ".repeat(6);
        let lines = metrics.estimated_lines(&paragraph, width);
        assert!(lines >= 4 && lines <= 8, "expected 4-8 lines, got {lines}");
    }

    #[test]
    fn test_estimated_lines_counts_explicit_breaks() {
        let metrics = get_metrics(&FontFamily::Inter);
        assert_eq!(metrics.estimated_lines("one\ntwo\nthree", 40.0), 3);
    }

    #[test]
    fn test_run_lines_wraps_whole_items() {
        let metrics = get_metrics(&FontFamily::Inter);
        assert_eq!(metrics.run_lines(Vec::<&str>::new(), 1.0, 10.0), 0);
        assert_eq!(metrics.run_lines(["Rust", "Go"], 1.0, 10.0), 1);
        // Each "Kubernetes" is ~5.1em; two do not fit in 10em.
        assert_eq!(metrics.run_lines(["Kubernetes", "Kubernetes"], 1.0, 10.0), 2);
    }

    #[test]
    fn test_serif_wider_than_sans() {
        let text = "Senior Software Engineer";
        let serif = get_metrics(&FontFamily::Merriweather).measure_str(text);
        let sans = get_metrics(&FontFamily::Inter).measure_str(text);
        assert!(serif > sans);
    }

    #[test]
    fn test_a4_page_config_sanity() {
        let config = a4_page_config();
        assert_eq!(config.content_width_px(), 531.0);
        assert!((config.width_em(14.0) - 37.93).abs() < 0.01);
        assert!((config.lines_px(2, 14.0) - 40.04).abs() < 0.01);
    }
}
