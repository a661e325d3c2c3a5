//! Layout constants for the resume renderer.
//!
//! Every color, font size and spacing value lives in one `StyleConfig` so
//! there is exactly one place where the document's look is defined.

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Tint {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`. Falls back to black on malformed input; style
    /// constants are compile-time literals, not user data.
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .unwrap_or(0.0)
        };
        Self::new(channel(0), channel(2), channel(4))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Tint,
    pub secondary: Tint,
    pub text: Tint,
    pub light_text: Tint,
    pub line: Tint,
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub name: f32,
    pub title: f32,
    pub section_header: f32,
    pub sub_header: f32,
    pub normal: f32,
    pub small: f32,
}

/// Vertical gaps in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Between a title and its subtitle.
    pub tight: f32,
    /// Between related content (company header and its roles).
    pub normal: f32,
    /// Between sections.
    pub section: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    /// A4, millimetre units.
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub colors: Palette,
    pub sizes: FontSizes,
    pub spacing: Spacing,
    /// Extra left indent for bullet lists.
    pub bullet_indent: f32,
    /// Minimum block height a section body needs before a page break is
    /// forced.
    pub min_section_height: f32,
}

impl StyleConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 24.0,
            colors: Palette {
                primary: Tint::from_hex("#079fc0"),
                secondary: Tint::from_hex("#34495e"),
                text: Tint::from_hex("#333333"),
                light_text: Tint::from_hex("#7f8c8d"),
                line: Tint::from_hex("#bdc3c7"),
            },
            sizes: FontSizes {
                name: 26.0,
                title: 14.0,
                section_header: 14.0,
                sub_header: 11.0,
                normal: 10.0,
                small: 9.0,
            },
            spacing: Spacing {
                tight: 4.0,
                normal: 6.0,
                section: 8.0,
            },
            bullet_indent: 3.0,
            min_section_height: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_parses_channels() {
        let tint = Tint::from_hex("#ff8000");
        assert!((tint.r - 1.0).abs() < 1e-3);
        assert!((tint.g - 0.502).abs() < 1e-2);
        assert!(tint.b.abs() < 1e-3);
    }

    #[test]
    fn test_from_hex_malformed_is_black() {
        assert_eq!(Tint::from_hex("#12"), Tint::new(0.0, 0.0, 0.0));
        assert_eq!(Tint::from_hex("zzzzzz"), Tint::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_default_config_is_a4_with_margins() {
        let style = StyleConfig::default();
        assert_eq!(style.page_width, 210.0);
        assert_eq!(style.page_height, 297.0);
        assert_eq!(style.content_width(), 162.0);
    }
}
