//! Canonical colors: a parsed input plus every format that can represent it.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::types::{ColorFormat, RgbaColor};

/// `rebeccapurple` is missing from the reverse keyword table; it is patched
/// in by hex value.
const REBECCA_PURPLE_HEX: &str = "#663399";

/// A color string normalized into every format that represents it losslessly.
///
/// Built once per accepted input and never mutated afterwards. The detected
/// format is always one of the available formats.
///
/// # Examples
///
/// ```
/// use colorfn::{CanonicalColor, ColorFormat};
///
/// let color = CanonicalColor::parse("#f00").unwrap();
/// assert_eq!(color.detected_format(), ColorFormat::Hex3);
/// assert_eq!(color.format(ColorFormat::Keyword), Some("red"));
/// assert_eq!(color.format(ColorFormat::Rgb), Some("rgb(255, 0, 0)"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalColor {
    original_input: String,
    detected_format: ColorFormat,
    color: RgbaColor,
    available_formats: BTreeMap<ColorFormat, String>,
}

impl CanonicalColor {
    /// Parses any supported color string.
    pub fn parse(input: &str) -> Result<Self> {
        let (color, detected_format) = RgbaColor::parse_with_format(input)?;
        let available_formats = available_formats(&color);
        debug_assert!(available_formats.contains_key(&detected_format));

        Ok(Self {
            original_input: input.to_string(),
            detected_format,
            color,
            available_formats,
        })
    }

    /// Returns true when `input` parses as a color.
    pub fn is_valid(input: &str) -> bool {
        RgbaColor::parse(input).is_ok()
    }

    /// The exact string this color was parsed from.
    pub fn original_input(&self) -> &str {
        &self.original_input
    }

    pub fn detected_format(&self) -> ColorFormat {
        self.detected_format
    }

    pub fn color(&self) -> &RgbaColor {
        &self.color
    }

    pub fn alpha(&self) -> f64 {
        self.color.a
    }

    /// Every representable format, keyed by format.
    pub fn available_formats(&self) -> &BTreeMap<ColorFormat, String> {
        &self.available_formats
    }

    /// The rendering in `format`, if the color can be written that way.
    pub fn format(&self, format: ColorFormat) -> Option<&str> {
        self.available_formats.get(&format).map(String::as_str)
    }

    /// The rendering in the format the input was written in.
    pub fn display(&self) -> &str {
        self.format(self.detected_format)
            .unwrap_or(self.original_input.as_str())
    }

    /// The `rgb()`/`rgba()` rendering, which every color has.
    pub fn rgb_string(&self) -> String {
        self.color.to_rgb_string()
    }

    /// Available formats in [`ColorFormat::DISPLAY_ORDER`].
    pub fn available_in_display_order(&self) -> Vec<ColorFormat> {
        ColorFormat::DISPLAY_ORDER
            .into_iter()
            .filter(|f| self.available_formats.contains_key(f))
            .collect()
    }

    /// Formats this color cannot be written in, in [`ColorFormat::DISPLAY_ORDER`].
    pub fn unavailable_in_display_order(&self) -> Vec<ColorFormat> {
        ColorFormat::DISPLAY_ORDER
            .into_iter()
            .filter(|f| !self.available_formats.contains_key(f))
            .collect()
    }
}

fn available_formats(color: &RgbaColor) -> BTreeMap<ColorFormat, String> {
    let opaque = color.a >= 1.0;
    let mut formats = BTreeMap::new();

    if opaque {
        let hex = color.to_hex_string(false);
        let hex3 = color.to_hex_string(true);
        if hex3.len() == 4 {
            formats.insert(ColorFormat::Hex3, hex3);
        }

        let keyword = match color.to_keyword() {
            Some(name) => Some(name.to_string()),
            None if hex == REBECCA_PURPLE_HEX => Some("rebeccapurple".to_string()),
            None => None,
        };
        if let Some(keyword) = keyword {
            formats.insert(ColorFormat::Keyword, keyword);
        }

        formats.insert(ColorFormat::Hex, hex);
    }

    let hex4 = color.to_hex8_string(true);
    if hex4.len() == 5 {
        formats.insert(ColorFormat::Hex4, hex4);
    }
    formats.insert(ColorFormat::Hex8, color.to_hex8_string(false));
    formats.insert(ColorFormat::Hsl, color.to_hsl_string());
    formats.insert(ColorFormat::Rgb, color.to_rgb_string());

    formats
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn keys(input: &str) -> String {
        CanonicalColor::parse(input)
            .unwrap()
            .available_formats()
            .keys()
            .map(|f| f.key())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_format_listings() {
        assert_snapshot!(keys("black"), @"hex hex3 hex4 hex8 hsl keyword rgb");
        assert_snapshot!(keys("rgba(300, 100, 70, 0.9)"), @"hex8 hsl rgb");
        assert_snapshot!(keys("#51a129"), @"hex hex8 hsl rgb");
        assert_snapshot!(keys("hsl(300, 20%, 40%)"), @"hex hex8 hsl rgb");
        assert_snapshot!(keys("hsl(360, 100%, 50%)"), @"hex hex3 hex4 hex8 hsl keyword rgb");
    }

    #[test]
    fn test_rebeccapurple_keyword() {
        let color = CanonicalColor::parse("#663399").unwrap();
        assert_eq!(color.format(ColorFormat::Keyword), Some("rebeccapurple"));

        let color = CanonicalColor::parse("rebeccapurple").unwrap();
        assert_eq!(color.detected_format(), ColorFormat::Keyword);
        assert_eq!(color.display(), "rebeccapurple");

        let color = CanonicalColor::parse("rgba(102, 51, 153, 0.5)").unwrap();
        assert_eq!(color.format(ColorFormat::Keyword), None);
    }

    #[test]
    fn test_alpha_hex_short_form() {
        let color = CanonicalColor::parse("#f008").unwrap();
        assert_eq!(color.detected_format(), ColorFormat::Hex4);
        assert_eq!(color.display(), "#f008");
        assert_eq!(color.format(ColorFormat::Hex), None);
        assert_eq!(color.format(ColorFormat::Hex8), Some("#ff000088"));
    }

    #[test]
    fn test_display_order_partition() {
        let color = CanonicalColor::parse("rgba(181, 119, 242, 0.6)").unwrap();
        assert_eq!(
            color.available_in_display_order(),
            vec![ColorFormat::Hex8, ColorFormat::Rgb, ColorFormat::Hsl]
        );
        assert_eq!(
            color.unavailable_in_display_order(),
            vec![
                ColorFormat::Hex,
                ColorFormat::Hex3,
                ColorFormat::Hex4,
                ColorFormat::Keyword
            ]
        );
    }

    #[test]
    fn test_original_input_kept() {
        let color = CanonicalColor::parse("  RED ").unwrap();
        assert_eq!(color.original_input(), "  RED ");
        assert_eq!(color.display(), "red");
    }
}
