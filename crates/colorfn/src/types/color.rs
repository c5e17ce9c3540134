//! RGBA color type with parsing, conversion and rendering.
//!
//! This module provides the [`RgbaColor`] type, the numeric core shared by
//! every other part of the crate. Colors can be read from:
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, with or without the `#`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)` (four arguments also accepted by `rgb`)
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **Named**: CSS keywords like `red`, `aliceblue`, `rebeccapurple`
//!
//! Channels are kept as unrounded `f64` values. A color read from `hsl()`
//! keeps the exact RGB the HSL triple maps to, and rounding only happens when
//! a string is rendered.
//!
//! ```
//! use colorfn::types::RgbaColor;
//!
//! let purple = RgbaColor::parse("#b577f2").unwrap();
//! assert_eq!(purple.to_rgb_string(), "rgb(181, 119, 242)");
//! assert_eq!(purple.to_hsl_string(), "hsl(270, 83%, 71%)");
//! ```

use crate::error::{ColorError, Result};
use crate::types::format::ColorFormat;
use crate::types::named;

/// An RGBA color.
///
/// `r`, `g` and `b` are in `0.0..=255.0`, `a` is in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaColor {
    /// Red component (0-255).
    pub r: f64,
    /// Green component (0-255).
    pub g: f64,
    /// Blue component (0-255).
    pub b: f64,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f64,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::black()
    }
}

impl RgbaColor {
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Builds a color from float channels, clamping each into range.
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 255.0),
            g: g.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Channels rounded to the nearest integer.
    pub fn rounded(&self) -> (u8, u8, u8) {
        (round_channel(self.r), round_channel(self.g), round_channel(self.b))
    }

    /// Calculates the relative luminance of this color.
    ///
    /// Uses the sRGB luminance formula (ITU-R BT.709).
    /// Returns a value between 0.0 (black) and 1.0 (white).
    pub fn luminance(&self) -> f64 {
        let r = Self::srgb_to_linear(self.r / 255.0);
        let g = Self::srgb_to_linear(self.g / 255.0);
        let b = Self::srgb_to_linear(self.b / 255.0);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    fn srgb_to_linear(c: f64) -> f64 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`.
    pub fn contrast_ratio(&self, other: &RgbaColor) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        if l1 > l2 {
            (l1 + 0.05) / (l2 + 0.05)
        } else {
            (l2 + 0.05) / (l1 + 0.05)
        }
    }

    /// Linear mix toward `other`; `weight` is the share of `other` (0.0..=1.0).
    /// Alpha is mixed the same way.
    pub fn mix(&self, other: &RgbaColor, weight: f64) -> Self {
        let w = weight.clamp(0.0, 1.0);
        Self::from_channels(
            self.r + (other.r - self.r) * w,
            self.g + (other.g - self.g) * w,
            self.b + (other.b - self.b) * w,
            self.a + (other.a - self.a) * w,
        )
    }

    /// Parse a color string in any supported format.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_format(input).map(|(color, _)| color)
    }

    /// Parse a color string, also reporting which format it was written in.
    pub fn parse_with_format(input: &str) -> Result<(Self, ColorFormat)> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorError::InvalidColor("empty color string".to_string()));
        }

        let lower = input.to_lowercase();

        if let Some((r, g, b)) = named::lookup(&lower) {
            return Ok((Self::rgb(r, g, b), ColorFormat::Keyword));
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        // Bare hex digits are accepted, as in query strings
        if matches!(lower.len(), 3 | 4 | 6 | 8) && lower.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::parse_hex(&lower);
        }

        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower).map(|c| (c, ColorFormat::Rgb));
        }

        if lower.starts_with("hsl") {
            return Self::parse_hsl_func(&lower).map(|c| (c, ColorFormat::Hsl));
        }

        Err(ColorError::InvalidColor(format!("unknown color: {}", input)))
    }

    fn parse_hex(hex: &str) -> Result<(Self, ColorFormat)> {
        let chars: Vec<char> = hex.chars().collect();

        match chars.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                Ok((Self::rgb(r, g, b), ColorFormat::Hex3))
            }
            4 => {
                // #RGBA -> #RRGGBBAA
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                let a = Self::parse_hex_digit(chars[3])? * 17;
                Ok((Self::rgba(r, g, b, a as f64 / 255.0), ColorFormat::Hex4))
            }
            6 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                Ok((Self::rgb(r, g, b), ColorFormat::Hex))
            }
            8 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                let a = Self::parse_hex_pair(chars[6], chars[7])?;
                Ok((Self::rgba(r, g, b, a as f64 / 255.0), ColorFormat::Hex8))
            }
            n => Err(ColorError::InvalidColor(format!(
                "invalid hex color length: {}",
                n
            ))),
        }
    }

    fn parse_hex_digit(c: char) -> Result<u8> {
        c.to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| ColorError::InvalidColor(format!("invalid hex digit: {}", c)))
    }

    fn parse_hex_pair(c1: char, c2: char) -> Result<u8> {
        let high = Self::parse_hex_digit(c1)?;
        let low = Self::parse_hex_digit(c2)?;
        Ok(high * 16 + low)
    }

    /// Splits `name(a, b, c)` into its comma separated arguments, checking
    /// that `name` is one of `names`.
    fn function_args<'a>(input: &'a str, names: &[&str]) -> Result<Vec<&'a str>> {
        let start = input.find('(').ok_or_else(|| {
            ColorError::InvalidColor(format!("missing '(' in {}", input))
        })?;
        let name = input[..start].trim();
        if !names.contains(&name) {
            return Err(ColorError::InvalidColor(format!(
                "unknown color function: {}",
                name
            )));
        }
        let content = input[start + 1..].strip_suffix(')').ok_or_else(|| {
            ColorError::InvalidColor(format!("missing ')' in {}", input))
        })?;
        Ok(content.split(',').map(|s| s.trim()).collect())
    }

    fn parse_rgb_func(input: &str) -> Result<Self> {
        let parts = Self::function_args(input, &["rgb", "rgba"])?;

        if parts.len() < 3 || parts.len() > 4 {
            return Err(ColorError::InvalidColor(
                "rgb requires 3 or 4 components".to_string(),
            ));
        }

        let r = Self::parse_channel(parts[0])?;
        let g = Self::parse_channel(parts[1])?;
        let b = Self::parse_channel(parts[2])?;

        let a = if parts.len() == 4 {
            Self::parse_alpha(parts[3])?
        } else {
            1.0
        };

        Ok(Self::from_channels(r, g, b, a))
    }

    fn parse_hsl_func(input: &str) -> Result<Self> {
        let parts = Self::function_args(input, &["hsl", "hsla"])?;

        if parts.len() < 3 || parts.len() > 4 {
            return Err(ColorError::InvalidColor(
                "hsl requires 3 or 4 components".to_string(),
            ));
        }

        let h = Self::parse_number(parts[0].trim_end_matches("deg"))?;
        let s = Self::parse_percentage(parts[1])?;
        let l = Self::parse_percentage(parts[2])?;

        let a = if parts.len() == 4 {
            Self::parse_alpha(parts[3])?
        } else {
            1.0
        };

        Ok(Self::from_hsl(h, s, l, a))
    }

    fn parse_number(s: &str) -> Result<f64> {
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ColorError::InvalidColor(format!("invalid number: {}", s))),
        }
    }

    /// An rgb channel: a number (clamped to 0-255) or a percentage of 255.
    fn parse_channel(s: &str) -> Result<f64> {
        match s.strip_suffix('%') {
            Some(pct) => Ok((Self::parse_number(pct)? / 100.0 * 255.0).clamp(0.0, 255.0)),
            None => Ok(Self::parse_number(s)?.clamp(0.0, 255.0)),
        }
    }

    fn parse_alpha(s: &str) -> Result<f64> {
        match s.strip_suffix('%') {
            Some(pct) => Ok((Self::parse_number(pct)? / 100.0).clamp(0.0, 1.0)),
            None => Ok(Self::parse_number(s)?.clamp(0.0, 1.0)),
        }
    }

    /// A percentage with an optional `%`, returned as a 0-1 fraction.
    fn parse_percentage(s: &str) -> Result<f64> {
        let val = Self::parse_number(s.trim_end_matches('%'))?;
        Ok((val / 100.0).clamp(0.0, 1.0))
    }

    /// Converts to HSL: hue in degrees, saturation and lightness as 0-1 fractions.
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let mut h;
        let s;
        let l = (max + min) / 2.0;

        if max == min {
            h = 0.0;
            s = 0.0;
        } else {
            let d = max - min;
            s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            h = if max == r {
                (g - b) / d + (if g < b { 6.0 } else { 0.0 })
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
        }
        (h * 360.0, s, l)
    }

    /// Creates a color from HSL values (hue in degrees, `s` and `l` as fractions).
    pub fn from_hsl(h: f64, s: f64, l: f64, a: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 {
                l * (1.0 + s)
            } else {
                l + s - l * s
            };
            let p = 2.0 * l - q;
            (
                Self::hue_to_rgb(p, q, h + 1.0 / 3.0),
                Self::hue_to_rgb(p, q, h),
                Self::hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self::from_channels(r * 255.0, g * 255.0, b * 255.0, a)
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    /// Converts to HWB: hue in degrees, whiteness and blackness as 0-1 fractions.
    pub fn to_hwb(&self) -> (f64, f64, f64) {
        let (h, _, _) = self.to_hsl();
        let max = self.r.max(self.g).max(self.b) / 255.0;
        let min = self.r.min(self.g).min(self.b) / 255.0;
        (h, min, 1.0 - max)
    }

    /// Creates a color from HWB values. When whiteness and blackness add up
    /// to more than 1 they are scaled down to a gray.
    pub fn from_hwb(h: f64, w: f64, b: f64, a: f64) -> Self {
        let mut w = w.clamp(0.0, 1.0);
        let mut bl = b.clamp(0.0, 1.0);
        let sum = w + bl;
        if sum >= 1.0 {
            w /= sum;
            bl /= sum;
        }
        let pure = Self::from_hsl(h, 1.0, 0.5, a);
        let scale = 1.0 - w - bl;
        let channel = |c: f64| (c / 255.0 * scale + w) * 255.0;
        Self::from_channels(channel(pure.r), channel(pure.g), channel(pure.b), a)
    }

    /// `#rrggbb`, or `#rgb` when `allow_short` and the color allows it.
    pub fn to_hex_string(&self, allow_short: bool) -> String {
        let (r, g, b) = self.rounded();
        hex_string(&[r, g, b], allow_short)
    }

    /// `#rrggbbaa`, or `#rgba` when `allow_short` and the color allows it.
    pub fn to_hex8_string(&self, allow_short: bool) -> String {
        let (r, g, b) = self.rounded();
        let a = (self.a * 255.0).round() as u8;
        hex_string(&[r, g, b, a], allow_short)
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b) = self.rounded();
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, format_alpha(self.a))
        }
    }

    /// `hsl(h, s%, l%)` when opaque, `hsla(h, s%, l%, a)` otherwise.
    pub fn to_hsl_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        let h = h.round() as i64 % 360;
        let s = (s * 100.0).round() as i64;
        let l = (l * 100.0).round() as i64;
        if self.a >= 1.0 {
            format!("hsl({}, {}%, {}%)", h, s, l)
        } else {
            format!("hsla({}, {}%, {}%, {})", h, s, l, format_alpha(self.a))
        }
    }

    /// The CSS keyword for this color, if it is opaque and has one.
    pub fn to_keyword(&self) -> Option<&'static str> {
        if self.a < 1.0 {
            return None;
        }
        let (r, g, b) = self.rounded();
        named::keyword_for(r, g, b)
    }
}

fn round_channel(c: f64) -> u8 {
    c.round().clamp(0.0, 255.0) as u8
}

/// Alpha rounded to two decimals, printed without trailing zeros.
fn format_alpha(a: f64) -> String {
    format!("{}", (a * 100.0).round() / 100.0)
}

fn hex_string(bytes: &[u8], allow_short: bool) -> String {
    let shortenable = bytes.iter().all(|b| b >> 4 == b & 0x0f);
    let mut out = String::from("#");
    for b in bytes {
        if allow_short && shortenable {
            out.push_str(&format!("{:x}", b & 0x0f));
        } else {
            out.push_str(&format!("{:02x}", b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rgb(input: &str) -> (u8, u8, u8) {
        RgbaColor::parse(input).unwrap().rounded()
    }

    // ==================== HEX FORMAT TESTS ====================

    #[test]
    fn test_hex_3_digit() {
        assert_eq!(parse_rgb("#f00"), (255, 0, 0));
        assert_eq!(parse_rgb("#0f0"), (0, 255, 0));
        assert_eq!(parse_rgb("#abc"), (0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_hex_4_digit() {
        let color = RgbaColor::parse("#f008").unwrap();
        assert_eq!(color, RgbaColor::rgba(255, 0, 0, 0x88 as f64 / 255.0));

        let color = RgbaColor::parse("#0000").unwrap();
        assert_eq!(color.a, 0.0);
    }

    #[test]
    fn test_hex_6_and_8_digit() {
        assert_eq!(
            RgbaColor::parse("#9932CC").unwrap(),
            RgbaColor::rgb(0x99, 0x32, 0xCC)
        );
        assert_eq!(
            RgbaColor::parse("#ff000080").unwrap(),
            RgbaColor::rgba(255, 0, 0, 0x80 as f64 / 255.0)
        );
    }

    #[test]
    fn test_hex_without_hash() {
        let (color, format) = RgbaColor::parse_with_format("8421e6").unwrap();
        assert_eq!(color, RgbaColor::rgb(0x84, 0x21, 0xe6));
        assert_eq!(format, ColorFormat::Hex);

        let (_, format) = RgbaColor::parse_with_format("f00b").unwrap();
        assert_eq!(format, ColorFormat::Hex4);
    }

    #[test]
    fn test_bare_hex_words() {
        let (_, format) = RgbaColor::parse_with_format("tan").unwrap();
        assert_eq!(format, ColorFormat::Keyword);
        let (color, format) = RgbaColor::parse_with_format("bad").unwrap();
        assert_eq!(format, ColorFormat::Hex3);
        assert_eq!(color.rounded(), (0xbb, 0xaa, 0xdd));
    }

    // ==================== RGB FORMAT TESTS ====================

    #[test]
    fn test_rgb_basic() {
        assert_eq!(parse_rgb("rgb(255, 128, 64)"), (255, 128, 64));
        assert_eq!(parse_rgb("rgb(255,128,64)"), (255, 128, 64));
    }

    #[test]
    fn test_rgb_with_alpha() {
        let color = RgbaColor::parse("rgb(181, 119, 242, 0.6)").unwrap();
        assert_eq!(color.a, 0.6);
        let color = RgbaColor::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(color, RgbaColor::rgba(255, 0, 0, 0.5));
    }

    #[test]
    fn test_rgb_clamps_out_of_range() {
        assert_eq!(parse_rgb("rgba(300, 100, 70, 0.9)"), (255, 100, 70));
        assert_eq!(parse_rgb("rgb(-1, 0, 0)"), (0, 0, 0));
    }

    #[test]
    fn test_rgb_percentages() {
        assert_eq!(parse_rgb("rgb(100%, 0%, 50%)"), (255, 0, 128));
    }

    // ==================== HSL FORMAT TESTS ====================

    #[test]
    fn test_hsl_basic() {
        assert_eq!(parse_rgb("hsl(0, 100%, 50%)"), (255, 0, 0));
        assert_eq!(parse_rgb("hsl(120, 100%, 50%)"), (0, 255, 0));
        assert_eq!(parse_rgb("hsl(360, 100%, 50%)"), (255, 0, 0));
    }

    #[test]
    fn test_hsl_keeps_unrounded_channels() {
        let color = RgbaColor::parse("hsl(270, 82%, 70%)").unwrap();
        assert!((color.r - 178.5).abs() < 1e-9);
        assert_eq!(color.r.trunc(), 178.0);
    }

    #[test]
    fn test_hsla_with_alpha() {
        let color = RgbaColor::parse("hsla(0, 100%, 50%, 0.5)").unwrap();
        assert_eq!(color.rounded(), (255, 0, 0));
        assert!((color.a - 0.5).abs() < 0.01);
    }

    // ==================== NAMED COLORS TESTS ====================

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_rgb("red"), (255, 0, 0));
        assert_eq!(parse_rgb("Crimson"), (220, 20, 60));
        assert_eq!(parse_rgb("rebeccapurple"), (102, 51, 153));
    }

    // ==================== CONVERSIONS ====================

    #[test]
    fn test_hsl_roundtrip() {
        let original = RgbaColor::rgb(100, 150, 200);
        let (h, s, l) = original.to_hsl();
        let roundtrip = RgbaColor::from_hsl(h, s, l, 1.0);
        assert_eq!(original.rounded(), roundtrip.rounded());
    }

    #[test]
    fn test_hwb_roundtrip() {
        let original = RgbaColor::rgb(181, 119, 242);
        let (h, w, b) = original.to_hwb();
        assert!((w - 119.0 / 255.0).abs() < 1e-9);
        assert!((b - 13.0 / 255.0).abs() < 1e-9);
        assert_eq!(RgbaColor::from_hwb(h, w, b, 1.0).rounded(), (181, 119, 242));
    }

    #[test]
    fn test_hwb_gray_when_saturated() {
        let gray = RgbaColor::from_hwb(120.0, 0.6, 0.6, 1.0);
        assert_eq!(gray.rounded(), (128, 128, 128));
    }

    #[test]
    fn test_contrast_ratio_limits() {
        let ratio = RgbaColor::white().contrast_ratio(&RgbaColor::black());
        assert!((ratio - 21.0).abs() < 0.01);
        assert_eq!(RgbaColor::white().contrast_ratio(&RgbaColor::white()), 1.0);
    }

    // ==================== RENDERING ====================

    #[test]
    fn test_rendering() {
        let color = RgbaColor::parse("#ff0000").unwrap();
        assert_eq!(color.to_hex_string(true), "#f00");
        assert_eq!(color.to_hex_string(false), "#ff0000");
        assert_eq!(color.to_hex8_string(true), "#f00f");
        assert_eq!(color.to_hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(color.to_keyword(), Some("red"));

        let translucent = RgbaColor::rgba(181, 119, 242, 0.6);
        assert_eq!(translucent.to_rgb_string(), "rgba(181, 119, 242, 0.6)");
        assert_eq!(translucent.to_hex8_string(false), "#b577f299");
        assert_eq!(translucent.to_keyword(), None);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_invalid_input() {
        assert!(RgbaColor::parse("#gg0000").is_err());
        assert!(RgbaColor::parse("#ff00000").is_err());
        assert!(RgbaColor::parse("rgb(255, 0)").is_err());
        assert!(RgbaColor::parse("rgb(255, 0, 0").is_err());
        assert!(RgbaColor::parse("rgbx(1, 2, 3)").is_err());
        assert!(RgbaColor::parse("hsl(a, b, c)").is_err());
        assert!(RgbaColor::parse("notacolor").is_err());
        assert!(RgbaColor::parse("   ").is_err());
    }
}
