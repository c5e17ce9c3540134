//! Integer channel values derived from a color string.

use crate::error::Result;
use crate::types::{ColorFormat, RgbaColor};

/// Float noise allowance applied before truncating, so `0.7 * 100` reads as 70.
const TRUNCATE_EPSILON: f64 = 1e-9;

/// The numeric properties of a color, each truncated to an integer.
///
/// Ranges: `alpha`, `saturation`, `lightness`, `whiteness`, `blackness` are
/// 0-100, `hue` is 0-360 and `red`, `green`, `blue` are 0-255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorProperties {
    pub alpha: i32,
    pub hue: i32,
    pub saturation: i32,
    pub lightness: i32,
    pub whiteness: i32,
    pub blackness: i32,
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl ColorProperties {
    /// Extracts the properties of any supported color string.
    ///
    /// For `hsl()`/`hsla()` input the hue, saturation and lightness are read
    /// straight from the string instead of going through RGB, so they come
    /// back exactly as typed.
    ///
    /// ```
    /// use colorfn::ColorProperties;
    ///
    /// let props = ColorProperties::extract("hsla(270, 82%, 54%, 0.45)").unwrap();
    /// assert_eq!((props.alpha, props.hue, props.saturation), (45, 270, 82));
    /// ```
    pub fn extract(color_str: &str) -> Result<Self> {
        let (color, format) = RgbaColor::parse_with_format(color_str)?;

        let (hue, saturation, lightness) = match format {
            ColorFormat::Hsl => match hsl_tokens(color_str) {
                Some(tokens) => tokens,
                None => hsl_from_rgb(&color),
            },
            _ => hsl_from_rgb(&color),
        };

        // HWB is taken from the rounded rgb rendering, never from the raw hex
        let (rr, rg, rb) = color.rounded();
        let (_, whiteness, blackness) = RgbaColor::rgb(rr, rg, rb).to_hwb();

        Ok(Self {
            alpha: (color.a * 100.0).round() as i32,
            hue,
            saturation,
            lightness,
            whiteness: truncate(whiteness * 100.0),
            blackness: truncate(blackness * 100.0),
            red: truncate(color.r),
            green: truncate(color.g),
            blue: truncate(color.b),
        })
    }

    /// Looks a property up by its adjuster name.
    pub fn get(&self, name: &str) -> Option<i32> {
        match name {
            "alpha" => Some(self.alpha),
            "hue" => Some(self.hue),
            "saturation" => Some(self.saturation),
            "lightness" => Some(self.lightness),
            "whiteness" => Some(self.whiteness),
            "blackness" => Some(self.blackness),
            "red" => Some(self.red),
            "green" => Some(self.green),
            "blue" => Some(self.blue),
            _ => None,
        }
    }
}

fn truncate(value: f64) -> i32 {
    (value + TRUNCATE_EPSILON).trunc() as i32
}

fn hsl_from_rgb(color: &RgbaColor) -> (i32, i32, i32) {
    let (h, s, l) = color.to_hsl();
    (truncate(h), truncate(s * 100.0), truncate(l * 100.0))
}

/// Reads `h`, `s` and `l` out of an `hsl(...)`/`hsla(...)` string as integers.
///
/// The prefix, the closing paren, whitespace and `%` are stripped, the rest is
/// split on `,` and the leading integer of the first three tokens is taken.
pub fn hsl_tokens(input: &str) -> Option<(i32, i32, i32)> {
    let lower = input.trim().to_lowercase();
    let body = lower
        .strip_prefix("hsla(")
        .or_else(|| lower.strip_prefix("hsl("))?;
    let body = body.strip_suffix(')').unwrap_or(body);
    let cleaned: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%')
        .collect();

    let mut values = cleaned.split(',').filter_map(leading_int);
    Some((values.next()?, values.next()?, values.next()?))
}

/// Parses the leading integer of a token (`"82.5"` is 82, `"270deg"` is 270).
pub(crate) fn leading_int(token: &str) -> Option<i32> {
    let token = token.trim();
    let (sign, digits) = match token.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, token.strip_prefix('+').unwrap_or(token)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i32>().ok().map(|v| sign * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_purple() -> ColorProperties {
        ColorProperties {
            alpha: 100,
            hue: 270,
            lightness: 70,
            saturation: 82,
            blackness: 5,
            whiteness: 46,
            red: 181,
            green: 119,
            blue: 242,
        }
    }

    #[test]
    fn test_hex_properties() {
        assert_eq!(ColorProperties::extract("#b577f2").unwrap(), expected_purple());
    }

    #[test]
    fn test_rgb_properties() {
        assert_eq!(
            ColorProperties::extract("rgb(181, 119, 242)").unwrap(),
            expected_purple()
        );
    }

    #[test]
    fn test_rgba_properties() {
        let props = ColorProperties::extract("rgba(181, 119, 242, 0.6)").unwrap();
        assert_eq!(
            props,
            ColorProperties {
                alpha: 60,
                ..expected_purple()
            }
        );
    }

    #[test]
    fn test_hsl_properties() {
        let expected = ColorProperties {
            alpha: 100,
            hue: 270,
            lightness: 70,
            saturation: 82,
            blackness: 5,
            whiteness: 45,
            red: 178,
            green: 115,
            blue: 241,
        };
        assert_eq!(ColorProperties::extract("hsl(270, 82%, 70%)").unwrap(), expected);
        assert_eq!(
            ColorProperties::extract("hsla(270, 82%, 70%, 0.45)").unwrap(),
            ColorProperties {
                alpha: 45,
                ..expected
            }
        );
    }

    #[test]
    fn test_hsl_values_never_drift() {
        let props = ColorProperties::extract("hsl(100, 19%, 20%)").unwrap();
        assert_eq!(
            props,
            ColorProperties {
                alpha: 100,
                hue: 100,
                lightness: 20,
                saturation: 19,
                blackness: 76,
                whiteness: 16,
                red: 47,
                green: 60,
                blue: 41,
            }
        );

        let props = ColorProperties::extract("hsl(110, 21%, 20%)").unwrap();
        assert_eq!(
            props,
            ColorProperties {
                alpha: 100,
                hue: 110,
                lightness: 20,
                saturation: 21,
                blackness: 75,
                whiteness: 15,
                red: 43,
                green: 61,
                blue: 40,
            }
        );
    }

    #[test]
    fn test_hsl_tokens() {
        assert_eq!(hsl_tokens("hsl(270, 82%, 70%)"), Some((270, 82, 70)));
        assert_eq!(hsl_tokens("hsla(301, 81%, 54%, 0.45)"), Some((301, 81, 54)));
        assert_eq!(hsl_tokens("rgb(1, 2, 3)"), None);
    }

    #[test]
    fn test_get_by_name() {
        let props = expected_purple();
        assert_eq!(props.get("hue"), Some(270));
        assert_eq!(props.get("tint"), None);
    }

    #[test]
    fn test_invalid_color() {
        assert!(ColorProperties::extract("nope").is_err());
    }
}
