//! Color string formats.

use std::fmt;

/// A string format a [`CanonicalColor`](crate::CanonicalColor) can be rendered in.
///
/// Variants are declared in key order, so a `BTreeMap<ColorFormat, _>`
/// iterates as `hex, hex3, hex4, hex8, hsl, keyword, rgb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex,
    /// `#rgb`
    Hex3,
    /// `#rgba`
    Hex4,
    /// `#rrggbbaa`
    Hex8,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`
    Hsl,
    /// A CSS color keyword such as `red`.
    Keyword,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`
    Rgb,
}

impl ColorFormat {
    /// Order used when listing formats to a user.
    pub const DISPLAY_ORDER: [ColorFormat; 7] = [
        ColorFormat::Hex,
        ColorFormat::Hex3,
        ColorFormat::Hex8,
        ColorFormat::Hex4,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Keyword,
    ];

    /// The short key for this format (`hex3`, `rgb`, ...).
    pub fn key(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Hex3 => "hex3",
            ColorFormat::Hex4 => "hex4",
            ColorFormat::Hex8 => "hex8",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Keyword => "keyword",
            ColorFormat::Rgb => "rgb",
        }
    }

    /// Human readable label, falling back to the key.
    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Hex3 => "hex (short)",
            ColorFormat::Hex4 => "rrggbbaa (short)",
            ColorFormat::Hex8 => "rrggbbaa",
            ColorFormat::Rgb => "rgb(a)",
            ColorFormat::Hsl => "hsl(a)",
            other => other.key(),
        }
    }

    /// Parses a format key as returned by [`ColorFormat::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::DISPLAY_ORDER.into_iter().find(|f| f.key() == key)
    }

    /// True for the four hex forms.
    pub fn is_hex(self) -> bool {
        matches!(
            self,
            ColorFormat::Hex | ColorFormat::Hex3 | ColorFormat::Hex4 | ColorFormat::Hex8
        )
    }

    /// True for the hex forms that carry an alpha digit pair.
    pub fn is_alpha_hex(self) -> bool {
        matches!(self, ColorFormat::Hex4 | ColorFormat::Hex8)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
