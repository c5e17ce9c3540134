//! Integration tests for color canonicalization.
//!
//! Covers the format availability rules:
//! - Opaque colors always have hex and rgb
//! - Translucent colors never have hex, short hex or a keyword
//! - The detected format is always available
//! - Every rendering parses back to itself

use colorfn::{CanonicalColor, ColorFormat};

const OPAQUE: &[&str] = &[
    "red",
    "RebeccaPurple",
    "#b577f2",
    "#B577F2",
    "8421e6",
    "#f00",
    "#f00f",
    "#ff0000ff",
    "rgb(10, 20, 30)",
    "rgba(10, 20, 30, 1)",
    "hsl(120, 50%, 50%)",
    "hsl(300, 20%, 40%)",
];

const TRANSLUCENT: &[&str] = &[
    "rgba(0, 0, 0, 0.5)",
    "rgba(181, 119, 242, 0.6)",
    "#ff000080",
    "#f008",
    "hsla(120, 50%, 50%, 0.3)",
];

// ============================================================================
// AVAILABILITY
// ============================================================================

#[test]
fn test_opaque_colors_have_hex_and_rgb() {
    for input in OPAQUE {
        let color = CanonicalColor::parse(input).unwrap();
        assert!(color.format(ColorFormat::Hex).is_some(), "{} lacks hex", input);
        assert!(color.format(ColorFormat::Rgb).is_some(), "{} lacks rgb", input);
    }
}

#[test]
fn test_translucent_colors_lack_opaque_formats() {
    for input in TRANSLUCENT {
        let color = CanonicalColor::parse(input).unwrap();
        for format in [ColorFormat::Hex, ColorFormat::Hex3, ColorFormat::Keyword] {
            assert_eq!(color.format(format), None, "{} has {}", input, format);
        }
        assert!(color.format(ColorFormat::Hex8).is_some());
    }
}

#[test]
fn test_detected_format_is_available() {
    for input in OPAQUE.iter().chain(TRANSLUCENT) {
        let color = CanonicalColor::parse(input).unwrap();
        assert!(
            color.format(color.detected_format()).is_some(),
            "{} detected as unavailable {}",
            input,
            color.detected_format()
        );
    }
}

#[test]
fn test_display_order_partitions_all_formats() {
    for input in OPAQUE.iter().chain(TRANSLUCENT) {
        let color = CanonicalColor::parse(input).unwrap();
        let available = color.available_in_display_order();
        let unavailable = color.unavailable_in_display_order();
        assert_eq!(available.len() + unavailable.len(), ColorFormat::DISPLAY_ORDER.len());
        assert!(available.iter().all(|f| !unavailable.contains(f)));
    }
}

// ============================================================================
// DETECTION
// ============================================================================

#[test]
fn test_detected_formats() {
    let cases = [
        ("red", ColorFormat::Keyword),
        ("#b577f2", ColorFormat::Hex),
        ("8421e6", ColorFormat::Hex),
        ("#842", ColorFormat::Hex3),
        ("#f00b", ColorFormat::Hex4),
        ("#ff0000bf", ColorFormat::Hex8),
        ("rgb(1, 2, 3)", ColorFormat::Rgb),
        ("rgba(1, 2, 3, 0.5)", ColorFormat::Rgb),
        ("hsl(100, 19%, 20%)", ColorFormat::Hsl),
        ("hsla(100, 19%, 20%, 0.6)", ColorFormat::Hsl),
    ];
    for (input, expected) in cases {
        let color = CanonicalColor::parse(input).unwrap();
        assert_eq!(color.detected_format(), expected, "{}", input);
    }
}

#[test]
fn test_display_normalizes_case() {
    let color = CanonicalColor::parse("#B577F2").unwrap();
    assert_eq!(color.original_input(), "#B577F2");
    assert_eq!(color.display(), "#b577f2");
}

#[test]
fn test_invalid_inputs() {
    for input in ["", "notacolor", "#12", "#1234567", "rgb(1, 2)", "hsl(a, b, c)", "transparent"] {
        assert!(!CanonicalColor::is_valid(input), "{} accepted", input);
        assert!(CanonicalColor::parse(input).is_err());
    }
}

// ============================================================================
// ROUND TRIPS
// ============================================================================

#[test]
fn test_renderings_parse_back_to_themselves() {
    for input in ["#b577f2", "red", "#f00", "rgba(181, 119, 242, 0.6)", "hsl(270, 82%, 71%)"] {
        let color = CanonicalColor::parse(input).unwrap();
        for (format, rendering) in color.available_formats() {
            let reparsed = CanonicalColor::parse(rendering).unwrap();
            assert_eq!(
                reparsed.format(*format),
                Some(rendering.as_str()),
                "{} rendered as {} {}",
                input,
                format,
                rendering
            );
        }
    }
}
