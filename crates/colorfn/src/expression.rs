//! Serializing an adjuster list into a `color()` expression.

use crate::adjuster::AdjusterSet;

/// Concatenates `" name(valueunit)"` for every enabled adjuster, in list order.
///
/// The result keeps its leading space so it can be appended straight to a
/// base color; trim it for display. Returns an empty string when nothing is
/// enabled.
pub fn adjusters_string(adjusters: &AdjusterSet, use_short_names: bool) -> String {
    adjusters.enabled().fold(String::new(), |mut out, adjuster| {
        out.push(' ');
        out.push_str(&adjuster.to_call(use_short_names));
        out
    })
}

/// Wraps a base color and an adjusters string into `color(...)`.
///
/// No separator is inserted; `adjusters_str` brings its own leading space. With
/// no adjusters the result is still a well formed `color(<base>)`.
pub fn function_string(base_color: &str, adjusters_str: &str) -> String {
    format!("color({}{})", base_color, adjusters_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjuster::AdjusterEdit;
    use insta::assert_snapshot;

    fn set_value(set: &mut AdjusterSet, name: &str, value: &str) {
        set.apply_edit(name, &AdjusterEdit::SetValue(value.to_string()))
            .unwrap();
    }

    #[test]
    fn test_defaults_produce_nothing() {
        assert_eq!(adjusters_string(&AdjusterSet::default(), false), "");
        assert_eq!(adjusters_string(&AdjusterSet::default(), true), "");
    }

    #[test]
    fn test_long_and_short_names() {
        let mut set = AdjusterSet::default();
        set_value(&mut set, "alpha", "60");
        set_value(&mut set, "tint", "20");
        assert_snapshot!(adjusters_string(&set, false).trim(), @"alpha(60%) tint(20%)");

        set_value(&mut set, "saturation", "80");
        assert_snapshot!(adjusters_string(&set, true).trim(), @"a(60%) s(80%) tint(20%)");
    }

    #[test]
    fn test_leading_space_kept() {
        let mut set = AdjusterSet::default();
        set_value(&mut set, "hue", "200");
        assert_eq!(adjusters_string(&set, false), " hue(200)");
    }

    #[test]
    fn test_function_string() {
        assert_eq!(
            function_string("#ff0004", " alpha(100%) hue(250)"),
            "color(#ff0004 alpha(100%) hue(250))"
        );
        assert_eq!(function_string("red", ""), "color(red)");
    }
}
