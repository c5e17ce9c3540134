//! Evaluation of `color()` expressions.
//!
//! [`ExpressionEvaluator`] is the seam the rest of the crate talks to;
//! [`ColorFunctionEvaluator`] is the built-in implementation. Adjusters are
//! applied left to right, each one to the result of the previous:
//!
//! | adjuster | space | amount |
//! |---|---|---|
//! | `alpha`/`a` | alpha | percentage, or a 0-1 number |
//! | `red`, `green`, `blue` | RGB | 0-255, or a percentage of 255 |
//! | `hue`/`h` | HSL | degrees |
//! | `saturation`/`s`, `lightness`/`l` | HSL | percentage |
//! | `whiteness`/`w`, `blackness`/`b` | HWB | percentage |
//! | `tint`, `shade` | RGB mix with white/black | percentage |
//! | `contrast` | RGB mix toward white/black | percentage, default 100% |
//!
//! Without a modifier the amount replaces the channel; `+`/`-` add or
//! subtract it and `*` scales the channel by it.

use crate::error::{ColorError, Result};
use crate::parser::{
    AdjusterCall, Amount, BaseColor, ColorFunction, Modifier, Unit, parse_expression,
};
use crate::types::RgbaColor;

/// Contrast ratio the `contrast()` adjuster treats as just legible.
const MIN_CONTRAST_RATIO: f64 = 4.5;
const BISECTION_STEPS: usize = 24;

/// Something that turns a `color(...)` expression into a color string.
pub trait ExpressionEvaluator {
    /// Evaluates `expression`, returning an `rgb()`/`rgba()` string.
    fn evaluate(&self, expression: &str) -> Result<String>;
}

/// The built-in `color()` interpreter.
///
/// Bases written as 4 or 8 digit hex are refused with
/// [`ColorError::UnsupportedBase`]; pass their `rgba()` rendering instead.
///
/// ```
/// use colorfn::{ColorFunctionEvaluator, ExpressionEvaluator};
///
/// let out = ColorFunctionEvaluator.evaluate("color(red lightness(25%))").unwrap();
/// assert_eq!(out, "rgb(128, 0, 0)");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorFunctionEvaluator;

impl ExpressionEvaluator for ColorFunctionEvaluator {
    fn evaluate(&self, expression: &str) -> Result<String> {
        let func = parse_expression(expression)?;
        let color = self.evaluate_function(&func)?;
        Ok(color.to_rgb_string())
    }
}

impl ColorFunctionEvaluator {
    /// Evaluates an already parsed expression.
    pub fn evaluate_function(&self, func: &ColorFunction) -> Result<RgbaColor> {
        let base = match &func.base {
            BaseColor::Literal(text) => {
                let (color, format) = RgbaColor::parse_with_format(text)?;
                if format.is_alpha_hex() {
                    return Err(ColorError::UnsupportedBase(text.clone()));
                }
                color
            }
            BaseColor::Nested(inner) => self.evaluate_function(inner)?,
        };

        func.adjusters.iter().try_fold(base, |color, call| {
            log::trace!("color(): applying {:?} to {}", call, color.to_rgb_string());
            apply(color, call)
        })
    }
}

fn apply(color: RgbaColor, call: &AdjusterCall) -> Result<RgbaColor> {
    match call.name.as_str() {
        "alpha" | "a" => {
            let amount = required(call)?;
            let a = combine(color.a, call.modifier, amount.fraction(), amount.fraction());
            Ok(color.with_alpha(a))
        }
        "red" | "green" | "blue" => {
            let amount = required(call)?;
            let value = match amount.unit {
                Unit::Percent => amount.fraction() * 255.0,
                _ => amount.value,
            };
            let (r, g, b) = (color.r, color.g, color.b);
            let channel = |current: f64| combine(current, call.modifier, value, amount.fraction());
            Ok(match call.name.as_str() {
                "red" => RgbaColor::from_channels(channel(r), g, b, color.a),
                "green" => RgbaColor::from_channels(r, channel(g), b, color.a),
                _ => RgbaColor::from_channels(r, g, channel(b), color.a),
            })
        }
        "hue" | "h" => {
            let amount = required(call)?;
            let (h, s, l) = color.to_hsl();
            let h = combine(h, call.modifier, amount.value, amount.fraction());
            Ok(RgbaColor::from_hsl(h, s, l, color.a))
        }
        "saturation" | "s" => {
            let amount = required(call)?;
            let (h, s, l) = color.to_hsl();
            let s = combine(s, call.modifier, percent(&amount), amount.fraction());
            Ok(RgbaColor::from_hsl(h, s, l, color.a))
        }
        "lightness" | "l" => {
            let amount = required(call)?;
            let (h, s, l) = color.to_hsl();
            let l = combine(l, call.modifier, percent(&amount), amount.fraction());
            Ok(RgbaColor::from_hsl(h, s, l, color.a))
        }
        "whiteness" | "w" => {
            let amount = required(call)?;
            let (h, w, b) = color.to_hwb();
            let w = combine(w, call.modifier, percent(&amount), amount.fraction());
            Ok(RgbaColor::from_hwb(h, w, b, color.a))
        }
        "blackness" | "b" => {
            let amount = required(call)?;
            let (h, w, b) = color.to_hwb();
            let b = combine(b, call.modifier, percent(&amount), amount.fraction());
            Ok(RgbaColor::from_hwb(h, w, b, color.a))
        }
        "tint" => {
            let amount = unmodified(call)?.ok_or_else(|| missing_amount(call))?;
            Ok(color.mix(&RgbaColor::white().with_alpha(color.a), percent(&amount)))
        }
        "shade" => {
            let amount = unmodified(call)?.ok_or_else(|| missing_amount(call))?;
            Ok(color.mix(&RgbaColor::black().with_alpha(color.a), percent(&amount)))
        }
        "contrast" => {
            let amount = unmodified(call)?.unwrap_or(Amount::percent(100.0));
            Ok(contrast(&color, percent(&amount)))
        }
        _ => Err(ColorError::UnknownAdjuster(call.name.clone())),
    }
}

fn combine(current: f64, modifier: Option<Modifier>, amount: f64, factor: f64) -> f64 {
    match modifier {
        None => amount,
        Some(Modifier::Add) => current + amount,
        Some(Modifier::Subtract) => current - amount,
        Some(Modifier::Multiply) => current * factor,
    }
}

/// Percentage adjusters read bare numbers as percentages too.
fn percent(amount: &Amount) -> f64 {
    amount.value / 100.0
}

fn missing_amount(call: &AdjusterCall) -> ColorError {
    ColorError::Syntax(format!("{}() requires an amount", call.name))
}

fn required(call: &AdjusterCall) -> Result<Amount> {
    call.amount.ok_or_else(|| missing_amount(call))
}

/// Mixing adjusters take a plain amount.
fn unmodified(call: &AdjusterCall) -> Result<Option<Amount>> {
    if call.modifier.is_some() {
        return Err(ColorError::Syntax(format!(
            "{}() does not take a modifier",
            call.name
        )));
    }
    Ok(call.amount)
}

/// Moves `color` toward white (dark colors) or black (light colors).
///
/// `p = 0` gives the closest mix that reaches [`MIN_CONTRAST_RATIO`] against
/// the original, `p = 1` gives white or black itself.
fn contrast(color: &RgbaColor, p: f64) -> RgbaColor {
    let target = if color.luminance() < 0.5 {
        RgbaColor::white()
    } else {
        RgbaColor::black()
    }
    .with_alpha(color.a);

    let min = if color.contrast_ratio(&target) > MIN_CONTRAST_RATIO {
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..BISECTION_STEPS {
            let mid = (lo + hi) / 2.0;
            if color.contrast_ratio(&color.mix(&target, mid)) >= MIN_CONTRAST_RATIO {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        color.mix(&target, hi)
    } else {
        target
    };

    min.mix(&target, p)
}
