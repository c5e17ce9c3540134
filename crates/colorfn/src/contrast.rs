//! Legible text colors for a given background.
//!
//! This is a binary heuristic built on the evaluator's `contrast()` adjuster,
//! not a full WCAG contrast search: with the default amount the answer is
//! black or white.

use crate::error::Result;
use crate::evaluator::{ColorFunctionEvaluator, ExpressionEvaluator};
use crate::expression::function_string;
use crate::properties::ColorProperties;
use crate::types::RgbaColor;

pub const DEFAULT_CONTRAST_AMOUNT: &str = "100%";

/// Below this alpha (0-100) a backdrop is too translucent to reason about,
/// and black is used as the backdrop instead.
const MIN_BACKDROP_ALPHA: i32 = 50;

/// Returns an opaque `rgb()` color that reads well on top of `base_color`.
///
/// ```
/// assert_eq!(colorfn::contrast_color("yellow").unwrap(), "rgb(0, 0, 0)");
/// assert_eq!(colorfn::contrast_color("rgb(75, 7, 7)").unwrap(), "rgb(255, 255, 255)");
/// ```
pub fn contrast_color(base_color: &str) -> Result<String> {
    contrast_color_with(base_color, DEFAULT_CONTRAST_AMOUNT, &ColorFunctionEvaluator)
}

/// [`contrast_color`] with an explicit `contrast()` amount and evaluator.
pub fn contrast_color_with(
    base_color: &str,
    amount: &str,
    evaluator: &dyn ExpressionEvaluator,
) -> Result<String> {
    let properties = ColorProperties::extract(base_color)?;

    if properties.alpha < MIN_BACKDROP_ALPHA {
        return Ok(RgbaColor::black().to_rgb_string());
    }

    let safe_color = RgbaColor::parse(base_color)?.with_alpha(1.0).to_rgb_string();
    let adjusters = format!(" contrast({})", amount);
    evaluator.evaluate(&function_string(&safe_color, &adjusters))
}
