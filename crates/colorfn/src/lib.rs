//! # colorfn - CSS `color()` Function Engine
//!
//! The color model behind the colorme builder: it parses CSS color strings,
//! reads their properties, and evaluates the adjuster form of the CSS
//! `color()` function.
//!
//! - **Canonicalization**: Parse a color once and render it in every format
//!   that represents it ([`CanonicalColor`])
//! - **Properties**: Integer alpha, HSL, HWB and RGB components ([`ColorProperties`])
//! - **Adjusters**: The ordered adjuster list a user edits ([`AdjusterSet`])
//! - **Evaluation**: `color(<base> <adjuster>*)` to `rgb()`/`rgba()` ([`ColorFunctionEvaluator`])
//!
//! ## Quick Start
//!
//! ```rust
//! use colorfn::{AdjusterEdit, AdjusterSet, ColorFunctionEvaluator, ExpressionEvaluator};
//! use colorfn::{adjusters_string, function_string};
//!
//! let mut adjusters = AdjusterSet::seed_from_color("#b577f2", &AdjusterSet::default()).unwrap();
//! adjusters
//!     .apply_edit("alpha", &AdjusterEdit::SetValue("60".to_string()))
//!     .unwrap();
//!
//! let expression = function_string("#b577f2", &adjusters_string(&adjusters, false));
//! assert_eq!(expression, "color(#b577f2 alpha(60%))");
//!
//! let output = ColorFunctionEvaluator.evaluate(&expression).unwrap();
//! assert_eq!(output, "rgba(181, 119, 242, 0.6)");
//! ```
//!
//! ## Supported Input
//!
//! - Keywords: `red`, `rebeccapurple` (case-insensitive)
//! - Hex: `#f00`, `#f00b`, `#ff0000`, `#ff0000bf`, with or without `#`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`
//!
//! ## Modules
//!
//! - [`types`]: Raw RGBA color math and the format enum
//! - [`parser`]: nom grammar for `color()` expressions
//! - [`evaluator`]: Expression evaluation
//! - [`query`]: Reading a color out of a URL query value
//! - [`error`]: Error types

pub mod adjuster;
pub mod canonical;
pub mod contrast;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod parser;
pub mod properties;
pub mod query;
pub mod types;

pub use adjuster::{Adjuster, AdjusterEdit, AdjusterKind, AdjusterSet};
pub use canonical::CanonicalColor;
pub use contrast::{DEFAULT_CONTRAST_AMOUNT, contrast_color, contrast_color_with};
pub use error::{ColorError, Result};
pub use evaluator::{ColorFunctionEvaluator, ExpressionEvaluator};
pub use expression::{adjusters_string, function_string};
pub use properties::ColorProperties;
pub use query::{color_from_query_val, query_param};
pub use types::{ColorFormat, RgbaColor};
