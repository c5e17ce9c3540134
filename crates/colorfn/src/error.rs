//! Error types for color parsing and color function evaluation.
//!
//! Most of these are recoverable at the session layer: an invalid color keeps
//! the last good state, an evaluation failure falls back to the base color and
//! a malformed query value is used as-is. `UnknownAdjuster` is the exception;
//! it signals a caller bug and should not be swallowed.

use thiserror::Error;

/// Errors that can occur while parsing colors or evaluating `color()` expressions.
///
/// # Examples
///
/// ```rust
/// use colorfn::{CanonicalColor, ColorError};
///
/// let result = CanonicalColor::parse("notacolor");
/// assert!(matches!(result, Err(ColorError::InvalidColor(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input does not match any supported color syntax.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A `color()` expression could not be parsed.
    ///
    /// The string contains details about what was unexpected.
    #[error("color function syntax error: {0}")]
    Syntax(String),

    /// An adjuster name that the evaluator or the adjuster list does not know.
    #[error("unknown adjuster: {0}")]
    UnknownAdjuster(String),

    /// An adjuster edit carried a value that is not an integer.
    #[error("invalid adjuster value: {0}")]
    InvalidAdjusterValue(String),

    /// The evaluator cannot take this base color directly (alpha hex forms).
    #[error("unsupported base color for color(): {0}")]
    UnsupportedBase(String),

    /// A query value contained a broken `%XX` escape or decoded to invalid UTF-8.
    #[error("malformed percent encoding: {0}")]
    MalformedPercentEncoding(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
