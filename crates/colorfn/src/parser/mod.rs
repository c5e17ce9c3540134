//! Parsing of `color()` function expressions.
//!
//! The grammar is the adjuster form of the CSS `color()` function:
//!
//! ```text
//! color( <base> <adjuster>* )
//! <base>     := <color-function> | <name>( ... ) | <token>
//! <adjuster> := <name>( [ [ + | - | * ] <whitespace> ]? <amount>? )
//! <amount>   := [ + | - ]? <number> [ % | deg ]?
//! ```
//!
//! A modifier needs whitespace after it: `hue(- 120)` subtracts, while
//! `hue(-120)` sets the hue to -120.
//!
//! ## Submodules
//!
//! - [`units`]: Numeric amounts and unit suffixes
//!
//! ## Example
//!
//! ```rust
//! use colorfn::parser::{parse_expression, BaseColor, Modifier};
//!
//! let func = parse_expression("color(red hue(+ 20) tint(10%))").unwrap();
//! assert_eq!(func.base, BaseColor::Literal("red".to_string()));
//! assert_eq!(func.adjusters[0].name, "hue");
//! assert_eq!(func.adjusters[0].modifier, Some(Modifier::Add));
//! ```

pub mod units;

pub use crate::parser::units::{Amount, Unit};

use crate::error::{ColorError, Result};
use crate::parser::units::parse_amount;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{preceded, terminated, tuple},
};

/// A parsed `color(...)` expression.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFunction {
    pub base: BaseColor,
    pub adjusters: Vec<AdjusterCall>,
}

/// The first argument of `color()`.
#[derive(Clone, Debug, PartialEq)]
pub enum BaseColor {
    /// A color string handed to the color parser (`red`, `#fff`, `rgb(1, 2, 3)`).
    Literal(String),
    /// Another `color()` expression, evaluated first.
    Nested(Box<ColorFunction>),
}

/// How an adjuster combines its amount with the current channel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    Add,
    Subtract,
    Multiply,
}

/// One adjuster call such as `lightness(- 10%)`.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjusterCall {
    pub name: String,
    pub modifier: Option<Modifier>,
    pub amount: Option<Amount>,
}

/// Parses a complete `color()` expression; trailing input is an error.
pub fn parse_expression(source: &str) -> Result<ColorFunction> {
    let (remaining, func) =
        parse_color_function(source.trim()).map_err(|e| ColorError::Syntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(ColorError::Syntax(format!(
            "Unexpected tokens after expression: {}",
            remaining.trim()
        )));
    }

    Ok(func)
}

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Top-level parser for `color( <base> <adjuster>* )`.
pub fn parse_color_function(input: &str) -> IResult<&str, ColorFunction> {
    let (input, _) = tag_no_case("color")(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, base) = parse_base(input)?;
    let (input, adjusters) = many0(preceded(multispace0, parse_adjuster_call))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, ColorFunction { base, adjusters }))
}

fn parse_base(input: &str) -> IResult<&str, BaseColor> {
    alt((
        map(parse_color_function, |f| BaseColor::Nested(Box::new(f))),
        map(
            recognize(tuple((
                parse_ident,
                char('('),
                take_while(|c: char| c != '(' && c != ')'),
                char(')'),
            ))),
            |s: &str| BaseColor::Literal(s.to_string()),
        ),
        map(
            take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')'),
            |s: &str| BaseColor::Literal(s.to_string()),
        ),
    ))(input)
}

fn parse_modifier(input: &str) -> IResult<&str, Modifier> {
    terminated(
        alt((
            map(char('+'), |_| Modifier::Add),
            map(char('-'), |_| Modifier::Subtract),
            map(char('*'), |_| Modifier::Multiply),
        )),
        multispace1,
    )(input)
}

/// Parses `name( [modifier] [amount] )`.
fn parse_adjuster_call(input: &str) -> IResult<&str, AdjusterCall> {
    let (input, name) = parse_ident(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, modifier) = opt(parse_modifier)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, amount) = opt(parse_amount)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((
        input,
        AdjusterCall {
            name: name.to_lowercase(),
            modifier,
            amount,
        },
    ))
}
