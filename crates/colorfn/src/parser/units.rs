use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, one_of},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse an unsigned floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((digit1, opt(pair(char('.'), digit1))))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// The unit attached to an adjuster argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// A bare number.
    Number,
    Percent,
    Degrees,
}

/// A numeric adjuster argument such as `20%` or `120deg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Amount {
    pub value: f64,
    pub unit: Unit,
}

impl Amount {
    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// The amount as a 0-1 fraction: percentages are divided by 100,
    /// bare numbers are taken as-is.
    pub fn fraction(&self) -> f64 {
        match self.unit {
            Unit::Percent => self.value / 100.0,
            Unit::Number | Unit::Degrees => self.value,
        }
    }
}

/// Parse the unit suffix (`%`, `deg`).
fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((
        map(char('%'), |_| Unit::Percent),
        map(tag_no_case("deg"), |_| Unit::Degrees),
    ))(input)
}

/// Parse a single amount (e.g., "10", "-120", "50%", "90deg").
///
/// A sign directly attached to the number belongs to the amount.
pub fn parse_amount(input: &str) -> IResult<&str, Amount> {
    let (input, sign) = opt(one_of("+-"))(input)?;
    let (input, value) = parse_number(input)?;
    let value = if sign == Some('-') { -value } else { value };
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Amount {
            value,
            unit: unit.unwrap_or(Unit::Number),
        },
    ))
}
