//! Reading a base color out of a URL query value.
//!
//! Callers pass in the raw (still encoded) query value and, optionally, the
//! URL fragment. Nothing here touches a real URL.

use percent_encoding::percent_decode_str;

use crate::canonical::CanonicalColor;
use crate::error::{ColorError, Result};

/// Resolves a query value to a color string the parser accepts.
///
/// The value is lower-cased and percent-decoded; a broken encoding is not
/// fatal, the lower-cased raw value is used instead. An empty value falls
/// back to `fragment`, which covers links where an unencoded `#` split the
/// color off into the fragment. Hex colors missing their `#` get one.
/// Returns `None` when the result is not a color.
///
/// ```
/// use colorfn::color_from_query_val;
///
/// assert_eq!(color_from_query_val("%238421e6", None).as_deref(), Some("#8421e6"));
/// assert_eq!(color_from_query_val("8421e6", None).as_deref(), Some("#8421e6"));
/// assert_eq!(color_from_query_val("", Some("#842")).as_deref(), Some("#842"));
/// assert_eq!(color_from_query_val("nope", None), None);
/// ```
pub fn color_from_query_val(raw_val: &str, fragment: Option<&str>) -> Option<String> {
    let lower = raw_val.to_lowercase();
    let decoded = match percent_decode_value(&lower) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::debug!("{}; using the raw query value", err);
            lower
        }
    };

    let candidate = match fragment {
        Some(fragment) if decoded.is_empty() => fragment.to_string(),
        _ => decoded,
    };

    match CanonicalColor::parse(&candidate) {
        Ok(color) if color.detected_format().is_hex() && !candidate.starts_with('#') => {
            Some(format!("#{}", candidate))
        }
        Ok(_) => Some(candidate),
        Err(_) => {
            log::warn!(
                "Invalid color provided in URL: {:?}, using default base color.",
                raw_val
            );
            None
        }
    }
}

/// Strict percent decoding: every `%` must start a two digit hex escape and
/// the decoded bytes must be UTF-8.
pub fn percent_decode_value(value: &str) -> Result<String> {
    let bytes = value.as_bytes();
    let well_formed = value.match_indices('%').all(|(i, _)| {
        bytes
            .get(i + 1..i + 3)
            .is_some_and(|escape| escape.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return Err(ColorError::MalformedPercentEncoding(value.to_string()));
    }

    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ColorError::MalformedPercentEncoding(value.to_string()))
}

/// Finds the raw value of `name` in a query string such as `?color=red&x=1`.
///
/// A parameter present without `=` yields an empty value.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == name => Some(value),
            None if pair == name => Some(""),
            _ => None,
        })
}
