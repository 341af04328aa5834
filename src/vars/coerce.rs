//! String-to-value coercions used by the binder.

use std::num::ParseIntError;
use std::str::FromStr;

use super::VarKind;

/// A raw value the coercion helpers refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rejected {
    pub(crate) value: String,
    pub(crate) kind: VarKind,
    pub(crate) reason: String,
}

impl Rejected {
    fn new(value: &str, kind: VarKind, reason: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            kind,
            reason: reason.to_string(),
        }
    }
}

/// Parses a base-10 signed integer. A leading `+` or `-` is accepted,
/// surrounding whitespace is not.
pub(crate) fn int<T>(raw: &str, kind: VarKind) -> Result<T, Rejected>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.parse().map_err(|err| Rejected::new(raw, kind, err))
}

/// Parses a base-10 float literal at 64-bit precision.
///
/// Finite literals too large for an `f64` are rejected as out of range;
/// only an explicit `inf`/`infinity` spelling yields an infinity.
pub(crate) fn float(raw: &str, kind: VarKind) -> Result<f64, Rejected> {
    let value: f64 = raw.parse().map_err(|err| Rejected::new(raw, kind, err))?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return Err(Rejected::new(raw, kind, "value out of range"));
    }
    Ok(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let lowered = raw.trim().to_ascii_lowercase();
    let unsigned = lowered.strip_prefix(['+', '-']).unwrap_or(&lowered);
    matches!(unsigned, "inf" | "infinity")
}

/// Parses a boolean literal.
pub(crate) fn boolean(raw: &str) -> Result<bool, Rejected> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Rejected::new(raw, VarKind::Bool, "expected a boolean literal")),
    }
}

/// Splits a comma-separated value, trimming whitespace around each piece.
///
/// An empty value yields a single empty piece.
pub(crate) fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim)
}
