use serde_json::Value;
use thiserror::Error;

/// Rejection raised when a non-numeric value reaches [`power_value`].
///
/// Raised before any computation happens, so a bad argument can never
/// produce a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{argument} must be a number, got {found}")]
    NotNumeric {
        argument: &'static str,
        found: &'static str,
    },
}

/// Raise `base` to `exponent` with IEEE-754 semantics.
///
/// Follows `f64::powf`: `power(b, 0) == 1` for every `b` (including 0 and
/// NaN), negative exponents produce reciprocals, fractional exponents
/// produce roots, and NaN/infinity propagate per the standard power rules.
/// A negative base with a non-integer exponent yields NaN.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// [`power`] over loosely-typed JSON arguments.
///
/// Numbers pass through unchanged and booleans coerce to 1/0. Everything
/// else (strings, null, arrays, objects) fails with [`TypeError`] before
/// the exponentiation runs.
pub fn power_value(base: &Value, exponent: &Value) -> Result<f64, TypeError> {
    let b = as_number("base", base)?;
    let e = as_number("exponent", exponent)?;
    Ok(power(b, e))
}

fn as_number(argument: &'static str, value: &Value) -> Result<f64, TypeError> {
    match value {
        Value::Number(n) => Ok(n.as_f64().unwrap_or(f64::NAN)),
        Value::Bool(true) => Ok(1.0),
        Value::Bool(false) => Ok(0.0),
        other => Err(TypeError::NotNumeric {
            argument,
            found: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
