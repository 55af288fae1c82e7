//! Pairwise temperature formulas
//!
//! Celsius, Fahrenheit, and Kelvin convert through explicit affine formulas
//! rather than a shared linear scale.

use crate::convert::ConvertError;

/// Convert `value` from `from` to `to`, both canonical temperature symbols
/// ("c", "f", or "k").
///
/// Pairs outside {c, f, k} are a contract violation: the registry is
/// supposed to gate this function, so they surface as an internal error
/// rather than a silent zero.
pub fn convert_temperature(to: &str, from: &str, value: f64) -> Result<f64, ConvertError> {
    let f2c = |f: f64| (f - 32.0) * 5.0 / 9.0;
    let k2c = |k: f64| k - 273.15;
    let c2f = |c: f64| c * 9.0 / 5.0 + 32.0;
    let c2k = |c: f64| c + 273.15;
    let f2k = |f: f64| (f + 459.67) * 5.0 / 9.0;
    let k2f = |k: f64| k * 9.0 / 5.0 - 459.67;

    match (from, to) {
        ("c", "f") => Ok(c2f(value)),
        ("c", "k") => Ok(c2k(value)),
        ("c", "c") => Ok(value),
        ("k", "c") => Ok(k2c(value)),
        ("k", "f") => Ok(k2f(value)),
        ("k", "k") => Ok(value),
        ("f", "c") => Ok(f2c(value)),
        ("f", "k") => Ok(f2k(value)),
        ("f", "f") => Ok(value),
        _ => Err(ConvertError::Internal(format!(
            "temperature conversion called with non-temperature pair {from} -> {to}"
        ))),
    }
}
