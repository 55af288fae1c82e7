//! Conversion orchestration and result rendering

use thiserror::Error;

use crate::temperature::convert_temperature;
use crate::units::UNITS;
use crate::Category;

/// Errors surfaced by [`convert`]
///
/// The display strings are the exact user-facing diagnostics. `Internal`
/// marks contract violations; it never occurs through the registry-gated
/// path and is kept distinct from the parse-error reporting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Conversion from {from} to {to} is impossible")]
    Impossible { from: String, to: String },
    #[error("Length shouldn't be negative.")]
    NegativeLength,
    #[error("Weight shouldn't be negative.")]
    NegativeWeight,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConvertError {
    /// True for contract violations that indicate a logic defect
    pub fn is_internal(&self) -> bool {
        matches!(self, ConvertError::Internal(_))
    }
}

/// Convert `quantity` from `source_raw` to `target_raw` and render the
/// result sentence.
///
/// Both unit tokens are normalized independently. An unrecognized source
/// reports the raw token through the namer (which renders it as "???")
/// while the target side uses its normalized form; the asymmetry matches
/// the original converter and is kept deliberately.
pub fn convert(quantity: f64, source_raw: &str, target_raw: &str) -> Result<String, ConvertError> {
    let target = UNITS.normalize(target_raw);
    let target_symbol = target.map(|u| u.symbol.as_str()).unwrap_or("");

    let impossible = |from: &str, to: &str| ConvertError::Impossible {
        from: UNITS.display_name(from, true).to_string(),
        to: UNITS.display_name(to, true).to_string(),
    };

    let source = match UNITS.normalize(source_raw) {
        Some(unit) => unit,
        None => return Err(impossible(source_raw, target_symbol)),
    };

    let result = match source.category {
        Category::Length => {
            let Some(t) = target.filter(|t| t.category == Category::Length) else {
                return Err(impossible(&source.symbol, target_symbol));
            };
            if quantity < 0.0 {
                return Err(ConvertError::NegativeLength);
            }
            quantity * source.to_base / t.to_base
        }
        Category::Mass => {
            let Some(t) = target.filter(|t| t.category == Category::Mass) else {
                return Err(impossible(&source.symbol, target_symbol));
            };
            if quantity < 0.0 {
                return Err(ConvertError::NegativeWeight);
            }
            quantity * source.to_base / t.to_base
        }
        Category::Temperature => {
            if target.map(|t| t.category) != Some(Category::Temperature) {
                return Err(impossible(&source.symbol, target_symbol));
            }
            convert_temperature(target_symbol, &source.symbol, quantity)?
        }
    };

    Ok(format!(
        "{} {} is {} {}",
        format_value(quantity),
        source.name(quantity != 1.0),
        format_value(result),
        UNITS.display_name(target_symbol, result != 1.0),
    ))
}

/// Render an f64 the way the conversation transcript expects: whole finite
/// values keep one decimal place ("10000.0"), everything else uses the
/// shortest form.
fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
