//! Input line parsing
//!
//! The grammar is deliberately informal: "<number> <unit> to <unit>" or
//! "<number> <unit> in <unit>", case-insensitive.

use thiserror::Error;

/// A single conversion request parsed from one input line
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub quantity: f64,
    pub source: String,
    pub target: String,
}

/// Reasons a line failed the input grammar
///
/// The interactive loop reports all of these uniformly as "Parse error";
/// the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("no space separating the quantity from the unit phrase")]
    MissingQuantity,
    #[error("quantity {0:?} is not a number")]
    InvalidQuantity(String),
    #[error("no \" in \" or \"to\" separator between the units")]
    MissingSeparator,
}

/// Parse one input line into a conversion request.
///
/// The line is lowercased, everything before the first space is parsed as
/// the quantity, and the remainder is the unit phrase. The phrase splits on
/// " in " when present, otherwise on the bare substring "to". The bare "to"
/// split would corrupt a unit word containing "to"; no current surface form
/// does, and the behavior is kept as-is (see DESIGN.md).
pub fn parse_request(line: &str) -> Result<ConversionRequest, ParseError> {
    let line = line.to_lowercase();

    let space = line.find(' ').ok_or(ParseError::MissingQuantity)?;
    let number = &line[..space];
    let quantity: f64 = number
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(number.to_string()))?;

    let phrase = line[space..].trim();
    let pieces: Vec<&str> = if phrase.contains(" in ") {
        phrase.split(" in ").collect()
    } else {
        phrase.split("to").collect()
    };
    if pieces.len() < 2 {
        return Err(ParseError::MissingSeparator);
    }

    Ok(ConversionRequest {
        quantity,
        source: pieces[0].trim().to_string(),
        target: pieces[1].trim().to_string(),
    })
}
