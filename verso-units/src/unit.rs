//! Unit representation with conversion factors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Category;

/// A single known unit: canonical symbol, display names, category, and the
/// scale factor to the category base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The canonical symbol (e.g. "km", "lb", "f")
    pub symbol: String,
    /// Singular display name (e.g. "kilometer")
    pub singular: String,
    /// Plural display name (e.g. "kilometers")
    pub plural: String,
    /// The category this unit belongs to
    pub category: Category,
    /// Factor to the category base unit (meter for length, gram for mass).
    /// Temperature units convert through the pairwise formulas in
    /// `temperature` and never read this field.
    pub to_base: f64,
}

impl Unit {
    /// Create a linear unit (length or mass) with a scale to the base unit
    pub fn linear(
        symbol: &str,
        singular: &str,
        plural: &str,
        category: Category,
        to_base: f64,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            singular: singular.to_string(),
            plural: plural.to_string(),
            category,
            to_base,
        }
    }

    /// Create a temperature unit (no linear scale)
    pub fn temperature(symbol: &str, singular: &str, plural: &str) -> Self {
        Unit {
            symbol: symbol.to_string(),
            singular: singular.to_string(),
            plural: plural.to_string(),
            category: Category::Temperature,
            to_base: 1.0,
        }
    }

    /// Display name for a grammatical number
    pub fn name(&self, plural: bool) -> &str {
        if plural {
            &self.plural
        } else {
            &self.singular
        }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::linear("m", "meter", "meters", Category::Length, 1.0)
    }

    fn gram() -> Unit {
        Unit::linear("g", "gram", "grams", Category::Mass, 1.0)
    }

    #[test]
    fn test_name_by_number() {
        let m = meter();
        assert_eq!(m.name(false), "meter");
        assert_eq!(m.name(true), "meters");
    }

    #[test]
    fn test_compatibility() {
        let m = meter();
        let g = gram();
        let c = Unit::temperature("c", "degree Celsius", "degrees Celsius");

        assert!(m.is_compatible(&meter()));
        assert!(!m.is_compatible(&g));
        assert!(!g.is_compatible(&c));
    }
}
