//! Unit definitions - the sixteen units of the three fixed categories

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{Category, Unit};

/// Placeholder rendered for any unrecognized unit
pub const UNKNOWN_UNIT: &str = "???";

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_length_units();
        registry.register_mass_units();
        registry.register_temperature_units();
        registry
    }

    /// Normalize a surface form (symbol, singular word, plural word, or
    /// alternate spelling) to its unit. Total: unknown tokens yield `None`.
    pub fn normalize(&self, token: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(token) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(token) {
            return self.units.get(canonical);
        }
        None
    }

    /// Render a unit for display. Matches canonical symbols only, not
    /// aliases; anything else renders as the "???" placeholder.
    pub fn display_name(&self, symbol: &str, plural: bool) -> &str {
        self.units
            .get(symbol)
            .map(|u| u.name(plural))
            .unwrap_or(UNKNOWN_UNIT)
    }

    /// All units in a category
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units
            .values()
            .filter(|u| u.category == category)
            .collect()
    }

    /// All canonical symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_length_units(&mut self) {
        // base = meter
        self.register(Unit::linear("km", "kilometer", "kilometers", Category::Length, 1000.0));
        self.register(Unit::linear("m", "meter", "meters", Category::Length, 1.0));
        self.register(Unit::linear("cm", "centimeter", "centimeters", Category::Length, 0.01));
        self.register(Unit::linear("mm", "millimeter", "millimeters", Category::Length, 0.001));
        self.register(Unit::linear("mi", "mile", "miles", Category::Length, 1609.35));
        self.register(Unit::linear("yd", "yard", "yards", Category::Length, 0.9144));
        self.register(Unit::linear("ft", "foot", "feet", Category::Length, 0.3048));
        self.register(Unit::linear("in", "inch", "inches", Category::Length, 0.0254));

        self.alias("kilometer", "km");
        self.alias("kilometers", "km");
        self.alias("meter", "m");
        self.alias("meters", "m");
        self.alias("centimeter", "cm");
        self.alias("centimeters", "cm");
        self.alias("millimeter", "mm");
        self.alias("millimeters", "mm");
        self.alias("mile", "mi");
        self.alias("miles", "mi");
        self.alias("yard", "yd");
        self.alias("yards", "yd");
        self.alias("foot", "ft");
        self.alias("feet", "ft");
        self.alias("inch", "in");
        self.alias("inches", "in");
    }

    fn register_mass_units(&mut self) {
        // base = gram
        self.register(Unit::linear("kg", "kilogram", "kilograms", Category::Mass, 1000.0));
        self.register(Unit::linear("g", "gram", "grams", Category::Mass, 1.0));
        self.register(Unit::linear("mg", "milligram", "milligrams", Category::Mass, 0.001));
        self.register(Unit::linear("lb", "pound", "pounds", Category::Mass, 453.592));
        self.register(Unit::linear("oz", "ounce", "ounces", Category::Mass, 28.3495));

        self.alias("kilogram", "kg");
        self.alias("kilograms", "kg");
        self.alias("gram", "g");
        self.alias("grams", "g");
        self.alias("milligram", "mg");
        self.alias("milligrams", "mg");
        self.alias("pound", "lb");
        self.alias("pounds", "lb");
        self.alias("ounce", "oz");
        self.alias("ounces", "oz");
    }

    fn register_temperature_units(&mut self) {
        self.register(Unit::temperature("c", "degree Celsius", "degrees Celsius"));
        self.register(Unit::temperature("f", "degree Fahrenheit", "degrees Fahrenheit"));
        self.register(Unit::temperature("k", "Kelvin", "Kelvins"));

        self.alias("dc", "c");
        self.alias("celsius", "c");
        self.alias("degree celsius", "c");
        self.alias("degrees celsius", "c");
        self.alias("df", "f");
        self.alias("fahrenheit", "f");
        self.alias("degree fahrenheit", "f");
        self.alias("degrees fahrenheit", "f");
        self.alias("kelvin", "k");
        self.alias("kelvins", "k");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbols() {
        let reg = UnitRegistry::new();

        assert_eq!(reg.normalize("km").unwrap().symbol, "km");
        assert_eq!(reg.normalize("lb").unwrap().symbol, "lb");
        assert_eq!(reg.normalize("k").unwrap().symbol, "k");
    }

    #[test]
    fn test_normalize_words() {
        let reg = UnitRegistry::new();

        assert_eq!(reg.normalize("kilometers").unwrap().symbol, "km");
        assert_eq!(reg.normalize("foot").unwrap().symbol, "ft");
        assert_eq!(reg.normalize("ounces").unwrap().symbol, "oz");
        assert_eq!(reg.normalize("degrees celsius").unwrap().symbol, "c");
        assert_eq!(reg.normalize("dc").unwrap().symbol, "c");
        assert_eq!(reg.normalize("df").unwrap().symbol, "f");
    }

    #[test]
    fn test_normalize_unknown() {
        let reg = UnitRegistry::new();

        assert!(reg.normalize("furlong").is_none());
        assert!(reg.normalize("").is_none());
    }

    #[test]
    fn test_display_name() {
        let reg = UnitRegistry::new();

        assert_eq!(reg.display_name("m", false), "meter");
        assert_eq!(reg.display_name("m", true), "meters");
        assert_eq!(reg.display_name("ft", false), "foot");
        assert_eq!(reg.display_name("ft", true), "feet");
        assert_eq!(reg.display_name("c", false), "degree Celsius");
        assert_eq!(reg.display_name("c", true), "degrees Celsius");
        assert_eq!(reg.display_name("k", true), "Kelvins");
    }

    #[test]
    fn test_display_name_canonical_only() {
        let reg = UnitRegistry::new();

        // Aliases and unknown tokens both render as the placeholder
        assert_eq!(reg.display_name("kilometers", true), UNKNOWN_UNIT);
        assert_eq!(reg.display_name("furlong", true), UNKNOWN_UNIT);
        assert_eq!(reg.display_name("", true), UNKNOWN_UNIT);
    }

    #[test]
    fn test_by_category() {
        let reg = UnitRegistry::new();

        assert_eq!(reg.by_category(Category::Length).len(), 8);
        assert_eq!(reg.by_category(Category::Mass).len(), 5);
        assert_eq!(reg.by_category(Category::Temperature).len(), 3);
        assert_eq!(reg.symbols().len(), 16);
    }

    #[test]
    fn test_scale_factors() {
        let reg = UnitRegistry::new();

        assert_eq!(reg.normalize("mi").unwrap().to_base, 1609.35);
        assert_eq!(reg.normalize("lb").unwrap().to_base, 453.592);
        assert_eq!(reg.normalize("oz").unwrap().to_base, 28.3495);
    }
}
