//! Verso Units - fixed-category unit conversion
//!
//! Converts lengths, masses, and temperatures between the sixteen units the
//! interactive converter knows about. Free-form surface forms ("km",
//! "kilometers", "degrees celsius") normalize to canonical symbols; length
//! and mass convert through per-category base units (meter, gram), while
//! temperature converts through explicit pairwise formulas.
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Mass (g, kg, mg, lb, oz)
//! - Temperature (c, f, k)

mod category;
mod convert;
mod parse;
mod temperature;
mod unit;
mod units;

pub use category::Category;
pub use convert::{convert, ConvertError};
pub use parse::{parse_request, ConversionRequest, ParseError};
pub use temperature::convert_temperature;
pub use unit::Unit;
pub use units::{UnitRegistry, UNITS, UNKNOWN_UNIT};
