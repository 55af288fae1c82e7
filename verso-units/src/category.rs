//! Unit categories
//!
//! Conversions are only valid within a category. The registry classifies a
//! unit once at construction; all later branching switches on this tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of measurement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Temperature,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Length => write!(f, "length"),
            Category::Mass => write!(f, "mass"),
            Category::Temperature => write!(f, "temperature"),
        }
    }
}
