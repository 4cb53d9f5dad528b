//! Quantity categories
//!
//! Every unit belongs to exactly one category. Values are only comparable
//! (and convertible) within a category, where they share a base unit.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Quantity category of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Durations, normalized to seconds
    Time,
}

impl Category {
    /// All categories, in resolution order
    pub const ALL: [Category; 1] = [Category::Time];

    /// Lowercase category name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Time => "time",
        }
    }

    /// Name of the canonical base unit of this category
    pub fn base_unit_name(&self) -> &'static str {
        match self {
            Category::Time => "second",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
