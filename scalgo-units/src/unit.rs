//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::Category;

/// Seconds in a (365-day) year
const SECONDS_PER_YEAR: i64 = 31_536_000;

/// Time units, each carrying a fixed number of seconds.
///
/// Month and year use the 30-day and 365-day conventions. These factors are
/// conventions for comparing magnitudes, not calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

impl TimeUnit {
    /// Every time unit, smallest first
    pub const ALL: [TimeUnit; 10] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
        TimeUnit::Decade,
        TimeUnit::Century,
        TimeUnit::Millennium,
    ];

    /// Number of seconds in one of this unit
    pub fn seconds(&self) -> i64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => 86_400,
            TimeUnit::Week => 604_800,
            TimeUnit::Month => 2_592_000,
            TimeUnit::Year => SECONDS_PER_YEAR,
            TimeUnit::Decade => 10 * SECONDS_PER_YEAR,
            TimeUnit::Century => 100 * SECONDS_PER_YEAR,
            TimeUnit::Millennium => 1_000 * SECONDS_PER_YEAR,
        }
    }

    /// Canonical singular name (e.g., "hour")
    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
            TimeUnit::Decade => "decade",
            TimeUnit::Century => "century",
            TimeUnit::Millennium => "millennium",
        }
    }

    /// Resolve a time unit from any of its spellings, ignoring case and
    /// surrounding whitespace
    pub fn parse(input: &str) -> Result<TimeUnit, UnitError> {
        crate::units::lookup_time_unit(input)
            .ok_or_else(|| UnitError::UnknownUnit(input.to_string()))
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A unit of some quantity category.
///
/// Units of the same category share a base unit (seconds, for time) and can
/// be converted into each other; conversions across categories fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "unit", rename_all = "lowercase")]
pub enum Unit {
    Time(TimeUnit),
}

impl Unit {
    /// The quantity category this unit measures
    pub fn category(&self) -> Category {
        match self {
            Unit::Time(_) => Category::Time,
        }
    }

    /// How many base units make up one of this unit
    pub fn factor(&self) -> i64 {
        match self {
            Unit::Time(t) => t.seconds(),
        }
    }

    /// Canonical unit name
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Time(t) => t.name(),
        }
    }

    /// Check if two units measure the same category
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category() == other.category()
    }

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor() as f64
    }

    /// Convert a value in this unit to the base unit, then divide by a raw
    /// base-units-per-target factor
    pub fn convert_to_unit(&self, value: f64, target_factor: i64) -> f64 {
        convert_from_base(self.to_base(value), target_factor)
    }

    /// Convert a value from this unit into another unit of the same category
    pub fn convert(&self, value: f64, target: &Unit) -> Result<f64, UnitError> {
        if !self.is_compatible(target) {
            return Err(UnitError::IncompatibleCategories {
                from: self.to_string(),
                to: target.to_string(),
            });
        }
        Ok(self.convert_to_unit(value, target.factor()))
    }
}

impl From<TimeUnit> for Unit {
    fn from(unit: TimeUnit) -> Self {
        Unit::Time(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Express a base-unit value in a unit given only by its factor.
///
/// Takes the factor rather than a [`Unit`] so callers can target scales that
/// have no registry entry.
pub fn convert_from_base(base_value: f64, target_factor: i64) -> f64 {
    base_value / target_factor as f64
}

/// Errors that can occur while resolving or converting units
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A category parser did not recognize the string
    #[error("Unknown unit {0}")]
    UnknownUnit(String),

    /// No registered category recognized the string
    #[error("no matching unit found for {0}")]
    NoMatchingUnit(String),

    /// Units belong to different categories
    #[error("cannot convert {from} to {to}: incompatible categories")]
    IncompatibleCategories { from: String, to: String },
}
