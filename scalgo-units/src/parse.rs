//! Unit string resolution across categories

use crate::{TimeUnit, Unit};
use crate::unit::UnitError;

/// Resolves a string to a unit of one category, or fails
pub type CategoryParser = fn(&str) -> Result<Unit, UnitError>;

/// Category parsers, tried in order until one recognizes the input.
///
/// A new category plugs in here with its own alias table and parser.
pub static CATEGORY_PARSERS: &[CategoryParser] = &[parse_time_unit];

fn parse_time_unit(input: &str) -> Result<Unit, UnitError> {
    TimeUnit::parse(input).map(Unit::Time)
}

/// Parse a unit string into a Unit
///
/// An empty string means "no unit" and resolves to `None`. Any other string
/// must be recognized by one of the registered categories.
pub fn parse_unit(s: &str) -> Result<Option<Unit>, UnitError> {
    if s.is_empty() {
        return Ok(None);
    }

    CATEGORY_PARSERS
        .iter()
        .find_map(|parse| parse(s).ok())
        .map(Some)
        .ok_or_else(|| UnitError::NoMatchingUnit(s.to_string()))
}
