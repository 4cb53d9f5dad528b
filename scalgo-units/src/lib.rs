//! Scalgo Units - unit resolution and base-unit normalization
//!
//! Each unit belongs to a quantity category and converts to and from the
//! category's base unit through an integer factor.
//!
//! Categories:
//! - Time (second, minute, hour, day, week, month, year, decade, century, millennium)

mod category;
mod unit;
mod parse;
mod units;

pub use category::Category;
pub use unit::{Unit, TimeUnit, UnitError, convert_from_base};
pub use units::TIME_UNITS;
pub use parse::{parse_unit, CategoryParser, CATEGORY_PARSERS};
