//! Scalgo - labeled measurement documents
//!
//! Reads a line-oriented document of `label: value unit` records, normalizes
//! every value to its category's base unit, applies `@` settings and yields
//! an [`Enlistment`] with a reference record.
//!
//! ```text
//! # durations
//! @scale days
//! Label 1: 3.14 years
//! Label 2: 42 days
//! Label 3: 1.5 hours
//! ```

mod enlistment;
mod error;
mod parser;
mod record;
mod settings;

pub use enlistment::{compare_base_values, Enlistment, EnlistmentBuilder};
pub use error::{Result, ScalgoError};
pub use parser::{classify, split_line, Line};
pub use record::Record;
pub use settings::{Directive, Settings};

pub use scalgo_units as units;
pub use scalgo_units::{Category, TimeUnit, Unit, UnitError};
