//! One labeled measurement, normalized to its category's base unit

use serde::{Deserialize, Serialize};
use scalgo_units::{convert_from_base, parse_unit, Unit, UnitError};
use tracing::trace;

use crate::error::{Result, ScalgoError};
use crate::parser::split_line;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    label: String,
    base_value: f64,
    unit: Option<Unit>,
}

impl Record {
    /// Create a record from a label, a value and a unit string.
    ///
    /// An empty unit string leaves the value unconverted and the record
    /// without a unit. A blank label is rejected.
    pub fn new(label: impl Into<String>, value: f64, unit_str: &str) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ScalgoError::NoLabel);
        }
        let unit = parse_unit(unit_str).map_err(ScalgoError::Record)?;
        Self::with_unit(label, value, unit)
    }

    /// Create a record from an already resolved unit
    pub fn with_unit(label: impl Into<String>, value: f64, unit: Option<Unit>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ScalgoError::NoLabel);
        }
        let base_value = match unit {
            Some(u) => u.to_base(value),
            None => value,
        };
        Ok(Record { label, base_value, unit })
    }

    /// Parse a `label: value [unit]` line
    pub fn from_line(input: &str) -> Result<Self> {
        let (label, value, unit_str) = split_line(input)?;
        let record = Self::new(label, value, unit_str)?;
        trace!(label = %record.label, base_value = record.base_value, "parsed record");
        Ok(record)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value in the base unit of the record's category
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// The unit the value was written in, if any
    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    /// The value as originally written, in the record's own unit
    pub fn value(&self) -> f64 {
        match self.unit {
            Some(u) => convert_from_base(self.base_value, u.factor()),
            None => self.base_value,
        }
    }

    /// The value expressed in `target`
    pub fn value_in(&self, target: &Unit) -> Result<f64> {
        match self.unit {
            Some(u) => Ok(u.convert(self.value(), target)?),
            None => Err(UnitError::IncompatibleCategories {
                from: "unitless".to_string(),
                to: target.to_string(),
            }
            .into()),
        }
    }
}
