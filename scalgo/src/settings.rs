//! `@name value` directives that configure an enlistment while it is read

use serde::{Deserialize, Serialize};
use scalgo_units::{parse_unit, Unit};

use crate::error::{Result, ScalgoError};

/// Enlistment-level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Unit values are presented in; defaults to the reference record's unit
    pub scale_unit: Option<Unit>,
    /// Sort records by base value when the document is finished
    pub sorted: bool,
    /// Descending instead of ascending order
    pub reversed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            scale_unit: None,
            sorted: true,
            reversed: false,
        }
    }
}

/// A parsed settings directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Scale(Option<Unit>),
    Sorted(bool),
    Reverse(bool),
}

type DirectiveParser = fn(&str) -> Result<Directive>;

static DIRECTIVES: [(&str, DirectiveParser); 3] = [
    ("@scale", parse_scale),
    ("@sorted", parse_sorted),
    ("@reverse", parse_reverse),
];

fn parse_scale(value: &str) -> Result<Directive> {
    Ok(Directive::Scale(parse_unit(value)?))
}

fn parse_sorted(value: &str) -> Result<Directive> {
    Ok(Directive::Sorted(parse_flag(value)))
}

fn parse_reverse(value: &str) -> Result<Directive> {
    Ok(Directive::Reverse(parse_flag(value)))
}

/// Only the exact literal `true` is true
fn parse_flag(value: &str) -> bool {
    value == "true"
}

impl Directive {
    /// Parse a full directive line such as `@scale days`
    pub fn parse(line: &str) -> Result<Directive> {
        let (name, value) = line.split_once(' ').unwrap_or((line, ""));
        let (_, parse) = DIRECTIVES
            .iter()
            .find(|(known, _)| *known == name)
            .ok_or_else(|| ScalgoError::UnknownSetting(line.to_string()))?;
        parse(value)
    }
}

impl Settings {
    /// Return the settings with one directive applied
    pub fn apply(self, directive: Directive) -> Settings {
        match directive {
            Directive::Scale(scale_unit) => Settings { scale_unit, ..self },
            Directive::Sorted(sorted) => Settings { sorted, ..self },
            Directive::Reverse(reversed) => Settings { reversed, ..self },
        }
    }
}
