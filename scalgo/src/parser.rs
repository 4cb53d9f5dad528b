//! Line grammar for enlistment documents
//!
//! ```text
//! # comment
//! <label>: <number> [<unit>]
//! @<setting> <value>
//! ```

use crate::error::{Result, ScalgoError};

/// Classification of one raw input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only
    Blank,
    /// Starts with `#`
    Comment(&'a str),
    /// Starts with `@`; holds the whole line
    Setting(&'a str),
    /// Anything else; expected to be `label: value [unit]`
    Data(&'a str),
}

/// Classify a line by its first character
pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        Line::Blank
    } else if line.starts_with('#') {
        Line::Comment(line)
    } else if line.starts_with('@') {
        Line::Setting(line)
    } else {
        Line::Data(line)
    }
}

/// Split a data line into label, numeric value and unit string.
///
/// The label is everything before the first colon. The rest is split on its
/// first space into the number and the (possibly empty) unit.
pub fn split_line(input: &str) -> Result<(&str, f64, &str)> {
    let (label, rest) = input.trim().split_once(':').ok_or(ScalgoError::NoColon)?;

    let label = label.trim();
    if label.is_empty() {
        return Err(ScalgoError::NoLabel);
    }

    let rest = rest.trim();
    let (value_str, unit) = rest.split_once(' ').unwrap_or((rest, ""));
    let value = value_str.parse::<f64>()?;

    Ok((label, value, unit))
}
