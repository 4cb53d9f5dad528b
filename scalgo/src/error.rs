//! Errors raised while loading an enlistment
//!
//! Message text is part of the contract: callers match on it, so wrapping is
//! limited to the variants that say so.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use scalgo_units::UnitError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScalgoError>;

#[derive(Debug, Error)]
pub enum ScalgoError {
    /// The document could not be opened
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already open source failed
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("No colon found in input string")]
    NoColon,

    #[error("No label found in input string")]
    NoLabel,

    #[error(transparent)]
    InvalidNumber(#[from] ParseFloatError),

    /// A data line named a unit no category recognizes
    #[error("failed to create record: {0}")]
    Record(#[source] UnitError),

    /// A unit error raised outside record construction (e.g. `@scale`)
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Carries the full directive line as read
    #[error("Unknown setting {0}")]
    UnknownSetting(String),

    #[error("No records found")]
    NoRecords,
}

impl ScalgoError {
    /// True for failures of the underlying source rather than its content
    pub fn is_resource_error(&self) -> bool {
        matches!(self, ScalgoError::Open { .. } | ScalgoError::Io(_))
    }
}
