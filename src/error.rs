use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not open {file:?}")]
    Open {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed row in {file:?} at line {line:?}")]
    Row {
        file: PathBuf,
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    #[error("'{value}' is not a valid time in {file:?} at line {line:?}")]
    InvalidTime {
        file: PathBuf,
        line: Option<u64>,
        value: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid time")]
pub struct TimeError(pub String);
