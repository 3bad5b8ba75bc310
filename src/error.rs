use polars::prelude::PolarsError;
use std::fmt;
use std::path::PathBuf;

use crate::data::Table;

/// Pipeline error types
#[derive(Debug)]
pub enum DataError {
    /// Source data directory is absent or unreadable
    MissingDataDirectory(PathBuf),
    /// A required table was not found in the loaded dataset
    MissingTable(Table),
    /// I/O failure while scanning the data directory
    Io(std::io::Error),
    /// DataFrame operation failure (includes strict timestamp parse errors)
    Polars(PolarsError),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::MissingDataDirectory(path) => {
                write!(f, "Missing data directory: {}", path.display())
            }
            DataError::MissingTable(table) => write!(f, "Missing table: {}", table),
            DataError::Io(err) => write!(f, "I/O error: {}", err),
            DataError::Polars(err) => write!(f, "DataFrame error: {}", err),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err)
    }
}

impl From<PolarsError> for DataError {
    fn from(err: PolarsError) -> Self {
        DataError::Polars(err)
    }
}
