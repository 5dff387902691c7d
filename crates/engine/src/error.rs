use connectors::{file::csv::error::FileError, sql::error::DbError};
use model::mapping::MappingError;
use thiserror::Error;

/// Import violations detected before any database call.
///
/// Each variant maps to a single user-facing message; the service turns
/// them into an error outcome instead of propagating them as failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("Missing columns: {}. Please review the file and try again.", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Column {0} cannot be empty")]
    RequiredFieldEmpty(String),

    #[error("Row {row} has {actual} fields but the mapping defines {expected}")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Header column '{0}' is not present in the table mapping")]
    UnmappedColumn(String),

    #[error("The file contains no rows to import")]
    NothingToImport,
}

/// Failures that are not an import outcome: configuration defects, file
/// access problems and database errors propagate to the caller unmodified.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Db(#[from] DbError),

    /// Only surfaced by dry runs, where there is no result message to
    /// carry the violation; `ImportService::import` reports these as an
    /// [`model::result::ImportResult::Error`] instead.
    #[error("Import rejected: {0}")]
    Import(#[from] ImportError),
}
