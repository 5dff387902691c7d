use connectors::{file::csv::error::FileError, sql::error::DbError};
use engine::error::{EngineError, ImportError};
use model::mapping::MappingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the mapping configuration file: {0}")]
    ConfigFileRead(#[from] std::io::Error),

    #[error("Invalid mapping configuration: {0}")]
    Config(#[from] MappingError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Failed to read the input file: {0}")]
    InputFile(#[from] FileError),

    #[error("Import rejected: {0}")]
    Import(#[from] ImportError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
