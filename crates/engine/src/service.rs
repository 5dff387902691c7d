use crate::{error::EngineError, pipeline};
use connectors::{file::csv::table::CsvTable, sql::destination::SqlDestination};
use model::{mapping::MappingRegistry, result::ImportResult};
use std::sync::Arc;
use tracing::{info, warn};

const SUCCESS_MESSAGE: &str = "The import completed successfully.";

/// Fixed entry point for one (file, table) import.
///
/// Upsert mode is always enabled, so re-importing identical file content
/// against a table with a unique key leaves the table unchanged. Each call
/// runs the whole pipeline to completion and issues at most one write
/// statement.
pub struct ImportService {
    registry: MappingRegistry,
    destination: Arc<dyn SqlDestination>,
}

impl ImportService {
    pub fn new(registry: MappingRegistry, destination: Arc<dyn SqlDestination>) -> Self {
        ImportService {
            registry,
            destination,
        }
    }

    /// Imports one file into its configured table.
    ///
    /// Validation violations become an [`ImportResult::Error`] without
    /// touching the database; configuration, file and database failures
    /// propagate as [`EngineError`].
    pub async fn import(&self, csv_path: &str, table: &str) -> Result<ImportResult, EngineError> {
        let mapping = self.registry.get(table)?;
        let csv = CsvTable::load(csv_path)?;

        let sql = match pipeline::plan_import(mapping, &csv, true) {
            Ok(sql) => sql,
            Err(err) => {
                warn!(table, %err, "import rejected before execution");
                return Ok(ImportResult::Error(err.to_string()));
            }
        };

        let affected = self.destination.execute(&sql).await?;
        info!(table, affected, "bulk insert executed");

        Ok(ImportResult::Success(SUCCESS_MESSAGE.to_string()))
    }

    /// Builds the statement for a file without executing it.
    pub fn dry_run(
        &self,
        csv_path: &str,
        table: &str,
        upsert: bool,
    ) -> Result<String, EngineError> {
        let mapping = self.registry.get(table)?;
        let csv = CsvTable::load(csv_path)?;
        let sql = pipeline::plan_import(mapping, &csv, upsert)?;
        Ok(sql)
    }
}
