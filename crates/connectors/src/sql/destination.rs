use crate::sql::error::DbError;
use async_trait::async_trait;

/// Write side of an import.
///
/// Accepts one opaque SQL statement and reports how many rows it affected.
/// Database failures surface unmodified; no retry or transaction handling
/// happens at this seam.
#[async_trait]
pub trait SqlDestination: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<u64, DbError>;
}
