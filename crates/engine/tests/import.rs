//! End-to-end import tests against a recording destination.

use async_trait::async_trait;
use connectors::sql::{destination::SqlDestination, error::DbError};
use engine::{error::EngineError, service::ImportService};
use model::mapping::{FieldSpec, MappingRegistry, TableMapping, ValidationRule};
use std::{
    io::Write,
    sync::{Arc, Mutex},
};
use tempfile::NamedTempFile;

/// Captures every executed statement instead of talking to a database.
struct RecordingDestination {
    statements: Mutex<Vec<String>>,
    affected_rows: u64,
}

impl RecordingDestination {
    fn new(affected_rows: u64) -> Arc<Self> {
        Arc::new(RecordingDestination {
            statements: Mutex::new(Vec::new()),
            affected_rows,
        })
    }

    fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlDestination for RecordingDestination {
    async fn execute(&self, sql: &str) -> Result<u64, DbError> {
        self.statements.lock().unwrap().push(sql.to_string());
        Ok(self.affected_rows)
    }
}

fn products_registry() -> MappingRegistry {
    let mapping = TableMapping::new(
        "products",
        vec![
            FieldSpec::new("sku", "sku").required(),
            FieldSpec::new("title", "product_name"),
            FieldSpec::new("price", "unit_price").validated(ValidationRule::Decimal),
        ],
    )
    .expect("valid mapping");

    let mut registry = MappingRegistry::default();
    registry.insert(mapping);
    registry
}

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{content}").expect("write csv fixture");
    file
}

fn service(destination: Arc<RecordingDestination>) -> ImportService {
    ImportService::new(products_registry(), destination)
}

#[tokio::test]
async fn test_import_executes_one_statement_per_call() {
    let destination = RecordingDestination::new(2);
    let file = csv_file("sku;title;price\nA-1;Sander;12,50\nB-2;Drill;99\n");

    let result = service(destination.clone())
        .import(file.path().to_str().unwrap(), "products")
        .await
        .expect("import runs");

    assert!(result.is_success());
    let statements = destination.statements();
    assert_eq!(statements.len(), 1);
    assert_eq!(
        statements[0],
        "INSERT INTO `products` (`sku`, `product_name`, `unit_price`) \
         VALUES ('A-1', 'Sander', '12.5'), ('B-2', 'Drill', '99') \
         ON DUPLICATE KEY UPDATE `sku` = VALUES(`sku`), \
         `product_name` = VALUES(`product_name`), \
         `unit_price` = VALUES(`unit_price`);"
    );
}

#[tokio::test]
async fn test_reimport_with_zero_affected_rows_still_succeeds() {
    // An identical re-import under upsert touches no rows; that is the
    // idempotent success case, not a failure.
    let destination = RecordingDestination::new(0);
    let file = csv_file("sku;title;price\nA-1;Sander;12,50\n");

    let result = service(destination)
        .import(file.path().to_str().unwrap(), "products")
        .await
        .expect("import runs");

    assert!(result.is_success());
}

#[tokio::test]
async fn test_missing_header_columns_skip_execution() {
    let destination = RecordingDestination::new(1);
    let file = csv_file("title\nSander\n");

    let result = service(destination.clone())
        .import(file.path().to_str().unwrap(), "products")
        .await
        .expect("import runs");

    assert!(!result.is_success());
    assert_eq!(
        result.message(),
        "Missing columns: sku, price. Please review the file and try again."
    );
    assert!(destination.statements().is_empty());
}

#[tokio::test]
async fn test_empty_required_field_skips_execution() {
    let destination = RecordingDestination::new(1);
    let file = csv_file("sku;title;price\nA-1;Sander;1\n;Drill;2\n");

    let result = service(destination.clone())
        .import(file.path().to_str().unwrap(), "products")
        .await
        .expect("import runs");

    assert!(!result.is_success());
    assert_eq!(result.message(), "Column sku cannot be empty");
    assert!(destination.statements().is_empty());
}

#[tokio::test]
async fn test_row_field_count_mismatch_skips_execution() {
    let destination = RecordingDestination::new(1);
    let file = csv_file("sku;title;price\nA-1;Sander\n");

    let result = service(destination.clone())
        .import(file.path().to_str().unwrap(), "products")
        .await
        .expect("import runs");

    assert!(!result.is_success());
    assert_eq!(
        result.message(),
        "Row 1 has 2 fields but the mapping defines 3"
    );
    assert!(destination.statements().is_empty());
}

#[tokio::test]
async fn test_unmapped_header_column_skips_execution() {
    let destination = RecordingDestination::new(1);
    let file = csv_file("sku;title;price;stock\nA-1;Sander;1;40\n");

    let result = service(destination.clone())
        .import(file.path().to_str().unwrap(), "products")
        .await
        .expect("import runs");

    assert!(!result.is_success());
    assert_eq!(
        result.message(),
        "Header column 'stock' is not present in the table mapping"
    );
    assert!(destination.statements().is_empty());
}

#[tokio::test]
async fn test_header_only_file_reports_nothing_to_import() {
    let destination = RecordingDestination::new(1);
    let file = csv_file("sku;title;price\n");

    let result = service(destination.clone())
        .import(file.path().to_str().unwrap(), "products")
        .await
        .expect("import runs");

    assert!(!result.is_success());
    assert_eq!(result.message(), "The file contains no rows to import");
    assert!(destination.statements().is_empty());
}

#[tokio::test]
async fn test_unknown_table_is_fatal() {
    let destination = RecordingDestination::new(1);
    let file = csv_file("sku;title;price\nA-1;Sander;1\n");

    let err = service(destination)
        .import(file.path().to_str().unwrap(), "orders")
        .await
        .expect_err("unknown table must not produce an outcome");

    assert!(matches!(err, EngineError::Mapping(_)));
}

#[tokio::test]
async fn test_missing_file_is_fatal() {
    let destination = RecordingDestination::new(1);

    let err = service(destination)
        .import("/no/such/import.csv", "products")
        .await
        .expect_err("missing file must not produce an outcome");

    assert!(matches!(err, EngineError::File(_)));
}

#[tokio::test]
async fn test_dry_run_never_executes() {
    let destination = RecordingDestination::new(1);
    let file = csv_file("sku;title;price\nA-1;Sander;12,50\n");

    let sql = service(destination.clone())
        .dry_run(file.path().to_str().unwrap(), "products", true)
        .expect("dry run builds");

    assert!(sql.starts_with("INSERT INTO `products`"));
    assert!(sql.contains("ON DUPLICATE KEY UPDATE"));
    assert!(destination.statements().is_empty());
}
