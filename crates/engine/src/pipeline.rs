//! The import pipeline as pure stages over an immutable mapping.
//!
//! Each stage consumes the previous stage's output and returns a result;
//! nothing is accumulated in shared mutable state, so a half-finished
//! import can never leak into the next call.

use crate::error::ImportError;
use connectors::file::csv::table::CsvTable;
use model::{
    core::{sanitize::sanitize_decimal, value::Value},
    mapping::{TableMapping, ValidationRule},
};
use query::ast::insert::{Insert, OnDuplicateKeyUpdate};
use tracing::debug;

/// Resolves the header into physical destination columns, in header order.
///
/// Fails when the header lacks a mapped logical column (all missing names
/// are reported at once), or when it carries a column the mapping does not
/// know; the physical name of such a column would be undefined.
pub fn reconcile_header(
    mapping: &TableMapping,
    header: &[String],
) -> Result<Vec<String>, ImportError> {
    let missing: Vec<String> = mapping
        .logical_names()
        .filter(|name| !header.iter().any(|h| h == name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns { columns: missing });
    }

    header
        .iter()
        .map(|logical| {
            mapping
                .get(logical)
                .map(|spec| spec.column_name.clone())
                .ok_or_else(|| ImportError::UnmappedColumn(logical.clone()))
        })
        .collect()
}

/// Validates and sanitizes every non-blank row into a value tuple.
///
/// Row fields are associated with the mapping's definition order, not the
/// header order. The two only diverge when the header is shuffled relative
/// to the mapping; that association is part of the inherited wire contract
/// and is kept as is. A row whose field count differs from the mapping is
/// rejected outright: a short row would dodge the required-field check for
/// its absent fields and produce a tuple narrower than the column list.
/// Validation is fail-fast: the first empty required field aborts the
/// whole import before any tuple reaches the database.
pub fn validate_rows<'a>(
    mapping: &TableMapping,
    rows: impl Iterator<Item = &'a [String]>,
) -> Result<Vec<Vec<Value>>, ImportError> {
    let mut tuples = Vec::new();
    for (idx, row) in rows.enumerate() {
        if row.len() != mapping.fields().len() {
            return Err(ImportError::FieldCountMismatch {
                row: idx + 1,
                expected: mapping.fields().len(),
                actual: row.len(),
            });
        }

        let mut values = Vec::with_capacity(mapping.fields().len());
        for (spec, raw) in mapping.fields().iter().zip(row.iter()) {
            if raw.is_empty() && spec.required {
                return Err(ImportError::RequiredFieldEmpty(spec.name.clone()));
            }
            values.push(sanitize_field(spec.validate, raw));
        }
        tuples.push(values);
    }
    Ok(tuples)
}

fn sanitize_field(rule: Option<ValidationRule>, raw: &str) -> Value {
    match rule {
        Some(ValidationRule::Decimal) => Value::Float(sanitize_decimal(raw)),
        None => Value::String(raw.to_string()),
    }
}

/// Assembles the single bulk INSERT from the reconciled columns and the
/// validated tuples. Upsert mode updates every inserted column on a
/// unique-key conflict, which makes re-importing the same file idempotent.
pub fn build_statement(
    table: &str,
    columns: Vec<String>,
    values: Vec<Vec<Value>>,
    upsert: bool,
) -> Result<Insert, ImportError> {
    if values.is_empty() {
        return Err(ImportError::NothingToImport);
    }

    let on_duplicate = upsert.then(|| OnDuplicateKeyUpdate {
        columns: columns.clone(),
    });

    Ok(Insert {
        table: table.to_string(),
        columns,
        values,
        on_duplicate,
    })
}

/// Runs a parsed file through every build stage, producing the final SQL.
pub fn plan_import(
    mapping: &TableMapping,
    csv: &CsvTable,
    upsert: bool,
) -> Result<String, ImportError> {
    let columns = reconcile_header(mapping, &csv.header)?;
    let tuples = validate_rows(mapping, csv.data_rows())?;

    let rows = tuples.len();
    let insert = build_statement(&mapping.table, columns, tuples, upsert)?;
    let sql = query::renderer::render(&insert);

    debug!(table = %mapping.table, rows, upsert, "assembled bulk insert");
    Ok(sql)
}
