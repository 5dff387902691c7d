//! Per-table field mapping configuration.
//!
//! A mapping translates the logical column names found in a file header to
//! the physical columns of the destination table, and carries the
//! required/validation metadata applied to every row. Mappings are loaded
//! once from a JSON document before any import runs and are immutable
//! afterwards.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("No field mapping configured for table '{0}'")]
    UnknownTable(String),

    #[error("Duplicate logical column '{column}' in mapping for table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("Mapping for table '{0}' defines no fields")]
    EmptyMapping(String),

    #[error("Failed to parse mapping configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validation rule applied to a field's value before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationRule {
    Decimal,
}

/// One logical column and its destination.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    /// Logical name, as it appears in the file header.
    pub name: String,
    /// Physical column in the destination table.
    pub column_name: String,
    /// An empty value in a required field aborts the import.
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub validate: Option<ValidationRule>,
}

impl FieldSpec {
    pub fn new(name: &str, column_name: &str) -> Self {
        FieldSpec {
            name: name.to_string(),
            column_name: column_name.to_string(),
            required: false,
            validate: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn validated(mut self, rule: ValidationRule) -> Self {
        self.validate = Some(rule);
        self
    }
}

/// Ordered field specs for one destination table.
///
/// The definition order matters: row fields are associated with specs
/// positionally during validation, independent of the header order.
#[derive(Debug, Clone)]
pub struct TableMapping {
    pub table: String,
    fields: Vec<FieldSpec>,
}

impl TableMapping {
    pub fn new(table: &str, fields: Vec<FieldSpec>) -> Result<Self, MappingError> {
        if fields.is_empty() {
            return Err(MappingError::EmptyMapping(table.to_string()));
        }

        {
            let mut seen = HashSet::new();
            for field in &fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(MappingError::DuplicateColumn {
                        table: table.to_string(),
                        column: field.name.clone(),
                    });
                }
            }
        }

        Ok(TableMapping {
            table: table.to_string(),
            fields,
        })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Logical names in definition order.
    pub fn logical_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn get(&self, logical: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == logical)
    }
}

/// All table mappings known to the importer.
#[derive(Debug, Clone, Default)]
pub struct MappingRegistry {
    tables: HashMap<String, TableMapping>,
}

impl MappingRegistry {
    /// Parses a `{"<table>": [ <field specs> ]}` JSON document.
    pub fn from_json(raw: &str) -> Result<Self, MappingError> {
        let tables: HashMap<String, Vec<FieldSpec>> = serde_json::from_str(raw)?;

        let mut registry = MappingRegistry::default();
        for (table, fields) in tables {
            registry.insert(TableMapping::new(&table, fields)?);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, mapping: TableMapping) {
        self.tables.insert(mapping.table.clone(), mapping);
    }

    /// An unknown table is a configuration defect, not an import outcome.
    pub fn get(&self, table: &str) -> Result<&TableMapping, MappingError> {
        self.tables
            .get(table)
            .ok_or_else(|| MappingError::UnknownTable(table.to_string()))
    }
}
