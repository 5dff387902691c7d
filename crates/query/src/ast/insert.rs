//! Defines the AST for the bulk INSERT statement.

use model::core::value::Value;

/// A multi-row INSERT with an optional MySQL upsert clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    /// The rows of values to be inserted. Each inner vector represents a single row.
    pub values: Vec<Vec<Value>>,
    /// Optional `ON DUPLICATE KEY UPDATE` clause, present when upsert mode
    /// is enabled.
    pub on_duplicate: Option<OnDuplicateKeyUpdate>,
}

/// Replaces the named columns with `VALUES(col)` when the insert hits a
/// unique-key conflict, turning the statement into an upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct OnDuplicateKeyUpdate {
    pub columns: Vec<String>,
}
