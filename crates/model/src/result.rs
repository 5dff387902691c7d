use serde::Serialize;

/// Outcome of one import call. Exactly one message is produced per call;
/// it serializes to `{"success": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportResult {
    Success(String),
    Error(String),
}

impl ImportResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportResult::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            ImportResult::Success(msg) | ImportResult::Error(msg) => msg,
        }
    }
}
