use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell value after validation and sanitization.
///
/// The importer only ever produces raw strings or decimal numbers; both are
/// rendered as quoted string literals on the wire, matching the bulk INSERT
/// contract this tool inherited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::String(v) => v.parse::<f64>().ok(),
        }
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => f.write_str(v),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::String(raw.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_float_display_drops_trailing_zero() {
        assert_eq!(Value::Float(12.50).to_string(), "12.5");
        assert_eq!(Value::Float(1234567.89).to_string(), "1234567.89");
    }

    #[test]
    fn test_as_f64_parses_strings() {
        assert_eq!(Value::String("3.5".into()).as_f64(), Some(3.5));
        assert_eq!(Value::String("abc".into()).as_f64(), None);
    }
}
