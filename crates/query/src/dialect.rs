//! MySQL-specific quoting rules.

#[derive(Debug, Clone, Default)]
pub struct MySql;

impl MySql {
    /// Wraps an identifier (table or column name) in backticks.
    pub fn quote_identifier(&self, ident: &str) -> String {
        format!(r#"`{ident}`"#)
    }

    /// Renders a value as a single-quoted string literal.
    ///
    /// The wire contract inlines every value as a string literal instead of
    /// binding parameters; embedded quotes and backslashes are escaped so a
    /// cell value cannot terminate the literal early.
    pub fn quote_literal(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('\'');
        for ch in raw.chars() {
            match ch {
                '\'' => out.push_str("''"),
                '\\' => out.push_str(r"\\"),
                _ => out.push(ch),
            }
        }
        out.push('\'');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::MySql;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(MySql.quote_identifier("unit_price"), "`unit_price`");
    }

    #[test]
    fn test_quote_literal_escapes_quotes_and_backslashes() {
        assert_eq!(MySql.quote_literal("plain"), "'plain'");
        assert_eq!(MySql.quote_literal("O'Brien"), "'O''Brien'");
        assert_eq!(MySql.quote_literal(r"a\b"), r"'a\\b'");
    }
}
