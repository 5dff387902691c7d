use crate::{
    ast::insert::{Insert, OnDuplicateKeyUpdate},
    dialect::MySql,
};
use model::core::value::Value;

pub trait Render {
    fn render(&self, r: &mut Renderer);
}

/// Accumulates the SQL text for one statement.
pub struct Renderer {
    pub sql: String,
    pub dialect: MySql,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            sql: String::new(),
            dialect: MySql,
        }
    }

    pub fn finish(self) -> String {
        self.sql
    }

    fn render_value(&mut self, value: &Value) {
        let literal = self.dialect.quote_literal(&value.to_string());
        self.sql.push_str(&literal);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

/// Renders the full statement text for an insert.
pub fn render(insert: &Insert) -> String {
    let mut renderer = Renderer::new();
    insert.render(&mut renderer);
    renderer.finish()
}

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        // 1. INSERT INTO table (...)
        r.sql.push_str("INSERT INTO ");
        r.sql.push_str(&r.dialect.quote_identifier(&self.table));
        r.sql.push_str(" (");
        let quoted_columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| r.dialect.quote_identifier(c))
            .collect();
        r.sql.push_str(&quoted_columns.join(", "));
        r.sql.push(')');

        // 2. VALUES (...), (...)
        render_values(self, r);

        if let Some(on_duplicate) = &self.on_duplicate {
            on_duplicate.render(r);
        }
        r.sql.push(';');
    }
}

fn render_values(insert: &Insert, r: &mut Renderer) {
    r.sql.push_str(" VALUES ");
    for (i, row) in insert.values.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        r.sql.push('(');
        for (j, val) in row.iter().enumerate() {
            if j > 0 {
                r.sql.push_str(", ");
            }
            r.render_value(val);
        }
        r.sql.push(')');
    }
}

impl Render for OnDuplicateKeyUpdate {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(" ON DUPLICATE KEY UPDATE ");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            let quoted = r.dialect.quote_identifier(column);
            r.sql.push_str(&quoted);
            r.sql.push_str(" = VALUES(");
            r.sql.push_str(&quoted);
            r.sql.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::insert::{Insert, OnDuplicateKeyUpdate},
        renderer::render,
    };
    use model::core::value::Value;

    fn string(val: &str) -> Value {
        Value::String(val.to_string())
    }

    #[test]
    fn test_render_batch_insert() {
        let ast = Insert {
            table: "products".to_string(),
            columns: vec!["sku".to_string(), "unit_price".to_string()],
            values: vec![
                vec![string("A-1"), Value::Float(12.5)],
                vec![string("B-2"), Value::Float(99.0)],
            ],
            on_duplicate: None,
        };

        assert_eq!(
            render(&ast),
            "INSERT INTO `products` (`sku`, `unit_price`) \
             VALUES ('A-1', '12.5'), ('B-2', '99');"
        );
    }

    #[test]
    fn test_render_insert_with_upsert_clause() {
        let ast = Insert {
            table: "products".to_string(),
            columns: vec!["sku".to_string(), "unit_price".to_string()],
            values: vec![vec![string("A-1"), Value::Float(12.5)]],
            on_duplicate: Some(OnDuplicateKeyUpdate {
                columns: vec!["sku".to_string(), "unit_price".to_string()],
            }),
        };

        assert_eq!(
            render(&ast),
            "INSERT INTO `products` (`sku`, `unit_price`) VALUES ('A-1', '12.5') \
             ON DUPLICATE KEY UPDATE `sku` = VALUES(`sku`), `unit_price` = VALUES(`unit_price`);"
        );
    }

    #[test]
    fn test_values_with_embedded_quotes_stay_single_literals() {
        let ast = Insert {
            table: "products".to_string(),
            columns: vec!["product_name".to_string()],
            values: vec![vec![string("6'' sander")]],
            on_duplicate: None,
        };

        assert_eq!(
            render(&ast),
            "INSERT INTO `products` (`product_name`) VALUES ('6'''' sander');"
        );
    }
}
