//! Caller-supplied row predicates for `DatabaseContext::get_filtered`.
//!
//! A [`Filter`] is a conjunction of column comparisons. It is translated to a
//! parameterized `WHERE` clause; values are always bound, never spliced into
//! the statement. Column names are checked against the record type before
//! any SQL is built.
//!
//! ```rust
//! use pricebook::db::filter::Filter;
//!
//! let cheap_pens = Filter::new().like("Name", "%pen%").lt("Price", 5.0);
//! ```

use super::error::{DbError, DbResult};
use super::table::{quote, Table};
use rusqlite::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
}

impl Operator {
    fn sql(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Like => "LIKE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub value: Value,
}

/// All conditions must hold. An empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, column: &str, operator: Operator, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            column: column.to_string(),
            operator,
            value: value.into(),
        });
        self
    }

    pub fn eq(self, column: &str, value: impl Into<Value>) -> Self {
        self.with_condition(column, Operator::Equal, value)
    }

    pub fn ne(self, column: &str, value: impl Into<Value>) -> Self {
        self.with_condition(column, Operator::NotEqual, value)
    }

    pub fn gt(self, column: &str, value: impl Into<Value>) -> Self {
        self.with_condition(column, Operator::GreaterThan, value)
    }

    pub fn ge(self, column: &str, value: impl Into<Value>) -> Self {
        self.with_condition(column, Operator::GreaterThanOrEqual, value)
    }

    pub fn lt(self, column: &str, value: impl Into<Value>) -> Self {
        self.with_condition(column, Operator::LessThan, value)
    }

    pub fn le(self, column: &str, value: impl Into<Value>) -> Self {
        self.with_condition(column, Operator::LessThanOrEqual, value)
    }

    /// SQL `LIKE` pattern match; `%` and `_` are wildcards and `\` escapes them.
    pub fn like(self, column: &str, pattern: &str) -> Self {
        self.with_condition(column, Operator::Like, pattern.to_string())
    }

    /// Case-insensitive substring match. `text` is matched literally.
    pub fn contains(self, column: &str, text: &str) -> Self {
        let pattern = format!("%{}%", escape_like(text));
        self.like(column, &pattern)
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Builds the `WHERE` clause (empty for an empty filter) and its bound values.
    pub(crate) fn to_sql<T: Table>(&self) -> DbResult<(String, Vec<Value>)> {
        if self.conditions.is_empty() {
            return Ok((String::new(), Vec::new()));
        }

        let mut clauses = Vec::with_capacity(self.conditions.len());
        let mut values = Vec::with_capacity(self.conditions.len());
        for (i, condition) in self.conditions.iter().enumerate() {
            if !T::has_column(&condition.column) {
                return Err(DbError::UnknownColumn {
                    table: T::NAME,
                    column: condition.column.clone(),
                });
            }
            let mut clause = format!("{} {} ?{}", quote(&condition.column), condition.operator.sql(), i + 1);
            if condition.operator == Operator::Like {
                clause.push_str(" ESCAPE '\\'");
            }
            clauses.push(clause);
            values.push(condition.value.clone());
        }

        Ok((format!("WHERE {}", clauses.join(" AND ")), values))
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::product::Product;

    #[test]
    fn empty_filter_has_no_where_clause() {
        let (sql, values) = Filter::new().to_sql::<Product>().unwrap();
        assert!(sql.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn conditions_are_joined_with_and() {
        let filter = Filter::new().like("Name", "%pen%").ge("Price", 1.0);
        let (sql, values) = filter.to_sql::<Product>().unwrap();

        assert_eq!(sql, "WHERE \"Name\" LIKE ?1 ESCAPE '\\' AND \"Price\" >= ?2");
        assert_eq!(values, vec![Value::Text("%pen%".to_string()), Value::Real(1.0)]);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let err = Filter::new().eq("Colour", "red".to_string()).to_sql::<Product>().unwrap_err();
        assert!(matches!(err, DbError::UnknownColumn { column, .. } if column == "Colour"));
    }

    #[test]
    fn contains_escapes_wildcards() {
        let filter = Filter::new().contains("Name", r"50%_off\");
        assert_eq!(filter.conditions()[0].value, Value::Text(r"%50\%\_off\\%".to_string()));
    }
}
