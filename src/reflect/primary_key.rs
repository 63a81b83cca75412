//! Primary key lookup.

use crate::bind::{BindValue, Bindings};
use crate::catalog::{sql, QueryExecutor};
use crate::error::Result;

/// Looks up the columns making up a table's primary key.
#[derive(Debug, Clone)]
pub struct PrimaryKeyLookup<'a> {
    schema: &'a str,
    table: &'a str,
}

impl<'a> PrimaryKeyLookup<'a> {
    pub fn new(schema: &'a str, table: &'a str) -> Self {
        Self { schema, table }
    }

    /// Key column names in key order. Empty when the table has no primary key.
    pub fn run<E: QueryExecutor + ?Sized>(&self, executor: &mut E) -> Result<Vec<String>> {
        let mut params = Bindings::new();
        params.insert(":schema".to_string(), BindValue::from(self.schema));
        params.insert(":table".to_string(), BindValue::from(self.table));

        let rows = executor.query(sql::PRIMARY_KEY_SQL, &params)?;

        let mut keys = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(name) = row.get_str("primary_key")? {
                keys.push(name);
            }
        }
        Ok(keys)
    }
}
