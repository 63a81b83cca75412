//! Cache of reflected tables.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::config::DEFAULT_SCHEMA;
use crate::table::Table;

/// Keeps reflected tables so each is only looked up once.
///
/// Entries are keyed by `[connection:]schema.name` and live as long as the
/// bank. Safe to share between threads.
#[derive(Debug, Default)]
pub struct Bank {
    tables: Mutex<HashMap<String, Arc<Table>>>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a table under its name, schema and the optional connection
    /// name. Tables without a name are ignored.
    pub fn deposit(&self, table: Arc<Table>, connection: Option<&str>) {
        let Some(key) = bank_key(table.name(), Some(table.schema()), connection) else {
            return;
        };

        debug!("[BANK] Deposit {}", key);
        self.lock().insert(key, table);
    }

    /// Fetch a previously deposited table. A missing schema means `public`.
    pub fn get(
        &self,
        name: &str,
        schema: Option<&str>,
        connection: Option<&str>,
    ) -> Option<Arc<Table>> {
        let key = bank_key(name, schema, connection)?;
        self.lock().get(&key).cloned()
    }

    /// Number of tables held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Table>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn bank_key(name: &str, schema: Option<&str>, connection: Option<&str>) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    let schema = match schema {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_SCHEMA,
    };

    Some(match connection {
        Some(conn) if !conn.is_empty() => format!("{}:{}.{}", conn, schema, name),
        _ => format!("{}.{}", schema, name),
    })
}
