//! Catalog access.
//!
//! Reflection talks to the database only through [`QueryExecutor`]: a
//! statement with named placeholders goes in, rows come out. The catalog
//! statements themselves live in [`sql`].

mod placeholder;
#[cfg(feature = "postgres")]
mod driver;
mod row;
pub mod sql;

pub use placeholder::{pg_cast, to_positional};
pub use row::{Row, RowColumns};

use crate::bind::Bindings;
use crate::error::Result;

/// Runs parameterized statements and returns their rows.
///
/// `params` maps placeholder keys (`:schema`) to values. Failures should be
/// reported as [`Error::DataAccess`](crate::Error::DataAccess); they are
/// passed through to the caller unchanged.
pub trait QueryExecutor {
    fn query(&mut self, sql: &str, params: &Bindings) -> Result<Vec<Row>>;
}

impl<E: QueryExecutor + ?Sized> QueryExecutor for &mut E {
    fn query(&mut self, sql: &str, params: &Bindings) -> Result<Vec<Row>> {
        (**self).query(sql, params)
    }
}
