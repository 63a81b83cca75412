//! PostgreSQL table metadata for Rust
//!
//! Reflects a table's columns from the PostgreSQL catalog into typed fields.
//! Each field converts values both ways: raw input to a host [`Value`], and
//! raw input to a [`FieldValue`] (placeholder plus bindings) for a
//! parameterized statement, applying the column's null, range, length and
//! format rules on the way.
//!
//! # Example
//!
//! ```no_run
//! use pg_dbtable_rs::{Bank, Field, QueryExecutor, Result, Table, Value};
//!
//! fn load(executor: &mut impl QueryExecutor, bank: &Bank) -> Result<()> {
//!     let mut table = Table::new("widgets", Some("inventory"));
//!     table.run_field_lookup(executor)?;
//!
//!     if let Some(label) = table.field("label") {
//!         let bound = label.to_bound_value(&Value::from("Sprocket"))?;
//!         println!("{} = {}", label.fqn(Some("w")), bound.value_marker());
//!     }
//!
//!     let table = table.bank_it(bank, Some("main"));
//!     println!("{}", table.fields().describe_all());
//!     Ok(())
//! }
//! ```

pub mod bank;
pub mod bind;
pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod reflect;
pub mod table;
pub mod types;

// Re-export main types
pub use bank::Bank;
pub use bind::{bind_key, BindValue, Bindings, FieldValue};
pub use catalog::{QueryExecutor, Row, RowColumns};
pub use config::{LookupOptions, DEFAULT_SCHEMA};
pub use error::{Error, JsonErrorKind, Result};
pub use field::{
    ArrayField, BitString, Boolean, Character, Date, Enumerated, Field, FieldKind, FieldProps,
    FieldSet, Integer, Json, Network, Numeric, PointField, RangeField, Time, Xml,
};
pub use reflect::{CatalogType, FieldDef, PropertyLookup, Reflection};
pub use table::Table;
pub use types::{Point, Value};
