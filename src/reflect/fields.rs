//! Column definition lookup.

use crate::bind::{BindValue, Bindings};
use crate::catalog::{sql, QueryExecutor, Row};
use crate::error::{Error, Result};

/// One column as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDef {
    pub name: String,
    /// `information_schema` data type, or the type kind (`enum`, `range`,
    /// ...) for user-defined types.
    pub data_type: String,
    /// `YES` or `NO`.
    pub is_nullable: String,
    /// Default expression, e.g. `'abc'::text` or `nextval('seq'::regclass)`.
    pub default_value: Option<String>,
    pub character_maximum_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_scale: Option<i64>,
    pub type_schema: String,
    /// Underlying type name (`int4`, `varchar`, `timestamptz`, enum name).
    pub type_name: String,
    pub comment: Option<String>,
}

impl FieldDef {
    /// Read a row of [`sql::FIELDS_SQL`] output.
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            name: required(row, "column_name")?,
            data_type: row.get_str("data_type")?.unwrap_or_default(),
            is_nullable: required(row, "is_nullable")?,
            default_value: row.get_str("column_default")?,
            character_maximum_length: row.get_i64("character_maximum_length")?,
            numeric_precision: row.get_i64("numeric_precision")?,
            numeric_scale: row.get_i64("numeric_scale")?,
            type_schema: row.get_str("udt_schema")?.unwrap_or_default(),
            type_name: row.get_str("udt_name")?.unwrap_or_default(),
            comment: row.get_str("column_comment")?,
        })
    }

    pub fn is_nullable(&self) -> bool {
        self.is_nullable == "YES"
    }
}

fn required(row: &Row, column: &str) -> Result<String> {
    row.get_str(column)?
        .ok_or_else(|| Error::type_conversion(format!("column {} is NULL", column)))
}

/// Looks up the column definitions of one table.
#[derive(Debug, Clone)]
pub struct FieldsLookup<'a> {
    schema: &'a str,
    table: &'a str,
}

impl<'a> FieldsLookup<'a> {
    pub fn new(schema: &'a str, table: &'a str) -> Self {
        Self { schema, table }
    }

    /// Column definitions in ordinal order.
    pub fn run<E: QueryExecutor + ?Sized>(&self, executor: &mut E) -> Result<Vec<FieldDef>> {
        let mut params = Bindings::new();
        params.insert(":schema".to_string(), BindValue::from(self.schema));
        params.insert(":table".to_string(), BindValue::from(self.table));

        executor
            .query(sql::FIELDS_SQL, &params)?
            .iter()
            .map(FieldDef::from_row)
            .collect()
    }
}
