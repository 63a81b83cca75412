//! [`QueryExecutor`] for the synchronous `postgres` client.

use std::sync::Arc;

use postgres::types::{private::BytesMut, to_sql_checked, IsNull, ToSql, Type};

use super::{to_positional, QueryExecutor, Row, RowColumns};
use crate::bind::{BindValue, Bindings};
use crate::error::{Error, Result};
use crate::types::Value;

impl ToSql for BindValue {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match self {
            BindValue::Null => Ok(IsNull::Yes),
            BindValue::Bool(value) => value.to_sql(ty, out),
            BindValue::Int(value) => value.to_sql(ty, out),
            BindValue::Float(value) => value.to_sql(ty, out),
            BindValue::Text(value) => value.to_sql(ty, out),
        }
    }

    // Non-null values always travel with an explicit cast to one of BOOL,
    // INT8, FLOAT8 or TEXT. NULL is sent uncast and fits any column type.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

impl QueryExecutor for postgres::Client {
    fn query(&mut self, sql: &str, params: &Bindings) -> Result<Vec<Row>> {
        let (sql, values) = to_positional(sql, params)?;
        let args = values
            .iter()
            .map(|value| *value as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        let rows = postgres::Client::query(self, sql.as_str(), &args)?;

        let Some(first) = rows.first() else {
            return Ok(Vec::new());
        };
        let columns = Arc::new(RowColumns::new(
            first.columns().iter().map(|c| c.name().to_string()),
        ));

        rows.iter()
            .map(|row| {
                let values = (0..row.len())
                    .map(|idx| postgres_to_value(row, idx))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Row::new(values, Arc::clone(&columns)))
            })
            .collect()
    }
}

/// Converts one column of a driver row into a [`Value`].
fn postgres_to_value(row: &postgres::Row, idx: usize) -> Result<Value> {
    let ty = row.columns()[idx].type_();

    let is_text = [Type::TEXT, Type::VARCHAR, Type::NAME, Type::BPCHAR].contains(ty);

    let value: Value = if is_text {
        row.try_get::<_, Option<String>>(idx)?.into()
    } else if ty == &Type::BOOL {
        row.try_get::<_, Option<bool>>(idx)?.into()
    } else if ty == &Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)?.map(i64::from).into()
    } else if ty == &Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)?.map(i64::from).into()
    } else if ty == &Type::INT8 {
        row.try_get::<_, Option<i64>>(idx)?.into()
    } else if ty == &Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(idx)?.map(f64::from).into()
    } else if ty == &Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(idx)?.into()
    } else {
        return Err(Error::type_conversion(format!(
            "column {} has unsupported type {}",
            row.columns()[idx].name(),
            ty
        )));
    };

    Ok(value)
}
