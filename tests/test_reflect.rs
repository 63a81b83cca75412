//! Reflection tests against an in-memory catalog.
//!
//! Run with: cargo test --test test_reflect

use std::sync::Arc;

use pg_dbtable_rs::catalog::sql;
use pg_dbtable_rs::{
    BindValue, Bindings, Error, Field, LookupOptions, QueryExecutor, Result, Row, RowColumns,
    Table, Value,
};

const FIELD_COLUMNS: [&str; 10] = [
    "column_name",
    "is_nullable",
    "column_default",
    "data_type",
    "character_maximum_length",
    "numeric_precision",
    "numeric_scale",
    "udt_schema",
    "udt_name",
    "column_comment",
];

/// Column definition as the catalog query would return it.
struct Column {
    name: &'static str,
    nullable: bool,
    default: Option<&'static str>,
    data_type: &'static str,
    max_length: Option<i64>,
    precision: Option<i64>,
    scale: Option<i64>,
    udt_name: &'static str,
    comment: Option<&'static str>,
}

impl Column {
    fn new(name: &'static str, data_type: &'static str, udt_name: &'static str) -> Self {
        Self {
            name,
            nullable: true,
            default: None,
            data_type,
            max_length: None,
            precision: None,
            scale: None,
            udt_name,
            comment: None,
        }
    }

    fn to_row(&self, columns: &Arc<RowColumns>) -> Row {
        Row::new(
            vec![
                Value::from(self.name),
                Value::from(if self.nullable { "YES" } else { "NO" }),
                Value::from(self.default),
                Value::from(self.data_type),
                Value::from(self.max_length),
                Value::from(self.precision),
                Value::from(self.scale),
                Value::from("public"),
                Value::from(self.udt_name),
                Value::from(self.comment),
            ],
            Arc::clone(columns),
        )
    }
}

/// Answers the catalog queries from fixed data and records every call.
struct ScriptedCatalog {
    primary_keys: Vec<&'static str>,
    columns: Vec<Column>,
    enum_labels: Vec<&'static str>,
    fail_on: Option<&'static str>,
    calls: Vec<(String, Bindings)>,
}

impl ScriptedCatalog {
    fn new(primary_keys: Vec<&'static str>, columns: Vec<Column>) -> Self {
        Self {
            primary_keys,
            columns,
            enum_labels: Vec::new(),
            fail_on: None,
            calls: Vec::new(),
        }
    }

    fn count_calls(&self, query: &str) -> usize {
        self.calls.iter().filter(|(q, _)| q == query).count()
    }
}

impl QueryExecutor for ScriptedCatalog {
    fn query(&mut self, query: &str, params: &Bindings) -> Result<Vec<Row>> {
        self.calls.push((query.to_string(), params.clone()));

        if self.fail_on == Some(query) {
            return Err(Error::data_access("permission denied for schema public"));
        }

        if query == sql::PRIMARY_KEY_SQL {
            let columns = Arc::new(RowColumns::new(["primary_key"]));
            Ok(self
                .primary_keys
                .iter()
                .map(|k| Row::new(vec![Value::from(*k)], Arc::clone(&columns)))
                .collect())
        } else if query == sql::FIELDS_SQL {
            let columns = Arc::new(RowColumns::new(FIELD_COLUMNS));
            Ok(self.columns.iter().map(|c| c.to_row(&columns)).collect())
        } else if query == sql::ENUM_VALUES_SQL {
            let columns = Arc::new(RowColumns::new(["enumlabel"]));
            Ok(self
                .enum_labels
                .iter()
                .map(|l| Row::new(vec![Value::from(*l)], Arc::clone(&columns)))
                .collect())
        } else {
            Err(Error::data_access(format!("unexpected query: {}", query)))
        }
    }
}

fn widgets_catalog() -> ScriptedCatalog {
    let mut id = Column::new("id", "integer", "int4");
    id.nullable = false;
    id.precision = Some(32);
    id.scale = Some(0);
    id.default = Some("nextval('widgets_id_seq'::regclass)");

    let mut label = Column::new("label", "character varying", "varchar");
    label.nullable = false;
    label.max_length = Some(50);
    label.comment = Some("Display label");

    let mut active = Column::new("active", "boolean", "bool");
    active.default = Some("true");

    ScriptedCatalog::new(vec!["id"], vec![id, label, active])
}

#[test]
fn test_reflect_scenario() {
    let mut catalog = widgets_catalog();
    let mut table = Table::new("widgets", None);
    table.run_field_lookup(&mut catalog).unwrap();

    assert_eq!(table.fields().count(), 3);
    assert_eq!(table.primary_keys(), ["id"]);
    assert!(table.is_loaded());

    let label = table.field("label").unwrap();
    assert!(!label.is_null_ok());
    assert_eq!(label.as_character().unwrap().max_characters(), Some(50));
    assert_eq!(label.comment(), Some("Display label"));
    assert_eq!(label.defined_type(), "varchar");

    let active = table.field("active").unwrap();
    assert_eq!(active.to_host_value(&Value::Null).unwrap(), Value::Bool(true));

    let id = table.field("id").unwrap();
    assert!(id.is_primary_key());
    assert_eq!(id.as_integer().unwrap().max(), i32::MAX as i64);
    assert!(!label.is_primary_key());
}

#[test]
fn test_lookup_parameters() {
    let mut catalog = widgets_catalog();
    let mut table = Table::new("widgets", Some("inventory"));
    table.run_field_lookup(&mut catalog).unwrap();

    let (_, params) = &catalog.calls[0];
    assert_eq!(params[":schema"], BindValue::from("inventory"));
    assert_eq!(params[":table"], BindValue::from("widgets"));
}

#[test]
fn test_field_order_follows_catalog() {
    let mut catalog = widgets_catalog();
    let mut table = Table::new("widgets", None);
    table.run_field_lookup(&mut catalog).unwrap();

    let names: Vec<&str> = table.fields().names().collect();
    assert_eq!(names, ["id", "label", "active"]);
}

#[test]
fn test_second_run_is_skipped() {
    let mut catalog = widgets_catalog();
    let mut table = Table::new("widgets", None);

    table.run_field_lookup(&mut catalog).unwrap();
    table.run_field_lookup(&mut catalog).unwrap();

    assert_eq!(catalog.count_calls(sql::PRIMARY_KEY_SQL), 1);
    assert_eq!(catalog.count_calls(sql::FIELDS_SQL), 1);
    assert_eq!(table.fields().count(), 3);
}

#[test]
fn test_unmapped_types_skipped() {
    let mut catalog = widgets_catalog();
    catalog.columns.push(Column::new("search", "tsvector", "tsvector"));
    catalog.columns.push(Column::new("address", "composite", "address_t"));

    let mut table = Table::new("widgets", None);
    table.run_field_lookup(&mut catalog).unwrap();

    assert_eq!(table.fields().count(), 3);
    assert!(!table.field_exists("search"));
    assert!(!table.field_exists("address"));
}

#[test]
fn test_enum_labels_loaded() {
    let mut catalog = widgets_catalog();
    catalog.columns.push(Column::new("mood", "enum", "mood_t"));
    catalog.enum_labels = vec!["sad", "ok", "happy"];

    let mut table = Table::new("widgets", None);
    table.run_field_lookup(&mut catalog).unwrap();

    let mood = table.field("mood").unwrap().as_enumerated().unwrap();
    assert_eq!(mood.enum_type(), "mood_t");
    assert_eq!(mood.schema(), "public");
    assert_eq!(mood.values(), ["sad", "ok", "happy"]);

    let (_, params) = catalog
        .calls
        .iter()
        .find(|(q, _)| q == sql::ENUM_VALUES_SQL)
        .unwrap();
    assert_eq!(params[":enum_type"], BindValue::from("mood_t"));
}

#[test]
fn test_enum_lookup_can_be_disabled() {
    let mut catalog = widgets_catalog();
    catalog.columns.push(Column::new("mood", "enum", "mood_t"));
    catalog.enum_labels = vec!["sad"];

    let options = LookupOptions::new().with_enum_values(false);
    let mut table = Table::new("widgets", None);
    table.run_field_lookup_with(&mut catalog, &options).unwrap();

    assert_eq!(catalog.count_calls(sql::ENUM_VALUES_SQL), 0);
    assert!(table.field("mood").unwrap().as_enumerated().unwrap().values().is_empty());
}

#[test]
fn test_strict_option_applied() {
    let mut catalog = widgets_catalog();
    let options = LookupOptions::new().with_strict_values(true);
    let mut table = Table::new("widgets", None);
    table.run_field_lookup_with(&mut catalog, &options).unwrap();

    let label = table.field("label").unwrap();
    assert!(label.is_strict());
    let long = "x".repeat(56);
    assert!(matches!(
        label.to_bound_value(&Value::from(long)),
        Err(Error::Range { .. })
    ));
}

#[test]
fn test_numeric_columns() {
    let mut amount = Column::new("amount", "numeric", "numeric");
    amount.precision = Some(8);
    amount.scale = Some(2);
    let mut ratio = Column::new("ratio", "double precision", "float8");
    ratio.precision = Some(53);
    let mut small = Column::new("small", "smallint", "int2");
    small.precision = Some(16);

    let mut catalog = ScriptedCatalog::new(vec![], vec![amount, ratio, small]);
    let mut table = Table::new("figures", None);
    table.run_field_lookup(&mut catalog).unwrap();

    let amount = table.field("amount").unwrap().as_numeric().unwrap();
    assert!((amount.max().unwrap() - 999999.99).abs() < 1e-9);
    assert_eq!(table.field("ratio").unwrap().as_numeric().unwrap().max(), None);
    assert_eq!(table.field("small").unwrap().as_integer().unwrap().max(), 32767);
    assert!(table.primary_keys().is_empty());
}

#[test]
fn test_query_failure_propagates() {
    let mut catalog = widgets_catalog();
    catalog.fail_on = Some(sql::FIELDS_SQL);

    let mut table = Table::new("widgets", None);
    let err = table.run_field_lookup(&mut catalog).unwrap_err();

    assert!(err.is_data_access());
    assert!(err.to_string().contains("permission denied"));
    assert!(!table.is_loaded());
    assert!(table.primary_keys().is_empty());
}

#[test]
fn test_describe_reflected_table() {
    let mut catalog = widgets_catalog();
    let mut table = Table::new("widgets", None);
    table.run_field_lookup(&mut catalog).unwrap();

    let described = table.fields().describe_all();
    let lines: Vec<&str> = described.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("i64 "));
    assert!(lines[1].ends_with("Display label"));
    assert!(lines[2].starts_with("Option<bool>"));
}
