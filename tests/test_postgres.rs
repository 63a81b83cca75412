//! Integration tests against a live PostgreSQL server.
//!
//! Run with: cargo test --features postgres --test test_postgres
//!
//! The connection string comes from `DATABASE_URL`, optionally set in
//! `tests/.env`.

#![cfg(feature = "postgres")]

use pg_dbtable_rs::{Bank, Field, Table, Value};
use postgres::{Client, NoTls};

/// Each test gets its own schema so tests can run in parallel.
fn schema_for(table: &str) -> String {
    format!("pg_dbtable_{}", table)
}

/// Connect, or skip the test when no server is configured or reachable.
macro_rules! connect_or_skip {
    () => {{
        dotenvy::from_path("tests/.env").ok();
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("Skipping test - DATABASE_URL not set");
                return;
            }
        };
        match Client::connect(&url, NoTls) {
            Ok(client) => client,
            Err(e) => {
                let err_str = e.to_string();
                if err_str.contains("Connection refused") || err_str.contains("error connecting") {
                    eprintln!("Skipping test - PostgreSQL not reachable: {}", e);
                    return;
                }
                panic!("Unexpected connection error: {}", e);
            }
        }
    }};
}

fn setup(client: &mut Client, table: &str) {
    client
        .batch_execute(&format!(
            "CREATE SCHEMA IF NOT EXISTS {schema};
             DROP TABLE IF EXISTS {schema}.{table};
             DROP TYPE IF EXISTS {schema}.{table}_mood;
             CREATE TYPE {schema}.{table}_mood AS ENUM ('sad', 'ok', 'happy');
             CREATE TABLE {schema}.{table} (
                 id integer PRIMARY KEY,
                 label varchar(50) NOT NULL,
                 active boolean DEFAULT true,
                 amount numeric(8, 2),
                 mood {schema}.{table}_mood,
                 location point,
                 payload jsonb,
                 created timestamptz,
                 tags text[],
                 search tsvector
             );
             COMMENT ON COLUMN {schema}.{table}.label IS 'Display label';",
            schema = schema_for(table),
            table = table
        ))
        .unwrap();
}

fn teardown(client: &mut Client, table: &str) {
    client
        .batch_execute(&format!("DROP SCHEMA IF EXISTS {} CASCADE;", schema_for(table)))
        .unwrap();
}

#[test]
fn test_reflect_live_table() {
    let mut client = connect_or_skip!();
    setup(&mut client, "widgets");

    let mut table = Table::new("widgets", Some(schema_for("widgets").as_str()));
    table.run_field_lookup(&mut client).unwrap();

    assert_eq!(table.primary_keys(), ["id"]);
    assert_eq!(table.fields().count(), 9);
    assert!(!table.field_exists("search"));

    let label = table.field("label").unwrap();
    assert!(!label.is_null_ok());
    assert_eq!(label.as_character().unwrap().max_characters(), Some(50));
    assert_eq!(label.comment(), Some("Display label"));

    let active = table.field("active").unwrap();
    assert_eq!(active.to_host_value(&Value::Null).unwrap(), Value::Bool(true));

    let mood = table.field("mood").unwrap().as_enumerated().unwrap();
    assert_eq!(mood.values(), ["sad", "ok", "happy"]);

    assert_eq!(table.field("created").unwrap().defined_type(), "timestamptz");
    assert!(table.field("tags").unwrap().as_array().is_some());

    teardown(&mut client, "widgets");
}

#[test]
fn test_bound_values_insert() {
    let mut client = connect_or_skip!();
    setup(&mut client, "gadgets");

    let mut table = Table::new("gadgets", Some(schema_for("gadgets").as_str()));
    table.run_field_lookup(&mut client).unwrap();

    let inputs = [
        ("id", Value::Int(1)),
        ("label", Value::from("Sprocket")),
        ("amount", Value::from("12.346")),
        ("location", Value::from(vec![3.0, 4.53])),
    ];

    let mut columns = Vec::new();
    let mut markers = Vec::new();
    let mut params = pg_dbtable_rs::Bindings::new();
    for (name, raw) in &inputs {
        let field = table.field(name).unwrap();
        let (marker, bound) = field.to_bound_value(raw).unwrap().into_parts();
        columns.push(field.fqn(None));
        markers.push(marker);
        params.extend(bound);
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.fqn_quoted(None),
        columns.join(", "),
        markers.join(", ")
    );
    pg_dbtable_rs::QueryExecutor::query(&mut client, &sql, &params).unwrap();

    let rows = pg_dbtable_rs::QueryExecutor::query(
        &mut client,
        &format!(
            "SELECT label, amount::float8 AS amount, location::text AS location FROM {}",
            table.fqn(None)
        ),
        &pg_dbtable_rs::Bindings::new(),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_str("label").unwrap().as_deref(), Some("Sprocket"));
    assert_eq!(rows[0].get_by_name("amount"), Some(&Value::Float(12.35)));

    let location = rows[0].get_by_name("location").unwrap();
    let point = table.field("location").unwrap().to_host_value(location).unwrap();
    assert_eq!(point.as_point().unwrap(), [3.0, 4.53]);

    teardown(&mut client, "gadgets");
}

#[test]
fn test_null_bindings_insert() {
    let mut client = connect_or_skip!();
    setup(&mut client, "sprockets");

    let mut table = Table::new("sprockets", Some(schema_for("sprockets").as_str()));
    table.run_field_lookup(&mut client).unwrap();

    let inputs = [
        ("id", Value::Int(7)),
        ("label", Value::from("Bare")),
        ("amount", Value::Null),
        ("location", Value::Null),
        ("created", Value::Null),
    ];

    let mut columns = Vec::new();
    let mut markers = Vec::new();
    let mut params = pg_dbtable_rs::Bindings::new();
    for (name, raw) in &inputs {
        let field = table.field(name).unwrap();
        let (marker, bound) = field.to_bound_value(raw).unwrap().into_parts();
        columns.push(field.fqn(None));
        markers.push(marker);
        params.extend(bound);
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.fqn_quoted(None),
        columns.join(", "),
        markers.join(", ")
    );
    pg_dbtable_rs::QueryExecutor::query(&mut client, &sql, &params).unwrap();

    let rows = pg_dbtable_rs::QueryExecutor::query(
        &mut client,
        &format!(
            "SELECT count(*)::int8 AS n FROM {} \
             WHERE amount IS NULL AND location IS NULL AND created IS NULL",
            table.fqn(None)
        ),
        &pg_dbtable_rs::Bindings::new(),
    )
    .unwrap();
    assert_eq!(rows[0].get_i64("n").unwrap(), Some(1));

    teardown(&mut client, "sprockets");
}

#[test]
fn test_bank_reuse() {
    let mut client = connect_or_skip!();
    setup(&mut client, "gizmos");

    let bank = Bank::new();
    let mut table = Table::new("gizmos", Some(schema_for("gizmos").as_str()));
    table.run_field_lookup(&mut client).unwrap();
    table.bank_it(&bank, Some("main"));

    let found = bank.get("gizmos", Some(schema_for("gizmos").as_str()), Some("main")).unwrap();
    assert!(found.field_exists("payload"));

    teardown(&mut client, "gizmos");
}
