//! Catalog introspection queries.
//!
//! Parameters are named placeholders. Output columns are cast to `text` or
//! `int4` so executors only ever see plain scalar types.

/// Column names making up a table's primary key, in key order.
///
/// Parameters: `:schema`, `:table`. Output: `primary_key`.
pub const PRIMARY_KEY_SQL: &str = "\
SELECT
    a.attname::text AS primary_key
FROM
    pg_index i
    JOIN pg_class c ON c.oid = i.indrelid
    JOIN pg_namespace n ON n.oid = c.relnamespace
    JOIN pg_attribute a ON a.attrelid = c.oid AND a.attnum = ANY(i.indkey)
WHERE
    i.indisprimary
    AND n.nspname = :schema
    AND c.relname = :table
ORDER BY
    array_position(i.indkey::int2[], a.attnum)";

/// One row per column of a table.
///
/// User defined types report their kind (`base`, `composite`, `domain`,
/// `enum`, `pseudo`, `range`) as `data_type`.
///
/// Parameters: `:schema`, `:table`.
pub const FIELDS_SQL: &str = "\
SELECT
    cols.column_name::text AS column_name,
    cols.is_nullable::text AS is_nullable,
    cols.column_default::text AS column_default,
    CASE WHEN cols.data_type = 'USER-DEFINED' THEN
        CASE t.typtype
            WHEN 'b' THEN 'base'
            WHEN 'c' THEN 'composite'
            WHEN 'd' THEN 'domain'
            WHEN 'e' THEN 'enum'
            WHEN 'p' THEN 'pseudo'
            WHEN 'r' THEN 'range'
        END
    ELSE
        cols.data_type::text
    END AS data_type,
    cols.character_maximum_length::int4 AS character_maximum_length,
    cols.numeric_precision::int4 AS numeric_precision,
    cols.numeric_scale::int4 AS numeric_scale,
    cols.udt_schema::text AS udt_schema,
    cols.udt_name::text AS udt_name,
    col_description(c.oid, cols.ordinal_position::int4) AS column_comment
FROM
    information_schema.columns cols
    JOIN pg_namespace ns ON ns.nspname = cols.table_schema
    JOIN pg_class c ON c.relname = cols.table_name AND c.relnamespace = ns.oid
    LEFT JOIN pg_namespace tns ON tns.nspname = cols.udt_schema
    LEFT JOIN pg_type t ON t.typname = cols.udt_name AND t.typnamespace = tns.oid
WHERE
    cols.table_schema = :schema
    AND cols.table_name = :table
ORDER BY
    cols.ordinal_position";

/// Labels of an enum type in declared sort order.
///
/// Parameters: `:enum_schema`, `:enum_type`. Output: `enumlabel`.
pub const ENUM_VALUES_SQL: &str = "\
SELECT
    e.enumlabel::text AS enumlabel
FROM
    pg_enum e
    JOIN pg_type t ON t.oid = e.enumtypid
    JOIN pg_namespace n ON n.oid = t.typnamespace
WHERE
    n.nspname = :enum_schema
    AND t.typname = :enum_type
ORDER BY
    e.enumsortorder";
