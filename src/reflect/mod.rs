//! Table reflection from the PostgreSQL catalog.
//!
//! A run issues the primary key query and the column definition query, maps
//! each column's catalog type onto a field variant and applies the shared
//! properties (defined type, nullability, default, comment). Enum columns get
//! their labels from one extra query each.
//!
//! Columns of a type with no mapping are skipped.

mod fields;
mod primary_key;

pub use fields::{FieldDef, FieldsLookup};
pub use primary_key::PrimaryKeyLookup;

use tracing::{debug, trace};

use crate::catalog::QueryExecutor;
use crate::config::LookupOptions;
use crate::error::Result;
use crate::field::{
    ArrayField, BitString, Boolean, Character, Date, Enumerated, Field, FieldKind, Integer, Json,
    Network, Numeric, PointField, RangeField, Time, Xml,
};

/// Field variant chosen for a catalog data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogType {
    Integer,
    Numeric,
    Character,
    Date,
    Time,
    Array,
    Boolean,
    Enum,
    Json,
    Xml,
    Point,
    BitString,
    Network,
    Range,
}

impl CatalogType {
    /// Map a catalog data type. Matching is exact after trimming.
    pub fn from_data_type(data_type: &str) -> Option<Self> {
        let kind = match data_type.trim() {
            "bigint" | "smallint" | "integer" => CatalogType::Integer,
            "money" | "double precision" | "real" | "numeric" => CatalogType::Numeric,
            "character" | "text" | "character varying" => CatalogType::Character,
            "timestamp without time zone" | "timestamp with time zone" | "date" => {
                CatalogType::Date
            }
            "time without time zone" | "time with time zone" => CatalogType::Time,
            "ARRAY" => CatalogType::Array,
            "boolean" => CatalogType::Boolean,
            "enum" => CatalogType::Enum,
            "json" | "jsonb" => CatalogType::Json,
            "xml" => CatalogType::Xml,
            "point" => CatalogType::Point,
            "bit" | "bit varying" => CatalogType::BitString,
            "inet" | "cidr" | "macaddr" | "macaddr8" => CatalogType::Network,
            "range" | "int4range" | "int8range" | "numrange" | "tsrange" | "tstzrange"
            | "daterange" => CatalogType::Range,
            _ => return None,
        };
        Some(kind)
    }
}

/// What a reflection run found.
#[derive(Debug, Clone, Default)]
pub struct Reflection {
    /// Primary key column names, in key order.
    pub primary_keys: Vec<String>,
    /// Fields in column order. Unmapped columns are absent.
    pub fields: Vec<FieldKind>,
}

/// Reflects one table. Holds no state between runs.
#[derive(Debug, Clone)]
pub struct PropertyLookup<'a> {
    schema: &'a str,
    table: &'a str,
    options: &'a LookupOptions,
}

impl<'a> PropertyLookup<'a> {
    pub fn new(schema: &'a str, table: &'a str, options: &'a LookupOptions) -> Self {
        Self {
            schema,
            table,
            options,
        }
    }

    /// Query the catalog and build the table's fields.
    pub fn run<E: QueryExecutor + ?Sized>(&self, executor: &mut E) -> Result<Reflection> {
        debug!("[REFLECT] Looking up {}.{}", self.schema, self.table);

        let primary_keys = PrimaryKeyLookup::new(self.schema, self.table).run(executor)?;
        let defs = FieldsLookup::new(self.schema, self.table).run(executor)?;

        let mut fields = Vec::with_capacity(defs.len());
        for def in &defs {
            match self.build_field(def, executor)? {
                Some(field) => fields.push(field),
                None => debug!(
                    "[REFLECT] Skipping {}.{}.{} with unmapped type {:?}",
                    self.schema, self.table, def.name, def.data_type
                ),
            }
        }

        debug!(
            "[REFLECT] {}.{}: {} fields, {} primary key columns",
            self.schema,
            self.table,
            fields.len(),
            primary_keys.len()
        );

        Ok(Reflection {
            primary_keys,
            fields,
        })
    }

    /// Build the field for one column, or `None` when its type has no mapping.
    fn build_field<E: QueryExecutor + ?Sized>(
        &self,
        def: &FieldDef,
        executor: &mut E,
    ) -> Result<Option<FieldKind>> {
        let Some(kind) = CatalogType::from_data_type(&def.data_type) else {
            return Ok(None);
        };

        let mut field: FieldKind = match kind {
            CatalogType::Integer => {
                let mut field = Integer::new(def.name.as_str());
                if let Some(bits) = def.numeric_precision {
                    field.set_precision(bits);
                }
                field.into()
            }
            CatalogType::Numeric => {
                let mut field = Numeric::new(def.name.as_str());
                if let Some(precision) = def.numeric_precision {
                    field.set_precision(precision);
                }
                if let Some(scale) = def.numeric_scale {
                    field.set_scale(scale);
                }
                field.into()
            }
            CatalogType::Character => {
                let mut field = Character::new(def.name.as_str());
                let max = def
                    .character_maximum_length
                    .and_then(|len| u32::try_from(len).ok());
                field.set_max_characters(max);
                field.into()
            }
            CatalogType::Date => Date::new(def.name.as_str()).into(),
            CatalogType::Time => Time::new(def.name.as_str()).into(),
            CatalogType::Array => ArrayField::new(def.name.as_str()).into(),
            CatalogType::Boolean => Boolean::new(def.name.as_str()).into(),
            CatalogType::Enum => {
                let mut field = Enumerated::new(def.name.as_str());
                field
                    .set_enum_type(&def.type_name)
                    .set_schema(&def.type_schema);
                if self.options.resolve_enum_values {
                    field.run_enum_values(executor)?;
                }
                field.into()
            }
            CatalogType::Json => Json::new(def.name.as_str()).into(),
            CatalogType::Xml => Xml::new(def.name.as_str()).into(),
            CatalogType::Point => PointField::new(def.name.as_str()).into(),
            CatalogType::BitString => BitString::new(def.name.as_str()).into(),
            CatalogType::Network => Network::new(def.name.as_str()).into(),
            CatalogType::Range => RangeField::new(def.name.as_str()).into(),
        };

        self.set_properties(&mut field, def);
        trace!(
            "[REFLECT] {} ({}) -> {}",
            def.name,
            def.data_type,
            field.variant_name()
        );

        Ok(Some(field))
    }

    /// Shared setup applied to every reflected field.
    fn set_properties(&self, field: &mut FieldKind, def: &FieldDef) {
        field
            .set_defined_type(&def.type_name)
            .set_null_ok(def.is_nullable())
            .set_strict_values(self.options.strict_values);

        if let Some(default) = &def.default_value {
            field.set_default_value(default.as_str());
        }
        if let Some(comment) = &def.comment {
            field.set_comment(comment);
        }
    }
}
