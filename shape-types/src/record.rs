/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::DuplicateKeyError;
use crate::schema::{ShapeKind, StructureSchema};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A schema-driven resource record: an ordered bag of optional fields.
///
/// Every field starts absent and is populated through [`set`](Record::set)
/// or the fluent [`with`](Record::with). Absence is first-class: an unset
/// field is distinct from any present value, including zero-equivalents
/// like the empty string.
///
/// Setters store through without validating documented constraints; the
/// remote service is the authority on lengths, ranges, and patterns. The
/// only enforced invariant is key uniqueness in incrementally built maps
/// (see [`add_map_entry`](Record::add_map_entry)).
///
/// # Examples
///
/// ```
/// use shape_types::schema::{FieldDef, ShapeKind, StructureSchema};
/// use shape_types::Record;
///
/// static QUEUE_REFERENCE: StructureSchema = StructureSchema::new(
///     "QueueReference",
///     &[
///         FieldDef::new("Id", ShapeKind::String),
///         FieldDef::new("Arn", ShapeKind::String),
///     ],
/// );
///
/// let queue = Record::new(&QUEUE_REFERENCE).with("Id", "queue-1");
/// assert_eq!(Some("queue-1"), queue.get("Id").and_then(|v| v.as_string()));
/// assert!(queue.get("Arn").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static StructureSchema,
    fields: Vec<Option<Value>>,
}

impl Record {
    /// Creates a record with every field absent.
    pub fn new(schema: &'static StructureSchema) -> Self {
        Record {
            fields: vec![None; schema.fields().len()],
            schema,
        }
    }

    /// Returns the schema this record was created from.
    pub fn schema(&self) -> &'static StructureSchema {
        self.schema
    }

    /// Returns the current value of a field, or `None` if the field is
    /// absent or the name is not a member of the schema.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.schema
            .field_index(field)
            .and_then(|index| self.fields[index].as_ref())
    }

    /// Stores a value for a field, replacing any previous value.
    ///
    /// Documented constraints are not checked; values are stored verbatim.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a member of the schema.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        let index = self.index_of(field);
        self.fields[index] = Some(value.into());
    }

    /// Resets a field to absent.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a member of the schema.
    pub fn unset(&mut self, field: &str) {
        let index = self.index_of(field);
        self.fields[index] = None;
    }

    /// Fluent form of [`set`](Record::set): stores the value and returns the
    /// record for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a member of the schema.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Inserts one entry into a map-valued field, creating the map if the
    /// field is absent.
    ///
    /// Fails without modifying the map if `key` is already present; the
    /// existing value for `key` is retained.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a member of the schema, if the field is not
    /// declared as a map, or if it currently holds a non-map value.
    pub fn add_map_entry(
        &mut self,
        field: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), DuplicateKeyError> {
        let index = self.index_of(field);
        let def = &self.schema.fields()[index];
        let name = def.name();
        if !matches!(def.kind(), ShapeKind::Map(_)) {
            panic!("`{}` of `{}` does not hold a map", name, self.schema.name());
        }
        let slot = self.fields[index].get_or_insert_with(|| Value::Map(HashMap::new()));
        let entries = match slot {
            Value::Map(entries) => entries,
            _ => panic!("`{}` of `{}` does not hold a map", name, self.schema.name()),
        };
        let key = key.into();
        if entries.contains_key(&key) {
            return Err(DuplicateKeyError::new(name, key));
        }
        entries.insert(key, value.into());
        Ok(())
    }

    /// Resets a map-valued field to absent — not to an empty-but-present
    /// map. A subsequent [`get`](Record::get) returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a member of the schema.
    pub fn clear_map_entries(&mut self, field: &str) {
        self.unset(field);
    }

    fn index_of(&self, field: &str) -> usize {
        match self.schema.field_index(field) {
            Some(index) => index,
            None => panic!("`{}` is not a member of `{}`", field, self.schema.name()),
        }
    }
}

/// Structural, null-aware equality: records are equal iff they share a
/// schema and every field is pairwise equal, with absent a distinct state
/// from any present value.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.fields == other.fields
    }
}

impl Eq for Record {}

/// Consistent with `PartialEq`: equal records hash identically. Absent
/// fields contribute a fixed sentinel through `Option`'s hash.
impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.schema.name().hash(state);
        self.fields.hash(state);
    }
}

/// Deterministic diagnostic rendering: present fields in schema declaration
/// order as `{Name: value, ...}`, absent fields omitted. Equal records
/// always render identical strings. This is a diagnostic aid, not a wire
/// format.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for (def, value) in self.schema.fields().iter().zip(&self.fields) {
            if let Some(value) = value {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", def.name(), value)?;
                first = false;
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use super::Record;
    use crate::schema::{FieldDef, ShapeKind, StructureSchema};
    use crate::value::Value;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    static TEST_SCHEMA: StructureSchema = StructureSchema::new(
        "TestShape",
        &[
            FieldDef::new("Name", ShapeKind::String),
            FieldDef::new("Count", ShapeKind::Integer),
            FieldDef::new("Ratio", ShapeKind::Double),
            FieldDef::new("Enabled", ShapeKind::Boolean),
            FieldDef::new("Tags", ShapeKind::Map(&ShapeKind::String)),
        ],
    );

    fn hash_of(record: &Record) -> u64 {
        let mut hasher = DefaultHasher::new();
        record.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn fields_start_absent() {
        let record = Record::new(&TEST_SCHEMA);
        for def in TEST_SCHEMA.fields() {
            assert!(record.get(def.name()).is_none());
        }
    }

    #[test]
    fn get_on_unknown_field_is_none() {
        let record = Record::new(&TEST_SCHEMA);
        assert!(record.get("Bogus").is_none());
    }

    #[test]
    #[should_panic(expected = "`Bogus` is not a member of `TestShape`")]
    fn set_on_unknown_field_panics() {
        let mut record = Record::new(&TEST_SCHEMA);
        record.set("Bogus", "x");
    }

    #[test]
    fn absent_differs_from_zero_equivalents() {
        let unset = Record::new(&TEST_SCHEMA);
        let empty_name = Record::new(&TEST_SCHEMA).with("Name", "");
        let zero_count = Record::new(&TEST_SCHEMA).with("Count", 0);
        assert_ne!(unset, empty_name);
        assert_ne!(unset, zero_count);
        assert_eq!(unset, Record::new(&TEST_SCHEMA));
        assert_eq!(
            Some(0),
            zero_count.get("Count").and_then(Value::as_integer)
        );
    }

    #[test]
    fn unset_restores_absence() {
        let mut record = Record::new(&TEST_SCHEMA);
        record.set("Name", "x");
        record.unset("Name");
        assert_eq!(Record::new(&TEST_SCHEMA), record);
    }

    #[test]
    fn duplicate_map_key_is_rejected_and_map_unchanged() {
        let mut record = Record::new(&TEST_SCHEMA);
        record.add_map_entry("Tags", "env", "prod").unwrap();
        let err = record.add_map_entry("Tags", "env", "test").unwrap_err();
        assert_eq!("Tags", err.field());
        assert_eq!("env", err.key());

        let tags = record.get("Tags").and_then(|v| v.as_map()).unwrap();
        assert_eq!(1, tags.len());
        assert_eq!(Some("prod"), tags["env"].as_string());
    }

    #[test]
    fn clear_map_entries_resets_to_absent() {
        let mut record = Record::new(&TEST_SCHEMA);
        record.add_map_entry("Tags", "env", "prod").unwrap();
        record.clear_map_entries("Tags");
        assert!(record.get("Tags").is_none());
        assert_eq!(Record::new(&TEST_SCHEMA), record);
    }

    #[test]
    #[should_panic(expected = "`Name` of `TestShape` does not hold a map")]
    fn add_map_entry_on_non_map_value_panics() {
        let mut record = Record::new(&TEST_SCHEMA).with("Name", "x");
        let _ = record.add_map_entry("Name", "k", "v");
    }

    #[test]
    #[should_panic(expected = "`Count` of `TestShape` does not hold a map")]
    fn add_map_entry_on_absent_non_map_field_panics() {
        let mut record = Record::new(&TEST_SCHEMA);
        let _ = record.add_map_entry("Count", "k", "v");
    }

    #[test]
    fn display_renders_present_fields_in_declaration_order() {
        let record = Record::new(&TEST_SCHEMA)
            .with("Count", 3)
            .with("Name", "X");
        assert_eq!("{Name: X, Count: 3}", format!("{}", record));
        assert_eq!("{}", format!("{}", Record::new(&TEST_SCHEMA)));
    }

    #[test]
    fn display_renders_maps_in_sorted_key_order() {
        let mut record = Record::new(&TEST_SCHEMA);
        record.add_map_entry("Tags", "env", "prod").unwrap();
        record.add_map_entry("Tags", "app", "connect").unwrap();
        assert_eq!("{Tags: {app=connect, env=prod}}", format!("{}", record));
    }

    #[test]
    fn nan_valued_records_round_trip_equality() {
        let original = Record::new(&TEST_SCHEMA)
            .with("Name", "x")
            .with("Ratio", f64::NAN);

        let mut copy = Record::new(&TEST_SCHEMA);
        for def in TEST_SCHEMA.fields() {
            if let Some(value) = original.get(def.name()) {
                copy.set(def.name(), value.clone());
            }
        }

        assert_eq!(original, original.clone());
        assert_eq!(original, copy);
        assert_eq!(hash_of(&original), hash_of(&copy));
    }

    #[test]
    fn zero_signs_are_distinct_values() {
        let positive = Record::new(&TEST_SCHEMA).with("Ratio", 0.0);
        let negative = Record::new(&TEST_SCHEMA).with("Ratio", -0.0);
        assert_ne!(positive, negative);
        assert_eq!(positive, Record::new(&TEST_SCHEMA).with("Ratio", 0.0));
    }

    #[test]
    fn set_order_does_not_matter() {
        let forward = Record::new(&TEST_SCHEMA)
            .with("Name", "X")
            .with("Count", 1);
        let reverse = Record::new(&TEST_SCHEMA)
            .with("Count", 1)
            .with("Name", "X");
        assert_eq!(forward, reverse);
        assert_eq!(hash_of(&forward), hash_of(&reverse));
        assert_eq!(format!("{}", forward), format!("{}", reverse));
    }

    proptest! {
        #[test]
        fn copying_present_fields_round_trips_equality(
            name in proptest::option::of(".{0,12}"),
            count in proptest::option::of(any::<i64>()),
            ratio in proptest::option::of(any::<f64>()),
            enabled in proptest::option::of(any::<bool>()),
        ) {
            let mut original = Record::new(&TEST_SCHEMA);
            if let Some(name) = name {
                original.set("Name", name);
            }
            if let Some(count) = count {
                original.set("Count", count);
            }
            if let Some(ratio) = ratio {
                original.set("Ratio", ratio);
            }
            if let Some(enabled) = enabled {
                original.set("Enabled", enabled);
            }

            let mut copy = Record::new(&TEST_SCHEMA);
            for def in TEST_SCHEMA.fields() {
                if let Some(value) = original.get(def.name()) {
                    copy.set(def.name(), Value::clone(value));
                }
            }

            prop_assert_eq!(&original, &copy);
            prop_assert_eq!(hash_of(&original), hash_of(&copy));
            prop_assert_eq!(format!("{}", original), format!("{}", copy));
        }
    }
}
