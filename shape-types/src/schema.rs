/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static schema tables describing service shapes.
//!
//! A service model crate declares one `static` [`StructureSchema`] per shape
//! and one [`EnumSchema`] per closed string enumeration, in place of one
//! generated source file per shape. [`Record`](crate::Record) instances are
//! driven entirely by these tables: field order, member names, and the
//! documented constraints all come from here.
//!
//! Constraints are documentation of the remote service's validation
//! contract. Setters never enforce them; the service remains the authority
//! at the request boundary.

use crate::error::UnknownEnumVariantError;

/// The declared kind of a field's value.
///
/// Map keys are always strings, matching the tag-map shapes that occur in
/// service models.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum ShapeKind {
    /// A UTF-8 string.
    String,
    /// A signed integer.
    Integer,
    /// A double-precision float.
    Double,
    /// A boolean.
    Boolean,
    /// A point in time.
    Timestamp,
    /// A string drawn from a closed value set.
    Enum(&'static EnumSchema),
    /// A nested structure.
    Structure(&'static StructureSchema),
    /// An ordered collection of the given kind.
    List(&'static ShapeKind),
    /// A string-keyed, key-unique mapping to values of the given kind.
    Map(&'static ShapeKind),
}

/// Documented constraints on a field's value.
///
/// Carried for consumers (serializers, doc tooling) and never enforced by
/// the record itself.
#[derive(Debug, Clone, Copy)]
pub struct Constraints {
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<&'static str>,
    min_value: Option<i64>,
    max_value: Option<i64>,
}

impl Constraints {
    /// No documented constraints.
    pub const NONE: Constraints = Constraints {
        min_length: None,
        max_length: None,
        pattern: None,
        min_value: None,
        max_value: None,
    };

    /// Returns the documented minimum length for a string field.
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Returns the documented maximum length for a string field.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns the documented regular expression pattern for a string field.
    pub fn pattern(&self) -> Option<&'static str> {
        self.pattern
    }

    /// Returns the documented inclusive minimum for a numeric field.
    pub fn min_value(&self) -> Option<i64> {
        self.min_value
    }

    /// Returns the documented inclusive maximum for a numeric field.
    pub fn max_value(&self) -> Option<i64> {
        self.max_value
    }
}

/// One member of a [`StructureSchema`]: wire name, kind, and documented
/// constraints.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    name: &'static str,
    kind: ShapeKind,
    constraints: Constraints,
}

impl FieldDef {
    /// Creates an unconstrained field with the given wire member name.
    pub const fn new(name: &'static str, kind: ShapeKind) -> Self {
        FieldDef {
            name,
            kind,
            constraints: Constraints::NONE,
        }
    }

    /// Documents an inclusive length bound for a string field.
    pub const fn with_length(mut self, min: usize, max: usize) -> Self {
        self.constraints.min_length = Some(min);
        self.constraints.max_length = Some(max);
        self
    }

    /// Documents a maximum length for a string field with no lower bound.
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    /// Documents a regular expression pattern for a string field.
    pub const fn with_pattern(mut self, pattern: &'static str) -> Self {
        self.constraints.pattern = Some(pattern);
        self
    }

    /// Documents an inclusive value range for a numeric field.
    pub const fn with_range(mut self, min: i64, max: i64) -> Self {
        self.constraints.min_value = Some(min);
        self.constraints.max_value = Some(max);
        self
    }

    /// Returns the wire member name, e.g. `"AgentStatusARN"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared kind of the field's value.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the documented constraints on the field's value.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

/// The schema for one structure shape: its name and its members in
/// declaration order.
#[derive(Debug)]
pub struct StructureSchema {
    name: &'static str,
    fields: &'static [FieldDef],
}

impl StructureSchema {
    /// Creates a structure schema. `fields` is the member list in wire
    /// declaration order.
    pub const fn new(name: &'static str, fields: &'static [FieldDef]) -> Self {
        StructureSchema { name, fields }
    }

    /// Returns the shape name, e.g. `"AgentStatus"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the members in declaration order.
    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    /// Looks up a member by wire name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.field_index(name).map(|index| &self.fields[index])
    }

    /// Returns the declaration-order position of a member.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

/// Shape names are unique within a service model, so two schemas are the
/// same schema iff they have the same name.
impl PartialEq for StructureSchema {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

impl Eq for StructureSchema {}

/// The schema for one closed string enumeration: its name and its declared
/// literal values.
#[derive(Debug)]
pub struct EnumSchema {
    name: &'static str,
    values: &'static [&'static str],
}

impl EnumSchema {
    /// Creates an enum schema over the given closed value set.
    pub const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
        EnumSchema { name, values }
    }

    /// Returns the enumeration name, e.g. `"AgentStatusState"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared literal values, in declaration order.
    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    /// Resolves a raw string to its canonical declared literal.
    ///
    /// Fails for the empty string and for anything not in the declared
    /// value set; unrecognized input is never defaulted or passed through.
    pub fn parse(&self, raw: &str) -> Result<&'static str, UnknownEnumVariantError> {
        self.values
            .iter()
            .find(|value| **value == raw)
            .copied()
            .ok_or_else(|| UnknownEnumVariantError::new(self.name, raw))
    }
}

#[cfg(test)]
mod test {
    use super::{EnumSchema, FieldDef, ShapeKind, StructureSchema};

    static STATE: EnumSchema = EnumSchema::new("State", &["ENABLED", "DISABLED"]);

    static SCHEMA: StructureSchema = StructureSchema::new(
        "TestShape",
        &[
            FieldDef::new("Name", ShapeKind::String).with_length(1, 127),
            FieldDef::new("Arn", ShapeKind::String).with_pattern("^arn:aws:.*$"),
            FieldDef::new("DisplayOrder", ShapeKind::Integer).with_range(1, 50),
            FieldDef::new("State", ShapeKind::Enum(&STATE)),
            FieldDef::new("Tags", ShapeKind::Map(&ShapeKind::String)),
        ],
    );

    #[test]
    fn field_lookup_by_name_and_index() {
        assert_eq!(Some(0), SCHEMA.field_index("Name"));
        assert_eq!(Some(4), SCHEMA.field_index("Tags"));
        assert_eq!(None, SCHEMA.field_index("Bogus"));
        assert_eq!("DisplayOrder", SCHEMA.field("DisplayOrder").unwrap().name());
    }

    #[test]
    fn constraints_are_documentation() {
        let name = SCHEMA.field("Name").unwrap();
        assert_eq!(Some(1), name.constraints().min_length());
        assert_eq!(Some(127), name.constraints().max_length());
        assert_eq!(None, name.constraints().pattern());

        let arn = SCHEMA.field("Arn").unwrap();
        assert_eq!(Some("^arn:aws:.*$"), arn.constraints().pattern());
        assert_eq!(None, arn.constraints().max_length());

        let order = SCHEMA.field("DisplayOrder").unwrap();
        assert_eq!(Some(1), order.constraints().min_value());
        assert_eq!(Some(50), order.constraints().max_value());
    }

    #[test]
    fn enum_parse_is_total_and_strict() {
        assert_eq!("ENABLED", STATE.parse("ENABLED").unwrap());
        assert!(STATE.parse("").is_err());
        assert!(STATE.parse("enabled").is_err());
        assert!(STATE.parse("BOGUS").is_err());
    }

    #[test]
    fn schema_identity_is_by_name() {
        static OTHER: StructureSchema = StructureSchema::new("TestShape", &[]);
        assert_eq!(SCHEMA, OTHER);
        static DIFFERENT: StructureSchema = StructureSchema::new("OtherShape", &[]);
        assert_ne!(SCHEMA, DIFFERENT);
    }
}
