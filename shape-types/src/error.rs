/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors surfaced by the shape model.

use std::fmt;

/// Returned when an incremental map insert collides with a key that is
/// already present in the field's map.
///
/// The map is left unchanged; the caller can pick a different key or replace
/// the whole map with a bulk `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DuplicateKeyError {
    field: &'static str,
    key: String,
}

impl DuplicateKeyError {
    pub(crate) fn new(field: &'static str, key: String) -> Self {
        Self { field, key }
    }

    /// Returns the name of the map-valued field that rejected the insert.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the key that was already present.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate key `{}` for map field `{}`",
            self.key, self.field
        )
    }
}

impl std::error::Error for DuplicateKeyError {}

/// Returned when a raw string does not name any declared value of a closed
/// string enumeration.
///
/// The empty string is unrecognized input like any other; it is never
/// coerced to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnknownEnumVariantError {
    enum_name: &'static str,
    value: String,
}

impl UnknownEnumVariantError {
    /// Creates an error for `value` failing to parse as `enum_name`.
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }

    /// Returns the name of the enumeration that rejected the value.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// Returns the rejected raw value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownEnumVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is not a valid value for enum `{}`",
            self.value, self.enum_name
        )
    }
}

impl std::error::Error for UnknownEnumVariantError {}
