/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::date_time::DateTime;
use crate::record::Record;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// A field value held by a [`Record`].
///
/// Closed over the primitive set that service models use: strings, signed
/// integers, doubles, booleans, timestamps, plus lists, string-keyed maps,
/// and nested records. Enumerated values are stored as their canonical
/// string form, which is what makes the string and typed-enum setter styles
/// indistinguishable once stored.
#[derive(Debug, Clone)]
pub enum Value {
    /// A UTF-8 string, including enumerated values in canonical form.
    String(String),
    /// A signed integer.
    Integer(i64),
    /// A double-precision float.
    Double(f64),
    /// A boolean.
    Boolean(bool),
    /// A point in time.
    Timestamp(DateTime),
    /// An ordered collection.
    List(Vec<Value>),
    /// A string-keyed, key-unique mapping.
    Map(HashMap<String, Value>),
    /// A nested structure.
    Record(Record),
}

impl Value {
    /// Returns the string if this is a string value.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the double if this is a double value.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a timestamp value.
    pub fn as_timestamp(&self) -> Option<DateTime> {
        match self {
            Value::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the elements if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the entries if this is a map value.
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the nested record if this is a record value.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Value::Timestamp(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(entries: HashMap<String, T>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

/// Structural equality, with doubles compared by bit pattern: `NaN` equals
/// `NaN` and `0.0` differs from `-0.0`. Bit-pattern semantics keep equality
/// reflexive for records holding non-finite doubles and consistent with
/// `Hash`; lists, maps, and nested records recurse through these semantics.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(left), Value::String(right)) => left == right,
            (Value::Integer(left), Value::Integer(right)) => left == right,
            (Value::Double(left), Value::Double(right)) => left.to_bits() == right.to_bits(),
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            (Value::Timestamp(left), Value::Timestamp(right)) => left == right,
            (Value::List(left), Value::List(right)) => left == right,
            (Value::Map(left), Value::Map(right)) => left == right,
            (Value::Record(left), Value::Record(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Consistent with `PartialEq`: doubles hash by bit pattern and map entries
/// hash in sorted key order, so equal values always hash identically.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Value::String(value) => value.hash(state),
            Value::Integer(value) => value.hash(state),
            Value::Double(value) => value.to_bits().hash(state),
            Value::Boolean(value) => value.hash(state),
            Value::Timestamp(value) => value.hash(state),
            Value::List(values) => values.hash(state),
            Value::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort_unstable();
                for key in keys {
                    key.hash(state);
                    entries[key].hash(state);
                }
            }
            Value::Record(record) => record.hash(state),
        }
    }
}

/// Diagnostic rendering: strings and numbers bare, lists as `[a, b]`, maps
/// as `{k=v}` in sorted key order, nested records in their own brace form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(value) => f.write_str(value),
            Value::Integer(value) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*value))
            }
            Value::Double(value) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(*value))
            }
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Timestamp(value) => write!(f, "{}", value),
            Value::List(values) => {
                f.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort_unstable();
                f.write_str("{")?;
                for (index, key) in keys.into_iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, entries[key])?;
                }
                f.write_str("}")
            }
            Value::Record(record) => write!(f, "{}", record),
        }
    }
}
