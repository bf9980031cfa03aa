/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schema-driven shape types for generated service data models.
//!
//! Service models describe hundreds of near-identical request, response, and
//! nested value shapes. Rather than emitting one source file per shape, this
//! crate provides a single [`Record`] mechanism driven by static
//! [`schema`](crate::schema) tables: a record is an ordered bag of optional
//! fields whose names, kinds, and documented constraints come from its
//! [`StructureSchema`](crate::schema::StructureSchema).
//!
//! Serialization, transport, signing, and endpoint resolution are external
//! collaborators that consume these types; none of that lives here.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod date_time;
pub mod error;
pub mod schema;

mod macros;
mod record;
mod value;

pub use date_time::DateTime;
pub use record::Record;
pub use value::Value;
