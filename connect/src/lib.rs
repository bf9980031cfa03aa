/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data model for the Amazon Connect contact center service.
//!
//! Amazon Connect is a cloud-based contact center solution. This crate holds
//! the data shapes of its API — agent statuses, metric queries, persistent
//! contact associations — declared as static [`schema`](shape_types::schema)
//! tables and closed string enumerations. Callers build request records
//! through the fluent [`Record`] API and read response records through its
//! accessors; serialization and transport are external collaborators.
//!
//! ```
//! use connect::model;
//! use connect::Record;
//!
//! let request = Record::new(&model::DESCRIBE_AGENT_STATUS_REQUEST)
//!     .with("InstanceId", "12345678-1234-1234-1234-123456789012")
//!     .with("AgentStatusId", "status-1");
//! assert_eq!(
//!     "{InstanceId: 12345678-1234-1234-1234-123456789012, AgentStatusId: status-1}",
//!     format!("{}", request),
//! );
//! ```

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod model;

pub use shape_types::{DateTime, Record, Value};
