/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shapes and enumerations of the Amazon Connect API.
//!
//! Member names, allowed values, and documented constraints are
//! wire-accurate to the service model. Constraints are the service's
//! contract, not client-side checks; see the crate documentation.

use shape_types::schema::{FieldDef, ShapeKind, StructureSchema};
use shape_types::string_enum;

string_enum! {
    /// The type of an agent status.
    pub enum AgentStatusType {
        /// The agent can take new contacts.
        Routable => "ROUTABLE",
        /// A status defined by the administrator.
        Custom => "CUSTOM",
        /// The agent is signed out.
        Offline => "OFFLINE",
    }
}

string_enum! {
    /// Whether an agent status is usable.
    pub enum AgentStatusState {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// The channel a contact arrives on.
    pub enum Channel {
        Voice => "VOICE",
        Chat => "CHAT",
        Task => "TASK",
    }
}

string_enum! {
    /// How metric results are grouped.
    pub enum Grouping {
        Queue => "QUEUE",
        Channel => "CHANNEL",
    }
}

string_enum! {
    /// The comparison operator of a threshold.
    pub enum Comparison {
        LessThan => "LT",
    }
}

string_enum! {
    /// The statistic applied to a historical metric.
    pub enum Statistic {
        Sum => "SUM",
        Max => "MAX",
        Avg => "AVG",
    }
}

string_enum! {
    /// The unit a historical metric is reported in.
    pub enum Unit {
        Seconds => "SECONDS",
        Count => "COUNT",
        Percent => "PERCENT",
    }
}

string_enum! {
    /// The name of a historical metric.
    ///
    /// See [Historical Metrics Definitions](https://docs.aws.amazon.com/connect/latest/adminguide/historical-metrics-definitions.html)
    /// in the *Amazon Connect Administrator Guide*.
    pub enum HistoricalMetricName {
        ContactsQueued => "CONTACTS_QUEUED",
        ContactsHandled => "CONTACTS_HANDLED",
        ContactsAbandoned => "CONTACTS_ABANDONED",
        ContactsConsulted => "CONTACTS_CONSULTED",
        ContactsAgentHungUpFirst => "CONTACTS_AGENT_HUNG_UP_FIRST",
        ContactsHandledIncoming => "CONTACTS_HANDLED_INCOMING",
        ContactsHandledOutbound => "CONTACTS_HANDLED_OUTBOUND",
        ContactsHoldAbandons => "CONTACTS_HOLD_ABANDONS",
        ContactsTransferredIn => "CONTACTS_TRANSFERRED_IN",
        ContactsTransferredOut => "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredInFromQueue => "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        ContactsTransferredOutFromQueue => "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        ContactsMissed => "CONTACTS_MISSED",
        CallbackContactsHandled => "CALLBACK_CONTACTS_HANDLED",
        ApiContactsHandled => "API_CONTACTS_HANDLED",
        Occupancy => "OCCUPANCY",
        HandleTime => "HANDLE_TIME",
        AfterContactWorkTime => "AFTER_CONTACT_WORK_TIME",
        QueuedTime => "QUEUED_TIME",
        AbandonTime => "ABANDON_TIME",
        QueueAnswerTime => "QUEUE_ANSWER_TIME",
        HoldTime => "HOLD_TIME",
        InteractionTime => "INTERACTION_TIME",
        InteractionAndHoldTime => "INTERACTION_AND_HOLD_TIME",
        ServiceLevel => "SERVICE_LEVEL",
    }
}

string_enum! {
    /// How much of a past chat session to rehydrate into a new contact.
    pub enum RehydrationType {
        /// Rehydrate the entire past session.
        EntirePastSession => "ENTIRE_PAST_SESSION",
        /// Rehydrate from a specified past segment.
        FromSegment => "FROM_SEGMENT",
    }
}

/// Contains information about an agent status.
pub static AGENT_STATUS: StructureSchema = StructureSchema::new(
    "AgentStatus",
    &[
        FieldDef::new("AgentStatusARN", ShapeKind::String),
        FieldDef::new("AgentStatusId", ShapeKind::String),
        FieldDef::new("Name", ShapeKind::String).with_length(1, 127),
        FieldDef::new("Description", ShapeKind::String).with_length(1, 250),
        FieldDef::new("Type", ShapeKind::Enum(&AgentStatusType::SCHEMA)),
        FieldDef::new("DisplayOrder", ShapeKind::Integer).with_range(1, 50),
        FieldDef::new("State", ShapeKind::Enum(&AgentStatusState::SCHEMA)),
        FieldDef::new("Tags", ShapeKind::Map(&ShapeKind::String)),
    ],
);

/// Summary information for an agent status.
pub static AGENT_STATUS_SUMMARY: StructureSchema = StructureSchema::new(
    "AgentStatusSummary",
    &[
        FieldDef::new("Id", ShapeKind::String),
        FieldDef::new("Arn", ShapeKind::String),
        FieldDef::new("Name", ShapeKind::String).with_length(1, 127),
        FieldDef::new("Type", ShapeKind::Enum(&AgentStatusType::SCHEMA)),
    ],
);

/// Creates an agent status for the specified Amazon Connect instance.
pub static CREATE_AGENT_STATUS_REQUEST: StructureSchema = StructureSchema::new(
    "CreateAgentStatusRequest",
    &[
        FieldDef::new("InstanceId", ShapeKind::String).with_length(1, 100),
        FieldDef::new("Name", ShapeKind::String).with_length(1, 127),
        FieldDef::new("Description", ShapeKind::String).with_length(1, 250),
        FieldDef::new("State", ShapeKind::Enum(&AgentStatusState::SCHEMA)),
        FieldDef::new("DisplayOrder", ShapeKind::Integer).with_range(1, 50),
        FieldDef::new("Tags", ShapeKind::Map(&ShapeKind::String)),
    ],
);

/// Response to a create-agent-status request.
pub static CREATE_AGENT_STATUS_RESPONSE: StructureSchema = StructureSchema::new(
    "CreateAgentStatusResponse",
    &[
        FieldDef::new("AgentStatusARN", ShapeKind::String),
        FieldDef::new("AgentStatusId", ShapeKind::String),
    ],
);

/// Describes an agent status.
pub static DESCRIBE_AGENT_STATUS_REQUEST: StructureSchema = StructureSchema::new(
    "DescribeAgentStatusRequest",
    &[
        FieldDef::new("InstanceId", ShapeKind::String).with_length(1, 100),
        FieldDef::new("AgentStatusId", ShapeKind::String),
    ],
);

/// Response to a describe-agent-status request.
pub static DESCRIBE_AGENT_STATUS_RESPONSE: StructureSchema = StructureSchema::new(
    "DescribeAgentStatusResponse",
    &[FieldDef::new("AgentStatus", ShapeKind::Structure(&AGENT_STATUS))],
);

/// Updates an agent status.
pub static UPDATE_AGENT_STATUS_REQUEST: StructureSchema = StructureSchema::new(
    "UpdateAgentStatusRequest",
    &[
        FieldDef::new("InstanceId", ShapeKind::String).with_length(1, 100),
        FieldDef::new("AgentStatusId", ShapeKind::String),
        FieldDef::new("Name", ShapeKind::String).with_length(1, 127),
        FieldDef::new("Description", ShapeKind::String).with_length(0, 250),
        FieldDef::new("State", ShapeKind::Enum(&AgentStatusState::SCHEMA)),
        FieldDef::new("DisplayOrder", ShapeKind::Integer).with_range(1, 50),
        FieldDef::new("ResetOrderNumber", ShapeKind::Boolean),
    ],
);

/// Lists agent statuses for the specified Amazon Connect instance.
pub static LIST_AGENT_STATUS_REQUEST: StructureSchema = StructureSchema::new(
    "ListAgentStatusRequest",
    &[
        FieldDef::new("InstanceId", ShapeKind::String).with_length(1, 100),
        FieldDef::new("NextToken", ShapeKind::String),
        FieldDef::new("MaxResults", ShapeKind::Integer).with_range(1, 1000),
        FieldDef::new(
            "AgentStatusTypes",
            ShapeKind::List(&ShapeKind::Enum(&AgentStatusType::SCHEMA)),
        ),
    ],
);

static AGENT_STATUS_SUMMARY_MEMBER: ShapeKind = ShapeKind::Structure(&AGENT_STATUS_SUMMARY);

/// Response to a list-agent-status request.
pub static LIST_AGENT_STATUS_RESPONSE: StructureSchema = StructureSchema::new(
    "ListAgentStatusResponse",
    &[
        FieldDef::new("NextToken", ShapeKind::String),
        FieldDef::new(
            "AgentStatusSummaryList",
            ShapeKind::List(&AGENT_STATUS_SUMMARY_MEMBER),
        ),
    ],
);

/// Contains information about a queue resource for which metrics are
/// returned.
pub static QUEUE_REFERENCE: StructureSchema = StructureSchema::new(
    "QueueReference",
    &[
        FieldDef::new("Id", ShapeKind::String),
        FieldDef::new("Arn", ShapeKind::String),
    ],
);

/// Contains the filter to apply when retrieving metrics.
pub static FILTERS: StructureSchema = StructureSchema::new(
    "Filters",
    &[
        FieldDef::new("Queues", ShapeKind::List(&ShapeKind::String)),
        FieldDef::new("Channels", ShapeKind::List(&ShapeKind::Enum(&Channel::SCHEMA))),
    ],
);

/// Contains information about the threshold for service level metrics.
pub static THRESHOLD: StructureSchema = StructureSchema::new(
    "Threshold",
    &[
        FieldDef::new("Comparison", ShapeKind::Enum(&Comparison::SCHEMA)),
        FieldDef::new("ThresholdValue", ShapeKind::Double),
    ],
);

/// Contains information about a historical metric: name, threshold,
/// statistic, and unit.
pub static HISTORICAL_METRIC: StructureSchema = StructureSchema::new(
    "HistoricalMetric",
    &[
        FieldDef::new("Name", ShapeKind::Enum(&HistoricalMetricName::SCHEMA)),
        FieldDef::new("Threshold", ShapeKind::Structure(&THRESHOLD)),
        FieldDef::new("Statistic", ShapeKind::Enum(&Statistic::SCHEMA)),
        FieldDef::new("Unit", ShapeKind::Enum(&Unit::SCHEMA)),
    ],
);

/// Contains the data for a historical metric.
pub static HISTORICAL_METRIC_DATA: StructureSchema = StructureSchema::new(
    "HistoricalMetricData",
    &[
        FieldDef::new("Metric", ShapeKind::Structure(&HISTORICAL_METRIC)),
        FieldDef::new("Value", ShapeKind::Double),
    ],
);

/// Contains information about the dimensions for a set of metrics.
pub static DIMENSIONS: StructureSchema = StructureSchema::new(
    "Dimensions",
    &[
        FieldDef::new("Queue", ShapeKind::Structure(&QUEUE_REFERENCE)),
        FieldDef::new("Channel", ShapeKind::Enum(&Channel::SCHEMA)),
    ],
);

static HISTORICAL_METRIC_DATA_MEMBER: ShapeKind =
    ShapeKind::Structure(&HISTORICAL_METRIC_DATA);

/// Contains information about the historical metrics retrieved.
pub static HISTORICAL_METRIC_RESULT: StructureSchema = StructureSchema::new(
    "HistoricalMetricResult",
    &[
        FieldDef::new("Dimensions", ShapeKind::Structure(&DIMENSIONS)),
        FieldDef::new("Collections", ShapeKind::List(&HISTORICAL_METRIC_DATA_MEMBER)),
    ],
);

static HISTORICAL_METRIC_MEMBER: ShapeKind = ShapeKind::Structure(&HISTORICAL_METRIC);

/// Gets historical metric data from the specified Amazon Connect instance.
///
/// `StartTime` and `EndTime` must be specified in whole-minute intervals;
/// the time range between them, by default, must be less than 24 hours.
pub static GET_METRIC_DATA_REQUEST: StructureSchema = StructureSchema::new(
    "GetMetricDataRequest",
    &[
        FieldDef::new("InstanceId", ShapeKind::String).with_length(1, 100),
        FieldDef::new("StartTime", ShapeKind::Timestamp),
        FieldDef::new("EndTime", ShapeKind::Timestamp),
        FieldDef::new("Filters", ShapeKind::Structure(&FILTERS)),
        FieldDef::new("Groupings", ShapeKind::List(&ShapeKind::Enum(&Grouping::SCHEMA))),
        FieldDef::new("HistoricalMetrics", ShapeKind::List(&HISTORICAL_METRIC_MEMBER)),
        FieldDef::new("NextToken", ShapeKind::String),
        FieldDef::new("MaxResults", ShapeKind::Integer).with_range(1, 100),
    ],
);

static HISTORICAL_METRIC_RESULT_MEMBER: ShapeKind =
    ShapeKind::Structure(&HISTORICAL_METRIC_RESULT);

/// Response to a get-metric-data request.
pub static GET_METRIC_DATA_RESPONSE: StructureSchema = StructureSchema::new(
    "GetMetricDataResponse",
    &[
        FieldDef::new("NextToken", ShapeKind::String),
        FieldDef::new("MetricResults", ShapeKind::List(&HISTORICAL_METRIC_RESULT_MEMBER)),
    ],
);

/// Contains the filter to apply when retrieving metrics with the
/// `GetMetricDataV2` API.
///
/// Valid filter keys are `QUEUE`, `ROUTING_PROFILE`, `AGENT`, `CHANNEL`,
/// `AGENT_HIERARCHY_LEVEL_ONE` through `AGENT_HIERARCHY_LEVEL_FIVE`, and
/// `FEATURE`. A single request supports at most 5 filter keys and 100
/// filter values.
pub static FILTER_V2: StructureSchema = StructureSchema::new(
    "FilterV2",
    &[
        FieldDef::new("FilterKey", ShapeKind::String),
        FieldDef::new("FilterValues", ShapeKind::List(&ShapeKind::String)),
    ],
);

/// Contains information about the threshold for service level metrics in
/// version 2 of the metrics API.
pub static THRESHOLD_V2: StructureSchema = StructureSchema::new(
    "ThresholdV2",
    &[
        FieldDef::new("Comparison", ShapeKind::String),
        FieldDef::new("ThresholdValue", ShapeKind::Double),
    ],
);

static THRESHOLD_V2_MEMBER: ShapeKind = ShapeKind::Structure(&THRESHOLD_V2);

/// Contains information about a metric in version 2 of the metrics API:
/// its name and optional thresholds.
pub static METRIC_V2: StructureSchema = StructureSchema::new(
    "MetricV2",
    &[
        FieldDef::new("Name", ShapeKind::String),
        FieldDef::new("Threshold", ShapeKind::List(&THRESHOLD_V2_MEMBER)),
    ],
);

/// Contains the data for one metric returned by `GetMetricDataV2`.
pub static METRIC_DATA_V2: StructureSchema = StructureSchema::new(
    "MetricDataV2",
    &[
        FieldDef::new("Metric", ShapeKind::Structure(&METRIC_V2)),
        FieldDef::new("Value", ShapeKind::Double),
    ],
);

static METRIC_DATA_V2_MEMBER: ShapeKind = ShapeKind::Structure(&METRIC_DATA_V2);

/// Contains the metric results for one grouping, keyed by the dimensions
/// the results were grouped on.
pub static METRIC_RESULT_V2: StructureSchema = StructureSchema::new(
    "MetricResultV2",
    &[
        FieldDef::new("Dimensions", ShapeKind::Map(&ShapeKind::String)),
        FieldDef::new("Collections", ShapeKind::List(&METRIC_DATA_V2_MEMBER)),
    ],
);

static FILTER_V2_MEMBER: ShapeKind = ShapeKind::Structure(&FILTER_V2);
static METRIC_V2_MEMBER: ShapeKind = ShapeKind::Structure(&METRIC_V2);

/// Gets metric data from the specified Amazon Connect instance with the
/// version 2 API: filtering at the metric level, and grouping by channels,
/// queues, routing profiles, agents, and agent hierarchy levels.
///
/// Historical data is available for the last 35 days, in 24-hour intervals.
/// Unlike the version 1 request, groupings are open grouping-key strings
/// and the instance is addressed by `ResourceArn`.
pub static GET_METRIC_DATA_V2_REQUEST: StructureSchema = StructureSchema::new(
    "GetMetricDataV2Request",
    &[
        FieldDef::new("ResourceArn", ShapeKind::String),
        FieldDef::new("StartTime", ShapeKind::Timestamp),
        FieldDef::new("EndTime", ShapeKind::Timestamp),
        FieldDef::new("Filters", ShapeKind::List(&FILTER_V2_MEMBER)),
        FieldDef::new("Groupings", ShapeKind::List(&ShapeKind::String)),
        FieldDef::new("Metrics", ShapeKind::List(&METRIC_V2_MEMBER)),
        FieldDef::new("NextToken", ShapeKind::String).with_length(1, 2500),
        FieldDef::new("MaxResults", ShapeKind::Integer).with_range(1, 100),
    ],
);

static METRIC_RESULT_V2_MEMBER: ShapeKind = ShapeKind::Structure(&METRIC_RESULT_V2);

/// Response to a get-metric-data-v2 request.
pub static GET_METRIC_DATA_V2_RESPONSE: StructureSchema = StructureSchema::new(
    "GetMetricDataV2Response",
    &[
        FieldDef::new("NextToken", ShapeKind::String).with_length(1, 2500),
        FieldDef::new("MetricResults", ShapeKind::List(&METRIC_RESULT_V2_MEMBER)),
    ],
);

/// Enables rehydration of chats for the lifespan of a contact: a new chat
/// can recall the past chat session of a persistent chat pair.
pub static CREATE_PERSISTENT_CONTACT_ASSOCIATION_REQUEST: StructureSchema =
    StructureSchema::new(
        "CreatePersistentContactAssociationRequest",
        &[
            FieldDef::new("InstanceId", ShapeKind::String).with_length(1, 100),
            FieldDef::new("InitialContactId", ShapeKind::String).with_length(1, 256),
            FieldDef::new(
                "RehydrationType",
                ShapeKind::Enum(&RehydrationType::SCHEMA),
            ),
            FieldDef::new("SourceContactId", ShapeKind::String).with_length(1, 256),
            FieldDef::new("ClientToken", ShapeKind::String).with_max_length(500),
        ],
    );

/// Response to a create-persistent-contact-association request.
pub static CREATE_PERSISTENT_CONTACT_ASSOCIATION_RESPONSE: StructureSchema =
    StructureSchema::new(
        "CreatePersistentContactAssociationResponse",
        &[FieldDef::new("ContinuedFromContactId", ShapeKind::String)],
    );

#[cfg(test)]
mod test {
    use super::*;
    use shape_types::schema::ShapeKind;
    use shape_types::Record;

    #[test]
    fn agent_status_members_are_declared_in_wire_order() {
        let names: Vec<&str> = AGENT_STATUS.fields().iter().map(|f| f.name()).collect();
        assert_eq!(
            vec![
                "AgentStatusARN",
                "AgentStatusId",
                "Name",
                "Description",
                "Type",
                "DisplayOrder",
                "State",
                "Tags",
            ],
            names,
        );
    }

    #[test]
    fn constraints_mirror_the_service_contract() {
        let name = AGENT_STATUS.field("Name").unwrap();
        assert_eq!(Some(1), name.constraints().min_length());
        assert_eq!(Some(127), name.constraints().max_length());

        let order = AGENT_STATUS.field("DisplayOrder").unwrap();
        assert_eq!(Some(1), order.constraints().min_value());
        assert_eq!(Some(50), order.constraints().max_value());

        let token = CREATE_PERSISTENT_CONTACT_ASSOCIATION_REQUEST
            .field("ClientToken")
            .unwrap();
        assert_eq!(None, token.constraints().min_length());
        assert_eq!(Some(500), token.constraints().max_length());
    }

    #[test]
    fn nested_shapes_are_reachable_through_the_schema() {
        let field = DESCRIBE_AGENT_STATUS_RESPONSE.field("AgentStatus").unwrap();
        match field.kind() {
            ShapeKind::Structure(schema) => assert_eq!("AgentStatus", schema.name()),
            other => panic!("expected structure kind, got {:?}", other),
        }

        let field = GET_METRIC_DATA_REQUEST.field("HistoricalMetrics").unwrap();
        match field.kind() {
            ShapeKind::List(ShapeKind::Structure(schema)) => {
                assert_eq!("HistoricalMetric", schema.name())
            }
            other => panic!("expected list of structures, got {:?}", other),
        }
    }

    #[test]
    fn enum_values_match_the_service_model() {
        assert_eq!(
            ["ROUTABLE", "CUSTOM", "OFFLINE"].as_slice(),
            AgentStatusType::values(),
        );
        assert_eq!(Ok(AgentStatusType::Routable), "ROUTABLE".parse());
        assert!("routable".parse::<AgentStatusType>().is_err());

        assert_eq!("LT", Comparison::LessThan.as_str());
        assert_eq!(25, HistoricalMetricName::values().len());
        assert_eq!(
            Ok(HistoricalMetricName::ServiceLevel),
            "SERVICE_LEVEL".parse(),
        );
    }

    #[test]
    fn metric_v2_request_members_are_declared_in_wire_order() {
        let names: Vec<&str> = GET_METRIC_DATA_V2_REQUEST
            .fields()
            .iter()
            .map(|f| f.name())
            .collect();
        assert_eq!(
            vec![
                "ResourceArn",
                "StartTime",
                "EndTime",
                "Filters",
                "Groupings",
                "Metrics",
                "NextToken",
                "MaxResults",
            ],
            names,
        );

        let token = GET_METRIC_DATA_V2_REQUEST.field("NextToken").unwrap();
        assert_eq!(Some(1), token.constraints().min_length());
        assert_eq!(Some(2500), token.constraints().max_length());

        let results = GET_METRIC_DATA_V2_REQUEST.field("MaxResults").unwrap();
        assert_eq!(Some(1), results.constraints().min_value());
        assert_eq!(Some(100), results.constraints().max_value());

        let metrics = GET_METRIC_DATA_V2_REQUEST.field("Metrics").unwrap();
        match metrics.kind() {
            ShapeKind::List(ShapeKind::Structure(schema)) => {
                assert_eq!("MetricV2", schema.name())
            }
            other => panic!("expected list of structures, got {:?}", other),
        }
    }

    #[test]
    fn metric_request_renders_nested_records() {
        let threshold = Record::new(&THRESHOLD)
            .with("Comparison", Comparison::LessThan)
            .with("ThresholdValue", 60.0);
        let metric = Record::new(&HISTORICAL_METRIC)
            .with("Name", HistoricalMetricName::ServiceLevel)
            .with("Threshold", threshold)
            .with("Statistic", Statistic::Avg)
            .with("Unit", Unit::Percent);
        assert_eq!(
            "{Name: SERVICE_LEVEL, Threshold: {Comparison: LT, ThresholdValue: 60.0}, \
             Statistic: AVG, Unit: PERCENT}",
            format!("{}", metric),
        );
    }
}
