//! The `Job` record and the small shapes around it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::settings::JobSettings;

nimbus_core::string_enum! {
    /// Accelerated transcoding mode.
    pub enum AccelerationMode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        Preferred = "PREFERRED",
    }
}

nimbus_core::string_enum! {
    /// Whether a job ran accelerated.
    pub enum AccelerationStatus {
        NotApplicable = "NOT_APPLICABLE",
        InProgress = "IN_PROGRESS",
        Accelerated = "ACCELERATED",
        NotAccelerated = "NOT_ACCELERATED",
    }
}

nimbus_core::string_enum! {
    /// Where the cost allocation tags of a job come from.
    pub enum BillingTagsSource {
        Queue = "QUEUE",
        Preset = "PRESET",
        JobTemplate = "JOB_TEMPLATE",
        Job = "JOB",
    }
}

nimbus_core::string_enum! {
    /// Phase of a running job.
    pub enum JobPhase {
        Probing = "PROBING",
        Transcoding = "TRANSCODING",
        Uploading = "UPLOADING",
    }
}

nimbus_core::string_enum! {
    /// Status of a job.
    pub enum JobStatus {
        Submitted = "SUBMITTED",
        Progressing = "PROGRESSING",
        Complete = "COMPLETE",
        Canceled = "CANCELED",
        Error = "ERROR",
    }
}

nimbus_core::string_enum! {
    /// Sort order of `ListJobs`.
    pub enum Order {
        Ascending = "ASCENDING",
        Descending = "DESCENDING",
    }
}

nimbus_core::string_enum! {
    /// Behaviour of `DescribeEndpoints`.
    pub enum DescribeEndpointsMode {
        Default = "DEFAULT",
        GetOnly = "GET_ONLY",
    }
}

nimbus_core::string_enum! {
    /// Whether an on-demand job simulates a reserved queue.
    pub enum SimulateReservedQueue {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

nimbus_core::string_enum! {
    /// Interval between `STATUS_UPDATE` events.
    pub enum StatusUpdateInterval {
        Seconds10 = "SECONDS_10",
        Seconds12 = "SECONDS_12",
        Seconds15 = "SECONDS_15",
        Seconds20 = "SECONDS_20",
        Seconds30 = "SECONDS_30",
        Seconds60 = "SECONDS_60",
        Seconds120 = "SECONDS_120",
        Seconds180 = "SECONDS_180",
        Seconds240 = "SECONDS_240",
        Seconds300 = "SECONDS_300",
        Seconds360 = "SECONDS_360",
        Seconds420 = "SECONDS_420",
        Seconds480 = "SECONDS_480",
        Seconds540 = "SECONDS_540",
        Seconds600 = "SECONDS_600",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccelerationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AccelerationMode>,
}

/// An additional queue a job may hop to while waiting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HopDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_minutes: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMessages {
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub info: Vec<String>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub warning: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_in_px: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_in_px: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_ms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_details: Option<VideoDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputGroupDetail {
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub output_details: Vec<OutputDetail>,
}

/// A move of the job between queues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueTransition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_queue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_queue: Option<String>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub finish_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

/// An account-specific MediaConvert endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A transcoding job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_settings: Option<AccelerationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_status: Option<AccelerationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_tags_source: Option<BillingTagsSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<JobPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hop_destinations: Vec<HopDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_percent_complete: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<JobMessages>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub output_group_details: Vec<OutputGroupDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub queue_transitions: Vec<QueueTransition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<JobSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulate_reserved_queue: Option<SimulateReservedQueue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_update_interval: Option<StatusUpdateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub user_metadata: BTreeMap<String, String>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub warnings: Vec<WarningGroup>,
}
