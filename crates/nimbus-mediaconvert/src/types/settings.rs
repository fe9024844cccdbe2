//! Root of the job settings tree.

use serde::{Deserialize, Serialize};

use super::output_group::OutputGroup;
use super::source::JobInput;

nimbus_core::string_enum! {
    /// Source of the output timecode.
    pub enum TimecodeSource {
        Embedded = "EMBEDDED",
        Zerobased = "ZEROBASED",
        Specifiedstart = "SPECIFIEDSTART",
    }
}

/// Timecode handling for all outputs of the job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimecodeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<TimecodeSource>,
    /// Used with `SPECIFIEDSTART`, as `HH:MM:SS:FF`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_offset: Option<String>,
}

/// What the job transcodes: its inputs and the output groups built from
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_avail_offset: Option<i32>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub inputs: Vec<JobInput>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub output_groups: Vec<OutputGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecode_config: Option<TimecodeConfig>,
}
