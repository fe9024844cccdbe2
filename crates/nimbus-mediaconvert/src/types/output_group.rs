//! Output groups: packaging settings and the outputs they contain.

use serde::{Deserialize, Serialize};

use super::audio::AudioDescription;
use super::captions::CaptionDescription;
use super::container::ContainerSettings;
use super::video::VideoDescription;

nimbus_core::string_enum! {
    pub enum OutputGroupType {
        HlsGroupSettings = "HLS_GROUP_SETTINGS",
        DashIsoGroupSettings = "DASH_ISO_GROUP_SETTINGS",
        FileGroupSettings = "FILE_GROUP_SETTINGS",
        MsSmoothGroupSettings = "MS_SMOOTH_GROUP_SETTINGS",
        CmafGroupSettings = "CMAF_GROUP_SETTINGS",
    }
}

nimbus_core::string_enum! {
    pub enum HlsSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }
}

nimbus_core::string_enum! {
    pub enum HlsDirectoryStructure {
        SingleDirectory = "SINGLE_DIRECTORY",
        SubdirectoryPerStream = "SUBDIRECTORY_PER_STREAM",
    }
}

nimbus_core::string_enum! {
    pub enum HlsManifestDurationFormat {
        FloatingPoint = "FLOATING_POINT",
        Integer = "INTEGER",
    }
}

nimbus_core::string_enum! {
    pub enum HlsOutputSelection {
        ManifestsAndSegments = "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly = "SEGMENTS_ONLY",
    }
}

nimbus_core::string_enum! {
    pub enum HlsProgramDateTime {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

nimbus_core::string_enum! {
    pub enum HlsCodecSpecification {
        Rfc6381 = "RFC_6381",
        Rfc4281 = "RFC_4281",
    }
}

nimbus_core::string_enum! {
    pub enum HlsStreamInfResolution {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

nimbus_core::string_enum! {
    pub enum HlsCaptionLanguageSetting {
        Insert = "INSERT",
        Omit = "OMIT",
        None = "NONE",
    }
}

nimbus_core::string_enum! {
    pub enum HlsManifestCompression {
        Gzip = "GZIP",
        None = "NONE",
    }
}

nimbus_core::string_enum! {
    pub enum HlsClientCache {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

nimbus_core::string_enum! {
    pub enum HlsTimedMetadataId3Frame {
        None = "NONE",
        Priv = "PRIV",
        Tdrl = "TDRL",
    }
}

nimbus_core::string_enum! {
    pub enum HlsAudioOnlyContainer {
        Automatic = "AUTOMATIC",
        M2ts = "M2TS",
    }
}

nimbus_core::string_enum! {
    pub enum HlsIFrameOnlyManifest {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

nimbus_core::string_enum! {
    pub enum DashIsoSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }
}

nimbus_core::string_enum! {
    pub enum DashIsoHbbtvCompliance {
        Hbbtv15 = "HBBTV_1_5",
        None = "NONE",
    }
}

nimbus_core::string_enum! {
    pub enum DashIsoMpdProfile {
        MainProfile = "MAIN_PROFILE",
        OnDemandProfile = "ON_DEMAND_PROFILE",
    }
}

nimbus_core::string_enum! {
    pub enum CmafSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }
}

nimbus_core::string_enum! {
    pub enum CmafWriteDashManifest {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

nimbus_core::string_enum! {
    pub enum CmafWriteHlsManifest {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

nimbus_core::string_enum! {
    pub enum CmafManifestDurationFormat {
        FloatingPoint = "FLOATING_POINT",
        Integer = "INTEGER",
    }
}

/// Standalone files (MP4, MOV, ...) written to one destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileGroupSettings {
    /// S3 prefix of the written files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HlsGroupSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_language_setting: Option<HlsCaptionLanguageSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cache: Option<HlsClientCache>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_specification: Option<HlsCodecSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_structure: Option<HlsDirectoryStructure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_compression: Option<HlsManifestCompression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_duration_format: Option<HlsManifestDurationFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_segment_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_selection: Option<HlsOutputSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_date_time: Option<HlsProgramDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_date_time_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_control: Option<HlsSegmentControl>,
    /// Target segment duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments_per_subdirectory: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_inf_resolution: Option<HlsStreamInfResolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timed_metadata_id3_frame: Option<HlsTimedMetadataId3Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timed_metadata_id3_period: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashIsoGroupSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hbbtv_compliance: Option<DashIsoHbbtvCompliance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_buffer_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpd_profile: Option<DashIsoMpdProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_control: Option<DashIsoSegmentControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmafGroupSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_duration_format: Option<CmafManifestDurationFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_buffer_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_control: Option<CmafSegmentControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_dash_manifest: Option<CmafWriteDashManifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_hls_manifest: Option<CmafWriteHlsManifest>,
}

/// Packaging of an output group. `kind` selects which block applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputGroupSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmaf_group_settings: Option<CmafGroupSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_iso_group_settings: Option<DashIsoGroupSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_group_settings: Option<FileGroupSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_group_settings: Option<HlsGroupSettings>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OutputGroupType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HlsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_only_container: Option<HlsAudioOnlyContainer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i_frame_only_manifest: Option<HlsIFrameOnlyManifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_modifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_settings: Option<HlsSettings>,
}

/// One rendition inside an output group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub audio_descriptions: Vec<AudioDescription>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub caption_descriptions: Vec<CaptionDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_settings: Option<ContainerSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Appended to the input file name to build the output name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_modifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_settings: Option<OutputSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_description: Option<VideoDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_group_settings: Option<OutputGroupSettings>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub outputs: Vec<Output>,
}
