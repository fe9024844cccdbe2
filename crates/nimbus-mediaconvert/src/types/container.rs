//! Output container settings.

use serde::{Deserialize, Serialize};

nimbus_core::string_enum! {
    pub enum ContainerType {
        F4v = "F4V",
        Ismv = "ISMV",
        M2ts = "M2TS",
        M3u8 = "M3U8",
        Cmfc = "CMFC",
        Mov = "MOV",
        Mp4 = "MP4",
        Mpd = "MPD",
        Mxf = "MXF",
        Webm = "WEBM",
        Raw = "RAW",
        Y4m = "Y4M",
    }
}

nimbus_core::string_enum! {
    pub enum Mp4CslgAtom {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

nimbus_core::string_enum! {
    pub enum Mp4FreeSpaceBox {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

nimbus_core::string_enum! {
    pub enum Mp4MoovPlacement {
        ProgressiveDownload = "PROGRESSIVE_DOWNLOAD",
        Normal = "NORMAL",
    }
}

nimbus_core::string_enum! {
    pub enum CmfcAudioDuration {
        DefaultCodecDuration = "DEFAULT_CODEC_DURATION",
        MatchVideoDuration = "MATCH_VIDEO_DURATION",
    }
}

nimbus_core::string_enum! {
    pub enum M3u8PcrControl {
        PcrEveryPesPacket = "PCR_EVERY_PES_PACKET",
        ConfiguredPcrPeriod = "CONFIGURED_PCR_PERIOD",
    }
}

nimbus_core::string_enum! {
    pub enum M3u8Scte35Source {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }
}

nimbus_core::string_enum! {
    pub enum TimedMetadata {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }
}

nimbus_core::string_enum! {
    pub enum M3u8NielsenId3 {
        Insert = "INSERT",
        None = "NONE",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mp4Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<CmfcAudioDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cslg_atom: Option<Mp4CslgAtom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctts_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_space_box: Option<Mp4FreeSpaceBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moov_placement: Option<Mp4MoovPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp4_major_brand: Option<String>,
}

/// Transport-stream settings of HLS segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct M3u8Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_frames_per_pes: Option<i32>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub audio_pids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nielsen_id3: Option<M3u8NielsenId3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcr_control: Option<M3u8PcrControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmt_pid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata_pid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scte35_source: Option<M3u8Scte35Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timed_metadata: Option<TimedMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_pid: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m3u8_settings: Option<M3u8Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp4_settings: Option<Mp4Settings>,
}
