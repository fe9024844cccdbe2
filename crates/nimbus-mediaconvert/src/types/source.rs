//! Input-side shapes: the files a job reads and how their tracks are
//! selected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::captions::CaptionSelector;

nimbus_core::string_enum! {
    pub enum AudioDefaultSelection {
        Default = "DEFAULT",
        NotDefault = "NOT_DEFAULT",
    }
}

nimbus_core::string_enum! {
    pub enum AudioSelectorType {
        Pid = "PID",
        Track = "TRACK",
        LanguageCode = "LANGUAGE_CODE",
        HlsRenditionGroup = "HLS_RENDITION_GROUP",
        AllPcm = "ALL_PCM",
    }
}

nimbus_core::string_enum! {
    pub enum ColorSpace {
        Follow = "FOLLOW",
        Rec601 = "REC_601",
        Rec709 = "REC_709",
        Hdr10 = "HDR10",
        Hlg2020 = "HLG_2020",
        P3dci = "P3DCI",
        P3d65Sdr = "P3D65_SDR",
        P3d65Hdr = "P3D65_HDR",
    }
}

nimbus_core::string_enum! {
    pub enum ColorSpaceUsage {
        Force = "FORCE",
        Fallback = "FALLBACK",
    }
}

nimbus_core::string_enum! {
    pub enum InputRotate {
        Degree0 = "DEGREE_0",
        Degrees90 = "DEGREES_90",
        Degrees180 = "DEGREES_180",
        Degrees270 = "DEGREES_270",
        Auto = "AUTO",
    }
}

nimbus_core::string_enum! {
    pub enum InputTimecodeSource {
        Embedded = "EMBEDDED",
        Zerobased = "ZEROBASED",
        Specifiedstart = "SPECIFIEDSTART",
    }
}

nimbus_core::string_enum! {
    pub enum InputFilterEnable {
        Auto = "AUTO",
        Disable = "DISABLE",
        Force = "FORCE",
    }
}

nimbus_core::string_enum! {
    pub enum InputPsiControl {
        IgnorePsi = "IGNORE_PSI",
        UsePsi = "USE_PSI",
    }
}

nimbus_core::string_enum! {
    pub enum InputDeblockFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

nimbus_core::string_enum! {
    pub enum InputDenoiseFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

/// Selects one audio track (or group of tracks) of an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_selection: Option<AudioDefaultSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_audio_file_input: Option<String>,
    /// ISO 639 code, e.g. `ENG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub pids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_selection: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_type: Option<AudioSelectorType>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tracks: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space: Option<ColorSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space_usage: Option<ColorSpaceUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<InputRotate>,
}

/// A section of the input to keep, as `HH:MM:SS:FF` timecodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputClipping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timecode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timecode: Option<String>,
}

/// One input of a job (the `Input` shape on the wire).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub audio_selectors: BTreeMap<String, AudioSelector>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub caption_selectors: BTreeMap<String, CaptionSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deblock_filter: Option<InputDeblockFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denoise_filter: Option<InputDenoiseFilter>,
    /// S3 or HTTP(S) URL of the source file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_enable: Option<InputFilterEnable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_strength: Option<i32>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub input_clippings: Vec<InputClipping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psi_control: Option<InputPsiControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecode_source: Option<InputTimecodeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecode_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_selector: Option<VideoSelector>,
}
