//! Audio encoding settings of an output.

use serde::{Deserialize, Serialize};

nimbus_core::string_enum! {
    pub enum AudioTypeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

nimbus_core::string_enum! {
    pub enum AudioLanguageCodeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

nimbus_core::string_enum! {
    pub enum AudioCodec {
        Aac = "AAC",
        Mp2 = "MP2",
        Mp3 = "MP3",
        Wav = "WAV",
        Aiff = "AIFF",
        Ac3 = "AC3",
        Eac3 = "EAC3",
        Eac3Atmos = "EAC3_ATMOS",
        Vorbis = "VORBIS",
        Opus = "OPUS",
        Passthrough = "PASSTHROUGH",
        Flac = "FLAC",
    }
}

nimbus_core::string_enum! {
    pub enum AacCodecProfile {
        Lc = "LC",
        Hev1 = "HEV1",
        Hev2 = "HEV2",
    }
}

nimbus_core::string_enum! {
    pub enum AacCodingMode {
        AdReceiverMix = "AD_RECEIVER_MIX",
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode11 = "CODING_MODE_1_1",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode51 = "CODING_MODE_5_1",
    }
}

nimbus_core::string_enum! {
    pub enum AacRateControlMode {
        Cbr = "CBR",
        Vbr = "VBR",
    }
}

nimbus_core::string_enum! {
    pub enum AacRawFormat {
        LatmLoas = "LATM_LOAS",
        None = "NONE",
    }
}

nimbus_core::string_enum! {
    pub enum AacSpecification {
        Mpeg2 = "MPEG2",
        Mpeg4 = "MPEG4",
    }
}

nimbus_core::string_enum! {
    pub enum AacVbrQuality {
        Low = "LOW",
        MediumLow = "MEDIUM_LOW",
        MediumHigh = "MEDIUM_HIGH",
        High = "HIGH",
    }
}

nimbus_core::string_enum! {
    pub enum Mp3RateControlMode {
        Cbr = "CBR",
        Vbr = "VBR",
    }
}

nimbus_core::string_enum! {
    pub enum WavFormat {
        Riff = "RIFF",
        Rf64 = "RF64",
        Extensible = "EXTENSIBLE",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AacSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<AacCodecProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding_mode: Option<AacCodingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<AacRateControlMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_format: Option<AacRawFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<AacSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vbr_quality: Option<AacVbrQuality>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mp3Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<Mp3RateControlMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
    /// VBR quality, 0 (best) to 9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vbr_quality: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<WavFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i32>,
}

/// Codec of an audio output plus the settings block for that codec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioCodecSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aac_settings: Option<AacSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<AudioCodec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp3_settings: Option<Mp3Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wav_settings: Option<WavSettings>,
}

/// One audio track of an output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDescription {
    /// Name of the input audio selector to encode from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_type_control: Option<AudioTypeControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_settings: Option<AudioCodecSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code_control: Option<AudioLanguageCodeControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}
