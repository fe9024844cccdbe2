//! Caption selection on inputs and caption rendering on outputs.

use serde::{Deserialize, Serialize};

nimbus_core::string_enum! {
    pub enum CaptionSourceType {
        Ancillary = "ANCILLARY",
        DvbSub = "DVB_SUB",
        Embedded = "EMBEDDED",
        Scte20 = "SCTE20",
        Scc = "SCC",
        Ttml = "TTML",
        Stl = "STL",
        Srt = "SRT",
        Smi = "SMI",
        SmpteTt = "SMPTE_TT",
        Teletext = "TELETEXT",
        NullSource = "NULL_SOURCE",
        Imsc = "IMSC",
        Webvtt = "WEBVTT",
    }
}

nimbus_core::string_enum! {
    pub enum CaptionSourceConvert608To708 {
        Upconvert = "UPCONVERT",
        Disabled = "DISABLED",
    }
}

nimbus_core::string_enum! {
    pub enum EmbeddedTerminateCaptions {
        EndOfInput = "END_OF_INPUT",
        Disabled = "DISABLED",
    }
}

nimbus_core::string_enum! {
    pub enum CaptionDestinationType {
        BurnIn = "BURN_IN",
        DvbSub = "DVB_SUB",
        Embedded = "EMBEDDED",
        EmbeddedPlusScte20 = "EMBEDDED_PLUS_SCTE20",
        Imsc = "IMSC",
        Scte20PlusEmbedded = "SCTE20_PLUS_EMBEDDED",
        Scc = "SCC",
        Srt = "SRT",
        Smi = "SMI",
        Teletext = "TELETEXT",
        Ttml = "TTML",
        Webvtt = "WEBVTT",
    }
}

nimbus_core::string_enum! {
    pub enum SccDestinationFramerate {
        Framerate2397 = "FRAMERATE_23_97",
        Framerate24 = "FRAMERATE_24",
        Framerate25 = "FRAMERATE_25",
        Framerate2997Dropframe = "FRAMERATE_29_97_DROPFRAME",
        Framerate2997NonDropframe = "FRAMERATE_29_97_NON_DROPFRAME",
    }
}

nimbus_core::string_enum! {
    pub enum WebvttStylePassthrough {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
        Strict = "STRICT",
    }
}

/// Sidecar caption file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSourceSettings {
    #[serde(
        rename = "convert608To708",
        skip_serializing_if = "Option::is_none"
    )]
    pub convert_608_to_708: Option<CaptionSourceConvert608To708>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_delta: Option<i32>,
}

/// CEA-608/708 captions embedded in the video stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedSourceSettings {
    #[serde(
        rename = "convert608To708",
        skip_serializing_if = "Option::is_none"
    )]
    pub convert_608_to_708: Option<CaptionSourceConvert608To708>,
    #[serde(
        rename = "source608ChannelNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_608_channel_number: Option<i32>,
    #[serde(
        rename = "source608TrackNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_608_track_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminate_captions: Option<EmbeddedTerminateCaptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSourceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_source_settings: Option<EmbeddedSourceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_source_settings: Option<FileSourceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<CaptionSourceType>,
}

/// Selects the captions of an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_settings: Option<CaptionSourceSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedDestinationSettings {
    #[serde(
        rename = "destination608ChannelNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_608_channel_number: Option<i32>,
    #[serde(
        rename = "destination708ServiceNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_708_service_number: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SccDestinationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate: Option<SccDestinationFramerate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebvttDestinationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_passthrough: Option<WebvttStylePassthrough>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDestinationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<CaptionDestinationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_destination_settings: Option<EmbeddedDestinationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scc_destination_settings: Option<SccDestinationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webvtt_destination_settings: Option<WebvttDestinationSettings>,
}

/// Captions of one output, rendered from a named caption selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_selector_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_settings: Option<CaptionDestinationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_description: Option<String>,
}
