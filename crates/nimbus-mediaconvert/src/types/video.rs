//! Video encoding settings of an output.

use serde::{Deserialize, Serialize};

nimbus_core::string_enum! {
    pub enum AfdSignaling {
        None = "NONE",
        Auto = "AUTO",
        Fixed = "FIXED",
    }
}

nimbus_core::string_enum! {
    pub enum AntiAlias {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

nimbus_core::string_enum! {
    pub enum ColorMetadata {
        Ignore = "IGNORE",
        Insert = "INSERT",
    }
}

nimbus_core::string_enum! {
    pub enum DropFrameTimecode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

nimbus_core::string_enum! {
    pub enum RespondToAfd {
        None = "NONE",
        Respond = "RESPOND",
        Passthrough = "PASSTHROUGH",
    }
}

nimbus_core::string_enum! {
    pub enum ScalingBehavior {
        Default = "DEFAULT",
        StretchToOutput = "STRETCH_TO_OUTPUT",
        Fit = "FIT",
        FitNoUpscale = "FIT_NO_UPSCALE",
        Fill = "FILL",
    }
}

nimbus_core::string_enum! {
    pub enum VideoTimecodeInsertion {
        Disabled = "DISABLED",
        PicTimingSei = "PIC_TIMING_SEI",
    }
}

nimbus_core::string_enum! {
    pub enum VideoCodec {
        Av1 = "AV1",
        AvcIntra = "AVC_INTRA",
        FrameCapture = "FRAME_CAPTURE",
        H264 = "H_264",
        H265 = "H_265",
        Mpeg2 = "MPEG2",
        Passthrough = "PASSTHROUGH",
        Prores = "PRORES",
        Uncompressed = "UNCOMPRESSED",
        Vc3 = "VC3",
        Vp8 = "VP8",
        Vp9 = "VP9",
        Xavc = "XAVC",
    }
}

nimbus_core::string_enum! {
    pub enum H264RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
        Qvbr = "QVBR",
    }
}

nimbus_core::string_enum! {
    pub enum H264CodecProfile {
        Baseline = "BASELINE",
        High = "HIGH",
        High10Bit = "HIGH_10BIT",
        High422 = "HIGH_422",
        High42210Bit = "HIGH_422_10BIT",
        Main = "MAIN",
    }
}

nimbus_core::string_enum! {
    pub enum H264CodecLevel {
        Auto = "AUTO",
        Level1 = "LEVEL_1",
        Level11 = "LEVEL_1_1",
        Level12 = "LEVEL_1_2",
        Level13 = "LEVEL_1_3",
        Level2 = "LEVEL_2",
        Level21 = "LEVEL_2_1",
        Level22 = "LEVEL_2_2",
        Level3 = "LEVEL_3",
        Level31 = "LEVEL_3_1",
        Level32 = "LEVEL_3_2",
        Level4 = "LEVEL_4",
        Level41 = "LEVEL_4_1",
        Level42 = "LEVEL_4_2",
        Level5 = "LEVEL_5",
        Level51 = "LEVEL_5_1",
        Level52 = "LEVEL_5_2",
    }
}

nimbus_core::string_enum! {
    pub enum H264EntropyEncoding {
        Cabac = "CABAC",
        Cavlc = "CAVLC",
    }
}

nimbus_core::string_enum! {
    pub enum H264FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

nimbus_core::string_enum! {
    pub enum H264FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
        FrameFormer = "FRAMEFORMER",
    }
}

nimbus_core::string_enum! {
    pub enum H264GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
        Auto = "AUTO",
    }
}

nimbus_core::string_enum! {
    pub enum H264InterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }
}

nimbus_core::string_enum! {
    pub enum H264ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

nimbus_core::string_enum! {
    pub enum H264QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        SinglePassHq = "SINGLE_PASS_HQ",
        MultiPassHq = "MULTI_PASS_HQ",
    }
}

nimbus_core::string_enum! {
    pub enum H264SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        TransitionDetection = "TRANSITION_DETECTION",
    }
}

nimbus_core::string_enum! {
    pub enum H264AdaptiveQuantization {
        Off = "OFF",
        Auto = "AUTO",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        Higher = "HIGHER",
        Max = "MAX",
    }
}

nimbus_core::string_enum! {
    pub enum H265RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
        Qvbr = "QVBR",
    }
}

nimbus_core::string_enum! {
    pub enum H265CodecProfile {
        MainMain = "MAIN_MAIN",
        MainHigh = "MAIN_HIGH",
        Main10Main = "MAIN10_MAIN",
        Main10High = "MAIN10_HIGH",
        Main4228BitMain = "MAIN_422_8BIT_MAIN",
        Main4228BitHigh = "MAIN_422_8BIT_HIGH",
        Main42210BitMain = "MAIN_422_10BIT_MAIN",
        Main42210BitHigh = "MAIN_422_10BIT_HIGH",
    }
}

nimbus_core::string_enum! {
    pub enum H265CodecLevel {
        Auto = "AUTO",
        Level1 = "LEVEL_1",
        Level2 = "LEVEL_2",
        Level21 = "LEVEL_2_1",
        Level3 = "LEVEL_3",
        Level31 = "LEVEL_3_1",
        Level4 = "LEVEL_4",
        Level41 = "LEVEL_4_1",
        Level5 = "LEVEL_5",
        Level51 = "LEVEL_5_1",
        Level52 = "LEVEL_5_2",
        Level6 = "LEVEL_6",
        Level61 = "LEVEL_6_1",
        Level62 = "LEVEL_6_2",
    }
}

nimbus_core::string_enum! {
    pub enum H265GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
        Auto = "AUTO",
    }
}

nimbus_core::string_enum! {
    pub enum H265FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

nimbus_core::string_enum! {
    pub enum H265QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        SinglePassHq = "SINGLE_PASS_HQ",
        MultiPassHq = "MULTI_PASS_HQ",
    }
}

nimbus_core::string_enum! {
    pub enum H265WriteMp4PackagingType {
        Hvc1 = "HVC1",
        Hev1 = "HEV1",
    }
}

nimbus_core::string_enum! {
    pub enum FrameCaptureQuality {
        Auto = "AUTO",
    }
}

/// Quality-defined variable bitrate tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct H264QvbrSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_average_bitrate: Option<i32>,
    /// 1 to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level_fine_tune: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct H264Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptive_quantization: Option<H264AdaptiveQuantization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_level: Option<H264CodecLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<H264CodecProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy_encoding: Option<H264EntropyEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_control: Option<H264FramerateControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_conversion_algorithm: Option<H264FramerateConversionAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gop_b_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gop_closed_cadence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gop_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gop_size_units: Option<H264GopSizeUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrd_buffer_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interlace_mode: Option<H264InterlaceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_b_frames_between_reference_frames: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_reference_frames: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub par_control: Option<H264ParControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_tuning_level: Option<H264QualityTuningLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qvbr_settings: Option<H264QvbrSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<H264RateControlMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_change_detect: Option<H264SceneChangeDetect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slices: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct H265QvbrSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_average_bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qvbr_quality_level_fine_tune: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct H265Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_level: Option<H265CodecLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_profile: Option<H265CodecProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_control: Option<H265FramerateControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gop_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gop_size_units: Option<H265GopSizeUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_tuning_level: Option<H265QualityTuningLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qvbr_settings: Option<H265QvbrSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_control_mode: Option<H265RateControlMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_mp4_packaging_type: Option<H265WriteMp4PackagingType>,
}

/// Still images extracted at a fixed rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameCaptureSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_denominator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framerate_numerator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_captures: Option<i32>,
    /// JPEG quality, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<i32>,
}

/// The codec of an output plus the settings block for that codec.
///
/// Only the block matching `codec` is read by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCodecSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<VideoCodec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_capture_settings: Option<FrameCaptureSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h264_settings: Option<H264Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h265_settings: Option<H265Settings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afd_signaling: Option<AfdSignaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anti_alias: Option<AntiAlias>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_settings: Option<VideoCodecSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_metadata: Option<ColorMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_frame_timecode: Option<DropFrameTimecode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_afd: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respond_to_afd: Option<RespondToAfd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_behavior: Option<ScalingBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecode_insertion: Option<VideoTimecodeInsertion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}
