//! Bedrock Runtime input types.
//!
//! Both operations post to `/model/{modelId}/<action>`. `InvokeModel` sends
//! the caller's bytes untouched and binds its options to headers; `Converse`
//! sends a camelCase JSON body.

use bytes::Bytes;
use nimbus_core::request::encode_component;
use nimbus_core::{Input, InvalidArgument, Request, required};
use serde::Serialize;
use serde_json::Value;

use crate::operations::BedrockRuntimeOperation;
use crate::types::{
    InferenceConfiguration, Message, PerformanceConfigLatency, PerformanceConfiguration,
    RequestMetadata, SystemContentBlock, ToolConfiguration, Trace,
};

/// Content type sent when the caller does not choose one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

fn model_request(operation: BedrockRuntimeOperation, model_id: &str) -> Request {
    Request::new(
        http::Method::POST,
        format!("/model/{}/{}", encode_component(model_id), operation.action()),
    )
}

/// Input for the `InvokeModel` operation.
#[derive(Debug, Clone, Default)]
pub struct InvokeModelRequest {
    /// Model id, inference profile id, or ARN.
    pub model_id: Option<String>,

    /// Request body in the format the model expects.
    pub body: Option<Bytes>,

    /// MIME type of `body`; defaults to `application/json`.
    pub content_type: Option<String>,

    /// Desired MIME type of the response body.
    pub accept: Option<String>,

    pub trace: Option<Trace>,

    pub guardrail_identifier: Option<String>,

    pub guardrail_version: Option<String>,

    pub performance_config_latency: Option<PerformanceConfigLatency>,

    pub region: Option<String>,
}

impl Input for InvokeModelRequest {
    const OPERATION: &'static str = BedrockRuntimeOperation::InvokeModel.as_str();

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn request(&self) -> Result<Request, InvalidArgument> {
        let model_id = required(&self.model_id, "modelId", "InvokeModelRequest")?;
        let body = required(&self.body, "body", "InvokeModelRequest")?;

        let mut request = model_request(BedrockRuntimeOperation::InvokeModel, model_id)
            .with_header(
                "content-type",
                self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE),
            )?;
        if let Some(accept) = &self.accept {
            request = request.with_header("accept", accept)?;
        }
        if let Some(trace) = &self.trace {
            request = request.with_header("x-amzn-bedrock-trace", trace.as_str())?;
        }
        if let Some(id) = &self.guardrail_identifier {
            request = request.with_header("x-amzn-bedrock-guardrailidentifier", id)?;
        }
        if let Some(version) = &self.guardrail_version {
            request = request.with_header("x-amzn-bedrock-guardrailversion", version)?;
        }
        if let Some(latency) = &self.performance_config_latency {
            request =
                request.with_header("x-amzn-bedrock-performanceconfig-latency", latency.as_str())?;
        }
        Ok(request.with_body(body.clone()))
    }
}

/// Input for the `Converse` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseRequest {
    /// Model id, bound to the path.
    #[serde(skip)]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,

    /// System prompts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system: Vec<SystemContentBlock>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_config: Option<InferenceConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfiguration>,

    /// Model-specific parameters outside `inference_config`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_model_request_fields: Option<Value>,

    /// JSON pointers of extra response fields to return.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_model_response_field_paths: Vec<String>,

    #[serde(default, skip_serializing_if = "RequestMetadata::is_empty")]
    pub request_metadata: RequestMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_config: Option<PerformanceConfiguration>,

    #[serde(skip)]
    pub region: Option<String>,
}

impl Input for ConverseRequest {
    const OPERATION: &'static str = BedrockRuntimeOperation::Converse.as_str();

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn request(&self) -> Result<Request, InvalidArgument> {
        let model_id = required(&self.model_id, "modelId", "ConverseRequest")?;
        model_request(BedrockRuntimeOperation::Converse, model_id)
            .with_header("content-type", DEFAULT_CONTENT_TYPE)?
            .with_json(self)
    }
}
