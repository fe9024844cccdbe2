//! Bedrock Runtime output types.

use bytes::Bytes;
use nimbus_core::{FromResponse, ParseError, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{
    ConverseMetrics, ConverseOutput, Message, PerformanceConfigLatency, PerformanceConfiguration,
    StopReason, TokenUsage,
};

/// Output of `InvokeModel`: the model's raw response bytes plus the
/// header-bound fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeModelResponse {
    pub body: Bytes,
    pub content_type: Option<String>,
    pub performance_config_latency: Option<PerformanceConfigLatency>,
}

impl InvokeModelResponse {
    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl FromResponse for InvokeModelResponse {
    fn from_response(response: &Response) -> Result<Self, ParseError> {
        Ok(Self {
            body: response.body.clone(),
            content_type: response.header("content-type").map(ToOwned::to_owned),
            performance_config_latency: response
                .header("x-amzn-bedrock-performanceconfig-latency")
                .map(PerformanceConfigLatency::from),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<ConverseOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ConverseMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_model_response_fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_config: Option<PerformanceConfiguration>,
}

impl ConverseResponse {
    /// The reply message, if the model produced one.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.output.as_ref()?.message.as_ref()
    }
}

nimbus_core::impl_json_output!(ConverseResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConversationRole;

    #[test]
    fn test_should_read_invoke_model_body_and_headers() {
        let mut headers = http::HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("application/json"));
        headers.insert(
            "x-amzn-bedrock-performanceconfig-latency",
            http::HeaderValue::from_static("standard"),
        );
        let response = Response::new(
            http::StatusCode::OK,
            headers,
            r#"{"completion":"4","stop_reason":"stop"}"#,
        );

        let out = InvokeModelResponse::from_response(&response).expect("parse");
        assert_eq!(out.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            out.performance_config_latency,
            Some(PerformanceConfigLatency::Standard)
        );
        let body: Value = out.json().expect("json body");
        assert_eq!(body["completion"], "4");
    }

    #[test]
    fn test_should_keep_non_json_body() {
        let response = Response::new(http::StatusCode::OK, http::HeaderMap::new(), &b"\xff\xfe"[..]);
        let out = InvokeModelResponse::from_response(&response).expect("parse");
        assert_eq!(&out.body[..], b"\xff\xfe");
        assert!(out.content_type.is_none());
        assert!(out.json::<Value>().is_err());
    }

    #[test]
    fn test_should_parse_converse_response() {
        let response = Response::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            r#"{
                "output": {"message": {"role": "assistant", "content": [{"text": "4"}]}},
                "stopReason": "end_turn",
                "usage": {"inputTokens": 12, "outputTokens": 1, "totalTokens": 13},
                "metrics": {"latencyMs": 230}
            }"#,
        );
        let out = ConverseResponse::from_response(&response).expect("parse");
        let message = out.message().expect("message");
        assert_eq!(message.role, Some(ConversationRole::Assistant));
        assert_eq!(message.text(), "4");
        assert_eq!(out.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(out.usage.as_ref().and_then(|u| u.total_tokens), Some(13));
        assert_eq!(out.metrics.as_ref().and_then(|m| m.latency_ms), Some(230));
        assert!(out.additional_model_response_fields.is_none());
    }
}
