//! The Bedrock Runtime client.

use std::sync::Arc;

use nimbus_core::{ClientConfig, EndpointMetadata, HttpTransport, LazyResult, Runtime, SdkError};

use crate::endpoint::ENDPOINTS;
use crate::error::{self, BedrockRuntimeError};
use crate::input::{ConverseRequest, InvokeModelRequest};
use crate::output::{ConverseResponse, InvokeModelResponse};

/// Result type of Bedrock Runtime operations.
pub type BedrockRuntimeResult<T> = Result<LazyResult<T>, SdkError<BedrockRuntimeError>>;

/// Client for Amazon Bedrock Runtime.
#[derive(Debug, Clone)]
pub struct BedrockRuntimeClient {
    runtime: Runtime,
}

impl BedrockRuntimeClient {
    /// Create a client sending requests through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, config: ClientConfig) -> Self {
        Self {
            runtime: Runtime::new(transport, config, &ENDPOINTS),
        }
    }

    /// Endpoint and signing parameters for `region`.
    #[must_use]
    pub fn endpoint_metadata(&self, region: &str) -> EndpointMetadata {
        self.runtime.endpoint_metadata(region)
    }

    /// Send a conversation to a model.
    pub async fn converse(&self, input: ConverseRequest) -> BedrockRuntimeResult<ConverseResponse> {
        self.runtime.get_result(&input, &error::CONVERSE).await
    }

    /// Invoke a model with a model-specific request body.
    pub async fn invoke_model(
        &self,
        input: InvokeModelRequest,
    ) -> BedrockRuntimeResult<InvokeModelResponse> {
        self.runtime.get_result(&input, &error::INVOKE_MODEL).await
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use nimbus_core::Response;
    use nimbus_core::mock::MockTransport;

    use super::*;
    use crate::types::{Message, StopReason};

    fn client(mock: &Arc<MockTransport>) -> BedrockRuntimeClient {
        BedrockRuntimeClient::new(mock.clone(), ClientConfig::builder().region("us-east-1").build())
    }

    #[tokio::test]
    async fn test_should_converse_through_transport() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            200,
            r#"{"output":{"message":{"role":"assistant","content":[{"text":"4"}]}},"stopReason":"end_turn","usage":{"inputTokens":9,"outputTokens":1,"totalTokens":10},"metrics":{"latencyMs":120}}"#,
        );

        let result = client(&mock)
            .converse(ConverseRequest {
                model_id: Some("amazon.nova-lite-v1:0".to_owned()),
                messages: vec![Message::user("What is 2+2?")],
                ..Default::default()
            })
            .await
            .expect("converse");
        let out = result.initialize().expect("parse");
        assert_eq!(out.message().map(Message::text).as_deref(), Some("4"));
        assert_eq!(out.stop_reason, Some(StopReason::EndTurn));

        let req = mock.last_request().expect("request");
        assert_eq!(req.method, http::Method::POST);
        assert_eq!(
            req.uri,
            "https://bedrock-runtime.us-east-1.amazonaws.com/model/amazon.nova-lite-v1%3A0/converse"
        );
        assert_eq!(req.json()["messages"][0]["role"], "user");

        let ctx = &mock.contexts()[0];
        assert_eq!(ctx.operation, "Converse");
        assert_eq!(ctx.signing_service, "bedrock");
        assert_eq!(ctx.signing_region, "us-east-1");
    }

    #[tokio::test]
    async fn test_should_invoke_model_with_raw_bytes() {
        let mock = Arc::new(MockTransport::new());
        let mut headers = http::HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("text/plain"));
        mock.push(Response::new(http::StatusCode::OK, headers, "four"));

        let result = client(&mock)
            .invoke_model(InvokeModelRequest {
                model_id: Some("m".to_owned()),
                body: Some(Bytes::from_static(b"2+2")),
                content_type: Some("text/plain".to_owned()),
                ..Default::default()
            })
            .await
            .expect("invoke");
        let out = result.into_output().expect("parse");
        assert_eq!(&out.body[..], b"four");
        assert_eq!(out.content_type.as_deref(), Some("text/plain"));

        let req = mock.last_request().expect("request");
        assert_eq!(&req.body[..], b"2+2");
        assert_eq!(req.header("content-type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_should_map_model_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            424,
            r#"{"__type":"ModelErrorException","message":"upstream failed","originalStatusCode":503,"resourceName":"arn:aws:bedrock:us-east-1::foundation-model/m"}"#,
        );

        let err = client(&mock)
            .invoke_model(InvokeModelRequest {
                model_id: Some("m".to_owned()),
                body: Some(Bytes::from_static(b"{}")),
                ..Default::default()
            })
            .await
            .unwrap_err();
        match err {
            SdkError::Service(BedrockRuntimeError::ModelError(err)) => {
                assert_eq!(err.original_status_code, Some(503));
                assert_eq!(err.base.message.as_deref(), Some("upstream failed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_reject_missing_model_without_sending() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .converse(ConverseRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
        assert_eq!(mock.call_count(), 0);
    }
}
