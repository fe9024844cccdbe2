//! Bedrock Runtime integration tests.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use nimbus_bedrock_runtime::types::{
        ContentBlock, PerformanceConfigLatency, SystemContentBlock, Tool, ToolChoice,
        ToolConfiguration, ToolInputSchema, ToolSpecification, ToolUseBlock, Trace,
    };
    use nimbus_bedrock_runtime::{
        ConversationRole, ConverseRequest, InferenceConfiguration, InvokeModelRequest, Message,
        StopReason,
    };
    use serde_json::json;

    use crate::{bedrock_client, mock_transport};

    const MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";

    #[tokio::test]
    async fn test_should_invoke_model_with_json_payload() -> anyhow::Result<()> {
        let mock = mock_transport();
        let mut headers = http::HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("application/json"));
        headers.insert(
            "x-amzn-bedrock-performanceconfig-latency",
            http::HeaderValue::from_static("optimized"),
        );
        mock.push(nimbus_core::Response::new(
            http::StatusCode::OK,
            headers,
            r#"{"content":[{"type":"text","text":"Paris"}],"stop_reason":"end_turn"}"#,
        ));

        let payload = json!({
            "anthropic_version": "bedrock-2023-05-31",
            "max_tokens": 32,
            "messages": [{"role": "user", "content": "Capital of France?"}]
        });
        let out = bedrock_client(&mock)
            .invoke_model(InvokeModelRequest {
                model_id: Some(MODEL.to_owned()),
                body: Some(Bytes::from(serde_json::to_vec(&payload)?)),
                accept: Some("application/json".to_owned()),
                trace: Some(Trace::Disabled),
                performance_config_latency: Some(PerformanceConfigLatency::Optimized),
                ..Default::default()
            })
            .await?
            .into_output()?;

        let reply: serde_json::Value = out.json()?;
        assert_eq!(reply["content"][0]["text"], "Paris");
        assert_eq!(
            out.performance_config_latency,
            Some(PerformanceConfigLatency::Optimized)
        );

        let request = mock.last_request().expect("request");
        assert_eq!(
            request.uri,
            "https://bedrock-runtime.us-west-2.amazonaws.com/model/anthropic.claude-3-haiku-20240307-v1%3A0/invoke"
        );
        assert_eq!(request.json(), payload);
        assert_eq!(request.header("x-amzn-bedrock-trace"), Some("DISABLED"));
        assert_eq!(mock.contexts()[0].signing_service, "bedrock");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_run_tool_use_conversation() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(
            200,
            r#"{
                "output": {"message": {"role": "assistant", "content": [
                    {"text": "Let me check."},
                    {"toolUse": {"toolUseId": "tu-1", "name": "weather", "input": {"city": "Oslo"}}}
                ]}},
                "stopReason": "tool_use",
                "usage": {"inputTokens": 50, "outputTokens": 20, "totalTokens": 70},
                "metrics": {"latencyMs": 410}
            }"#,
        );

        let tool_config = ToolConfiguration {
            tools: vec![Tool::ToolSpec(ToolSpecification {
                name: "weather".to_owned(),
                description: Some("Current weather for a city".to_owned()),
                input_schema: ToolInputSchema::Json(json!({
                    "type": "object",
                    "properties": {"city": {"type": "string"}},
                    "required": ["city"]
                })),
            })],
            tool_choice: Some(ToolChoice::Auto {}),
        };
        let out = bedrock_client(&mock)
            .converse(ConverseRequest {
                model_id: Some(MODEL.to_owned()),
                messages: vec![Message::user("Weather in Oslo?")],
                system: vec![SystemContentBlock::Text("Use tools when needed.".to_owned())],
                inference_config: Some(InferenceConfiguration {
                    max_tokens: Some(256),
                    ..Default::default()
                }),
                tool_config: Some(tool_config),
                ..Default::default()
            })
            .await?
            .into_output()?;

        assert_eq!(out.stop_reason, Some(StopReason::ToolUse));
        let message = out.message().expect("message");
        assert_eq!(message.role, Some(ConversationRole::Assistant));
        assert_eq!(message.text(), "Let me check.");
        let tool_use = message
            .content
            .iter()
            .find_map(|block| match block {
                ContentBlock::ToolUse(tool_use) => Some(tool_use),
                _ => None,
            })
            .expect("tool use block");
        assert_eq!(
            tool_use,
            &ToolUseBlock {
                tool_use_id: Some("tu-1".to_owned()),
                name: Some("weather".to_owned()),
                input: json!({"city": "Oslo"}),
            }
        );

        let body = mock.last_request().expect("request").json();
        assert_eq!(body["toolConfig"]["tools"][0]["toolSpec"]["name"], "weather");
        assert_eq!(body["toolConfig"]["toolChoice"], json!({"auto": {}}));
        assert_eq!(body["inferenceConfig"], json!({"maxTokens": 256}));
        Ok(())
    }
}
