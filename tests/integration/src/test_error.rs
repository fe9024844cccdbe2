//! Error mapping integration tests.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use nimbus_bedrock_runtime::{BedrockRuntimeError, ConverseRequest, Message};
    use nimbus_core::SdkError;
    use nimbus_kms::{EncryptRequest, KmsError};
    use nimbus_mediaconvert::{GetJobRequest, MediaConvertError};

    use crate::{bedrock_client, kms_client, mediaconvert_client, mock_transport};

    fn encrypt_request() -> EncryptRequest {
        EncryptRequest {
            key_id: Some("alias/app".to_owned()),
            plaintext: Some(Bytes::from_static(b"x")),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_should_map_declared_kms_error() {
        let mock = mock_transport();
        mock.push_json(
            400,
            r#"{"__type":"com.amazonaws.kms#DisabledException","message":"key is disabled"}"#,
        );

        let err = kms_client(&mock)
            .encrypt(encrypt_request())
            .await
            .unwrap_err();
        let service = err.as_service_error().expect("typed error");
        assert!(matches!(service, KmsError::Disabled(_)));
        assert_eq!(service.message(), Some("key is disabled"));
        assert_eq!(err.to_string(), "DisabledException: key is disabled");
    }

    #[tokio::test]
    async fn test_should_keep_undeclared_codes_generic() {
        let mock = mock_transport();
        mock.push_json(
            400,
            r#"{"__type":"AlreadyExistsException","message":"not an encrypt error"}"#,
        );
        mock.push_json(503, r#"{"__type":"SlowDown"}"#);
        let kms = kms_client(&mock);

        let client_err = kms.encrypt(encrypt_request()).await.unwrap_err();
        let api = client_err.as_api_error().expect("generic error");
        assert!(matches!(client_err, SdkError::Client(_)));
        assert_eq!(api.code.as_deref(), Some("AlreadyExistsException"));

        let server_err = kms.encrypt(encrypt_request()).await.unwrap_err();
        assert!(matches!(server_err, SdkError::Server(_)));
        assert_eq!(
            server_err.as_api_error().map(|e| e.status.as_u16()),
            Some(503)
        );
    }

    #[tokio::test]
    async fn test_should_read_rest_error_type_header() {
        let mock = mock_transport();
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            http::HeaderValue::from_static("NotFoundException:http://internal.amazon.com/"),
        );
        mock.push(nimbus_core::Response::new(
            http::StatusCode::NOT_FOUND,
            headers,
            r#"{"message":"job not found"}"#,
        ));

        let err = mediaconvert_client(&mock)
            .get_job(GetJobRequest {
                id: Some("missing".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        match err {
            SdkError::Service(MediaConvertError::NotFound(api)) => {
                assert_eq!(api.message.as_deref(), Some("job not found"));
                assert_eq!(api.status, http::StatusCode::NOT_FOUND);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_surface_model_error_details() {
        let mock = mock_transport();
        mock.push_json(
            424,
            r#"{"__type":"ModelErrorException","message":"model failed","originalStatusCode":400,"resourceName":"m"}"#,
        );

        let err = bedrock_client(&mock)
            .converse(ConverseRequest {
                model_id: Some("m".to_owned()),
                messages: vec![Message::user("hi")],
                ..Default::default()
            })
            .await
            .unwrap_err();
        let Some(BedrockRuntimeError::ModelError(model)) = err.as_service_error() else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(model.original_status_code, Some(400));
        assert_eq!(model.resource_name.as_deref(), Some("m"));
        assert_eq!(err.as_service_error().map(BedrockRuntimeError::code), Some("ModelErrorException"));
    }

    #[tokio::test]
    async fn test_should_validate_before_sending() {
        let mock = mock_transport();

        let err = mediaconvert_client(&mock)
            .get_job(GetJobRequest::default())
            .await
            .unwrap_err();
        let SdkError::InvalidArgument(invalid) = err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(
            invalid.message(),
            r#"Missing parameter "Id" for "GetJobRequest". The value cannot be null."#
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_should_fail_when_transport_has_no_response() {
        let mock = mock_transport();

        let err = kms_client(&mock)
            .encrypt(encrypt_request())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Transport(_)));
        assert_eq!(mock.call_count(), 1);
    }
}
