//! Bedrock Runtime error types and the per-operation error tables.

use nimbus_core::{ApiError, ErrorTable};

/// The model itself failed while processing the request.
///
/// Besides the common base it carries the status the model returned and the
/// resource that raised the error.
#[derive(Debug, Clone)]
pub struct ModelErrorException {
    pub base: ApiError,
    pub original_status_code: Option<i32>,
    pub resource_name: Option<String>,
}

impl ModelErrorException {
    /// Build the error from its envelope, reading the extra fields.
    #[must_use]
    pub fn from_api_error(base: ApiError) -> Self {
        let original_status_code = base
            .field("originalStatusCode")
            .and_then(serde_json::Value::as_i64)
            .and_then(|code| i32::try_from(code).ok());
        let resource_name = base
            .field("resourceName")
            .and_then(serde_json::Value::as_str)
            .map(ToOwned::to_owned);
        Self {
            base,
            original_status_code,
            resource_name,
        }
    }
}

impl AsRef<ApiError> for ModelErrorException {
    fn as_ref(&self) -> &ApiError {
        &self.base
    }
}

nimbus_core::service_error! {
    /// Every documented Bedrock Runtime error.
    pub enum BedrockRuntimeError {
        AccessDenied(ApiError) = "AccessDeniedException",
        InternalServer(ApiError) = "InternalServerException",
        ModelError(ModelErrorException) = "ModelErrorException",
        ModelNotReady(ApiError) = "ModelNotReadyException",
        ModelTimeout(ApiError) = "ModelTimeoutException",
        ResourceNotFound(ApiError) = "ResourceNotFoundException",
        ServiceQuotaExceeded(ApiError) = "ServiceQuotaExceededException",
        ServiceUnavailable(ApiError) = "ServiceUnavailableException",
        Throttling(ApiError) = "ThrottlingException",
        Validation(ApiError) = "ValidationException",
    }
}

fn model_error(base: ApiError) -> BedrockRuntimeError {
    BedrockRuntimeError::ModelError(ModelErrorException::from_api_error(base))
}

pub(crate) static CONVERSE: ErrorTable<BedrockRuntimeError> = ErrorTable::new(&[
    ("AccessDeniedException", BedrockRuntimeError::AccessDenied),
    ("ResourceNotFoundException", BedrockRuntimeError::ResourceNotFound),
    ("ThrottlingException", BedrockRuntimeError::Throttling),
    ("ModelTimeoutException", BedrockRuntimeError::ModelTimeout),
    ("InternalServerException", BedrockRuntimeError::InternalServer),
    ("ServiceUnavailableException", BedrockRuntimeError::ServiceUnavailable),
    ("ValidationException", BedrockRuntimeError::Validation),
    ("ModelNotReadyException", BedrockRuntimeError::ModelNotReady),
    ("ModelErrorException", model_error),
]);

pub(crate) static INVOKE_MODEL: ErrorTable<BedrockRuntimeError> = ErrorTable::new(&[
    ("AccessDeniedException", BedrockRuntimeError::AccessDenied),
    ("ResourceNotFoundException", BedrockRuntimeError::ResourceNotFound),
    ("ThrottlingException", BedrockRuntimeError::Throttling),
    ("ModelTimeoutException", BedrockRuntimeError::ModelTimeout),
    ("InternalServerException", BedrockRuntimeError::InternalServer),
    ("ServiceUnavailableException", BedrockRuntimeError::ServiceUnavailable),
    ("ValidationException", BedrockRuntimeError::Validation),
    ("ModelNotReadyException", BedrockRuntimeError::ModelNotReady),
    ("ServiceQuotaExceededException", BedrockRuntimeError::ServiceQuotaExceeded),
    ("ModelErrorException", model_error),
]);
