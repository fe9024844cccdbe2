//! MediaConvert error types and the per-operation error table.

use nimbus_core::{ApiError, ErrorTable};

nimbus_core::service_error! {
    /// Every documented MediaConvert error.
    pub enum MediaConvertError {
        BadRequest(ApiError) = "BadRequestException",
        Conflict(ApiError) = "ConflictException",
        Forbidden(ApiError) = "ForbiddenException",
        InternalServerError(ApiError) = "InternalServerErrorException",
        NotFound(ApiError) = "NotFoundException",
        ServiceQuotaExceeded(ApiError) = "ServiceQuotaExceededException",
        TooManyRequests(ApiError) = "TooManyRequestsException",
    }
}

/// Every MediaConvert operation declares the full error set.
pub(crate) static ALL_ERRORS: ErrorTable<MediaConvertError> = ErrorTable::new(&[
    ("BadRequestException", MediaConvertError::BadRequest),
    ("InternalServerErrorException", MediaConvertError::InternalServerError),
    ("ForbiddenException", MediaConvertError::Forbidden),
    ("NotFoundException", MediaConvertError::NotFound),
    ("TooManyRequestsException", MediaConvertError::TooManyRequests),
    ("ConflictException", MediaConvertError::Conflict),
    ("ServiceQuotaExceededException", MediaConvertError::ServiceQuotaExceeded),
]);

#[cfg(test)]
mod tests {
    use nimbus_core::{Response, SdkError};

    use super::*;

    // restJson1 errors name their type in a header rather than the body.
    fn failure(status: u16, code: &str) -> ApiError {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            http::HeaderValue::from_str(code).expect("valid header"),
        );
        ApiError::from_response(&Response::new(
            http::StatusCode::from_u16(status).expect("valid status"),
            headers,
            r#"{"message":"boom"}"#,
        ))
    }

    #[test]
    fn test_should_declare_every_code() {
        assert_eq!(ALL_ERRORS.codes().count(), MediaConvertError::CODES.len());
        for code in MediaConvertError::CODES {
            assert!(ALL_ERRORS.declares(code), "{code} not declared");
        }
    }

    #[test]
    fn test_should_map_error_type_header() {
        let mapped = ALL_ERRORS.map(failure(404, "NotFoundException:http://internal.amazon.com/"));
        let err = mapped.as_service_error().expect("typed error");
        assert!(matches!(err, MediaConvertError::NotFound(_)));
        assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(err.message(), Some("boom"));
    }

    #[test]
    fn test_should_fall_back_for_undeclared_code() {
        let mapped = ALL_ERRORS.map(failure(400, "ValidationException"));
        assert!(matches!(mapped, SdkError::Client(_)));

        let mapped = ALL_ERRORS.map(failure(503, "ServiceUnavailable"));
        assert!(matches!(mapped, SdkError::Server(_)));
    }
}
