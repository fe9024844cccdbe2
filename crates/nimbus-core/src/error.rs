//! Error taxonomy shared by all service clients.
//!
//! - [`InvalidArgument`]: an input failed validation and was never sent.
//! - [`SdkError::Service`]: the response carried an error code the operation
//!   declares; the payload is the service's typed error enum.
//! - [`SdkError::Client`] / [`SdkError::Server`]: any other failed response,
//!   carrying the raw [`ApiError`].
//! - [`SdkError::Transport`] / [`SdkError::Parse`]: the runtime failed, or a
//!   successful response did not match its output shape.

use std::fmt;

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::response::Response;

/// An input failed validation before being rendered into a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    /// Create a new validation error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error raised when a required field is absent.
    #[must_use]
    pub fn missing(field: &str, shape: &str) -> Self {
        Self::new(format!(
            "Missing parameter \"{field}\" for \"{shape}\". The value cannot be null."
        ))
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The external transport failed to produce a response.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Create a new transport error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// A successful response did not match its output shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse response: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Create a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// The error envelope of a failed response.
///
/// JSON services put the code either in the `x-amzn-errortype` header or in
/// the body under `__type`/`code`; both may carry a namespace prefix
/// (`com.amazonaws.kms#NotFoundException`) or a URL suffix after `:`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorEnvelope {
    /// The normalized error code.
    pub code: Option<String>,
    /// The error message.
    pub message: Option<String>,
    /// Every other top-level field of the body.
    pub fields: Map<String, Value>,
}

impl ErrorEnvelope {
    /// Parse the envelope of `response`. A non-JSON body yields an envelope
    /// with only the header code, if any.
    #[must_use]
    pub fn parse(response: &Response) -> Self {
        let mut fields = match serde_json::from_slice::<Value>(&response.body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let header_code = response.header("x-amzn-errortype").map(ToOwned::to_owned);
        let body_code = ["__type", "code", "Code"]
            .iter()
            .find_map(|key| take_string(&mut fields, key));
        let message = ["message", "Message", "errorMessage"]
            .iter()
            .find_map(|key| take_string(&mut fields, key));

        Self {
            code: header_code
                .or(body_code)
                .map(|code| normalize_code(&code).to_owned())
                .filter(|code| !code.is_empty()),
            message,
            fields,
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            fields.insert(key.to_owned(), other);
            None
        }
        None => None,
    }
}

/// Strip a `:`-suffix and a `namespace#` prefix from an error code.
fn normalize_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    code.rsplit_once('#').map_or(code, |(_, name)| name).trim()
}

/// Common base of every error returned by a service.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: http::StatusCode,
    /// The error code, if the service sent one.
    pub code: Option<String>,
    /// The error message, if the service sent one.
    pub message: Option<String>,
    /// Raw response body.
    pub body: Bytes,
    /// Service-specific extra fields of the envelope.
    pub fields: Map<String, Value>,
}

impl ApiError {
    /// Build the error of a failed response.
    #[must_use]
    pub fn from_response(response: &Response) -> Self {
        let envelope = ErrorEnvelope::parse(response);
        Self {
            status: response.status,
            code: envelope.code,
            message: envelope.message,
            body: response.body.clone(),
            fields: envelope.fields,
        }
    }

    /// Returns an extra envelope field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} ({}): {}",
            self.status.as_u16(),
            self.code.as_deref().unwrap_or("<no code>"),
            self.message.as_deref().unwrap_or("<no message>"),
        )
    }
}

impl std::error::Error for ApiError {}

impl AsRef<ApiError> for ApiError {
    fn as_ref(&self) -> &ApiError {
        self
    }
}

/// Constructor of one typed service error.
pub type ErrorConstructor<E> = fn(ApiError) -> E;

/// The error codes an operation declares, each mapped to the constructor of
/// its typed error.
#[derive(Debug)]
pub struct ErrorTable<E: 'static> {
    entries: &'static [(&'static str, ErrorConstructor<E>)],
}

impl<E: 'static> ErrorTable<E> {
    /// Create a table from its entries.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, ErrorConstructor<E>)]) -> Self {
        Self { entries }
    }

    /// Returns the declared error codes.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    /// Returns whether `code` is declared.
    #[must_use]
    pub fn declares(&self, code: &str) -> bool {
        self.entries.iter().any(|(declared, _)| *declared == code)
    }

    /// Map a failed response's error to its typed variant, falling back to
    /// the generic client (4xx) or server (5xx) error.
    #[must_use]
    pub fn map(&self, error: ApiError) -> SdkError<E> {
        let constructor = error.code.as_deref().and_then(|code| {
            self.entries
                .iter()
                .find(|(declared, _)| *declared == code)
                .map(|(_, constructor)| *constructor)
        });

        match constructor {
            Some(constructor) => SdkError::Service(constructor(error)),
            None if error.status.is_server_error() => SdkError::Server(error),
            None => SdkError::Client(error),
        }
    }
}

/// Error returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum SdkError<E> {
    /// The input failed validation.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// An error declared by the operation.
    #[error("{0}")]
    Service(E),

    /// An undeclared error with a 4xx (or otherwise non-5xx) status.
    #[error("client error: {0}")]
    Client(ApiError),

    /// An undeclared error with a 5xx status.
    #[error("server error: {0}")]
    Server(ApiError),

    /// The runtime failed to deliver the request.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response did not match the output shape.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl<E> SdkError<E> {
    /// Returns the typed service error, if any.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the generic error of an undeclared failure, if any.
    #[must_use]
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Client(err) | Self::Server(err) => Some(err),
            _ => None,
        }
    }
}
