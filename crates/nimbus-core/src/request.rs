//! Request rendering.
//!
//! An [`Input`] holds the parameters of one operation and renders them into a
//! protocol-level [`Request`]: method, path with substituted labels, query
//! pairs in a fixed order, headers, and body. The [`Runtime`](crate::Runtime)
//! later prefixes the resolved endpoint.

use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::InvalidArgument;

/// Characters left literal in path labels and query values (RFC 3986
/// unreserved).
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a path label or query component.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// A rendered request, relative to the service endpoint.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: http::Method,
    /// Path with labels already substituted and encoded.
    pub path: String,
    /// Query parameters, in rendering order.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: http::HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl Request {
    /// Create a request with no query, headers or body.
    #[must_use]
    pub fn new(method: http::Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: http::HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Set a header. Names are case-insensitive and stored lowercase.
    ///
    /// # Errors
    /// Returns an error if the name or the value is not valid in a header.
    pub fn with_header(mut self, name: &str, value: impl AsRef<str>) -> Result<Self, InvalidArgument> {
        let header = http::HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| InvalidArgument::new(format!("invalid header name \"{name}\"")))?;
        let value = http::HeaderValue::from_str(value.as_ref()).map_err(|_| {
            InvalidArgument::new(format!("invalid value for header \"{name}\""))
        })?;
        self.headers.insert(header, value);
        Ok(self)
    }

    /// Set the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a JSON body.
    ///
    /// # Errors
    /// Returns an error if `value` cannot be serialized.
    pub fn with_json<T: serde::Serialize>(self, value: &T) -> Result<Self, InvalidArgument> {
        let body = serde_json::to_vec(value)
            .map_err(|e| InvalidArgument::new(format!("failed to serialize body: {e}")))?;
        Ok(self.with_body(body))
    }

    /// Render the path and query string.
    #[must_use]
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Build the final HTTP request against `endpoint`.
    ///
    /// # Errors
    /// Returns an error if the resulting URI is invalid.
    pub fn into_http(self, endpoint: &str) -> Result<http::Request<Bytes>, InvalidArgument> {
        let uri = format!("{}{}", endpoint.trim_end_matches('/'), self.uri());
        let mut builder = http::Request::builder().method(self.method).uri(&uri);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
        }
        builder
            .body(self.body)
            .map_err(|e| InvalidArgument::new(format!("invalid request URI {uri}: {e}")))
    }
}

/// Parameters of one operation, renderable into a [`Request`].
pub trait Input: Clone + Send + Sync + 'static {
    /// Operation name, as sent to the service.
    const OPERATION: &'static str;

    /// Region overriding the client default for this call.
    fn region(&self) -> Option<&str>;

    /// Validate the parameters and render the request.
    fn request(&self) -> Result<Request, InvalidArgument>;
}

/// An input of a list operation that can be re-issued for the next page.
pub trait PaginatedInput: Input {
    /// Clone this input with the continuation token replaced.
    #[must_use]
    fn with_continuation(&self, token: String) -> Self;
}

/// Fetch a required field or fail with the standard missing-parameter error.
pub fn required<'a, T>(
    value: &'a Option<T>,
    field: &str,
    shape: &str,
) -> Result<&'a T, InvalidArgument> {
    value
        .as_ref()
        .ok_or_else(|| InvalidArgument::missing(field, shape))
}
