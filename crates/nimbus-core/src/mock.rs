//! In-memory transport for tests: canned responses out, recorded requests in.

use std::collections::VecDeque;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::error::TransportError;
use crate::response::Response;
use crate::runtime::{BoxFuture, HttpTransport, RequestContext};

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Full URI, endpoint included.
    pub uri: String,
    /// Request headers.
    pub headers: http::HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// Returns a header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decode the body as JSON.
    ///
    /// # Panics
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

/// A transport answering from a queue of canned responses.
///
/// An exhausted queue fails the call with a [`TransportError`].
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Response>>,
    calls: Mutex<Vec<(RecordedRequest, RequestContext)>>,
}

impl MockTransport {
    /// Create a transport with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn push(&self, response: Response) {
        self.responses.lock().push_back(response);
    }

    /// Queue a JSON response with the given status.
    ///
    /// # Panics
    /// Panics if `status` is not a valid HTTP status code.
    pub fn push_json(&self, status: u16, body: impl Into<String>) {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        self.push(Response::new(
            http::StatusCode::from_u16(status).expect("valid status code"),
            headers,
            Bytes::from(body.into()),
        ));
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Every request received, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.calls.lock().iter().map(|(req, _)| req.clone()).collect()
    }

    /// The context of every request received, in order.
    #[must_use]
    pub fn contexts(&self) -> Vec<RequestContext> {
        self.calls.lock().iter().map(|(_, ctx)| ctx.clone()).collect()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.calls.lock().last().map(|(req, _)| req.clone())
    }
}

impl HttpTransport for MockTransport {
    fn send(
        &self,
        request: http::Request<Bytes>,
        context: RequestContext,
    ) -> BoxFuture<'static, Result<Response, TransportError>> {
        let (parts, body) = request.into_parts();
        let recorded = RecordedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        };
        let operation = context.operation;
        self.calls.lock().push((recorded, context));
        let next = self.responses.lock().pop_front();

        Box::pin(async move {
            next.ok_or_else(|| {
                TransportError::new(format!("no response queued for {operation}"))
            })
        })
    }
}
