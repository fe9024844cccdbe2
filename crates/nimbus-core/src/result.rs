//! Lazily parsed operation results.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::error::ParseError;
use crate::response::Response;

/// An output shape that can be populated from a raw response.
pub trait FromResponse: Sized {
    /// Transform the raw response into the output shape.
    fn from_response(response: &Response) -> Result<Self, ParseError>;
}

/// Decode a JSON body into `T`; an empty body yields `T::default()`.
pub fn json_body<T: DeserializeOwned + Default>(response: &Response) -> Result<T, ParseError> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(&response.body)?)
}

/// Wraps a successful response and parses it into `T` on first access.
///
/// The parse runs at most once; later accesses read the memoized output (or
/// the memoized parse error).
#[derive(Debug)]
pub struct LazyResult<T> {
    response: Response,
    output: OnceLock<Result<T, ParseError>>,
}

impl<T: FromResponse> LazyResult<T> {
    /// Wrap a raw response.
    #[must_use]
    pub fn new(response: Response) -> Self {
        Self {
            response,
            output: OnceLock::new(),
        }
    }

    /// Parse the response if that has not happened yet, and return the output.
    pub fn initialize(&self) -> Result<&T, ParseError> {
        self.output
            .get_or_init(|| T::from_response(&self.response))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Alias of [`LazyResult::initialize`].
    pub fn output(&self) -> Result<&T, ParseError> {
        self.initialize()
    }

    /// Returns whether the response has been parsed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.output.get().is_some()
    }

    /// Consume the result and return the owned output.
    pub fn into_output(self) -> Result<T, ParseError> {
        match self.output.into_inner() {
            Some(parsed) => parsed,
            None => T::from_response(&self.response),
        }
    }

    /// The raw response.
    #[must_use]
    pub fn response(&self) -> &Response {
        &self.response
    }
}
