//! Shared building blocks for the Nimbus service clients.
//!
//! Every service crate is the same mechanical transform applied to a
//! different API description: an [`Input`] renders itself into a
//! [`Request`], the [`Runtime`] resolves the endpoint and hands the request to
//! an external [`HttpTransport`], and the raw [`Response`] is wrapped in a
//! [`LazyResult`] that parses the body on first access. List operations wrap
//! their first page in a [`PagedResult`] that can follow continuation tokens.
//!
//! Transport, request signing and retry policy are deliberately absent; they
//! belong to whatever implements [`HttpTransport`].

pub mod config;
pub mod de;
pub mod endpoint;
pub mod error;
mod macros;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
pub mod pagination;
pub mod request;
pub mod response;
pub mod result;
pub mod runtime;
mod types;

pub use config::ClientConfig;
pub use endpoint::{EndpointMetadata, EndpointRule, EndpointTable, SignatureVersion};
pub use error::{
    ApiError, ErrorEnvelope, ErrorTable, InvalidArgument, ParseError, SdkError, TransportError,
};
pub use pagination::{ItemStream, Page, PageFetcher, PagedResult};
pub use request::{Input, PaginatedInput, Request, required};
pub use response::Response;
pub use result::{FromResponse, LazyResult, json_body};
pub use runtime::{BoxFuture, HttpTransport, RequestContext, Runtime};
pub use types::AwsRegion;

#[doc(hidden)]
pub mod __private {
    pub use http;
    pub use serde;
}
