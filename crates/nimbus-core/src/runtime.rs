//! The boundary between the typed clients and the external HTTP runtime.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::endpoint::{EndpointMetadata, EndpointTable, SignatureVersion};
use crate::error::{ApiError, ErrorTable, SdkError, TransportError};
use crate::request::Input;
use crate::response::Response;
use crate::result::{FromResponse, LazyResult};

/// A boxed, sendable future.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What the transport needs to know about a request besides the request
/// itself: which operation it is and how to sign it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Operation name.
    pub operation: &'static str,
    /// Region the call targets.
    pub region: String,
    /// Region fed to the signer.
    pub signing_region: String,
    /// Service name fed to the signer.
    pub signing_service: &'static str,
    /// Signature versions accepted by the endpoint.
    pub signature_versions: &'static [SignatureVersion],
}

/// Trait that the HTTP runtime must implement.
///
/// The implementor owns signing, retries and connection management; it
/// receives a fully rendered request and returns the buffered response,
/// whatever its status.
pub trait HttpTransport: Send + Sync + 'static {
    /// Send a request and buffer the response.
    fn send(
        &self,
        request: http::Request<Bytes>,
        context: RequestContext,
    ) -> BoxFuture<'static, Result<Response, TransportError>>;
}

/// Shared state behind every service client.
#[derive(Clone)]
pub struct Runtime {
    transport: Arc<dyn HttpTransport>,
    config: Arc<ClientConfig>,
    endpoints: &'static EndpointTable,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &self.config)
            .field("signing_service", &self.endpoints.signing_service)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    /// Create a runtime for the service described by `endpoints`.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: ClientConfig,
        endpoints: &'static EndpointTable,
    ) -> Self {
        Self {
            transport,
            config: Arc::new(config),
            endpoints,
        }
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The region a call targets: the per-call override if set, otherwise
    /// the configured default.
    #[must_use]
    pub fn resolve_region<'a>(&'a self, region: Option<&'a str>) -> &'a str {
        region
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.config.region.as_str())
    }

    /// Endpoint and signing parameters for `region`, honouring the configured
    /// endpoint override.
    #[must_use]
    pub fn endpoint_metadata(&self, region: &str) -> EndpointMetadata {
        let mut metadata = self.endpoints.resolve(region);
        if let Some(endpoint) = &self.config.endpoint {
            metadata.endpoint = endpoint.trim_end_matches('/').to_owned();
        }
        metadata
    }

    /// Validate and send `input`, returning the raw response of a successful
    /// call. Failed responses are mapped through `errors`.
    pub async fn get_response<I, E>(
        &self,
        input: &I,
        errors: &'static ErrorTable<E>,
    ) -> Result<Response, SdkError<E>>
    where
        I: Input,
        E: 'static,
    {
        let request = input.request()?;
        let region = self.resolve_region(input.region()).to_owned();
        let metadata = self.endpoint_metadata(&region);
        let http_request = request.into_http(&metadata.endpoint)?;

        tracing::debug!(
            operation = I::OPERATION,
            %region,
            endpoint = %metadata.endpoint,
            method = %http_request.method(),
            "sending request",
        );

        let context = RequestContext {
            operation: I::OPERATION,
            region,
            signing_region: metadata.signing_region,
            signing_service: metadata.signing_service,
            signature_versions: metadata.signature_versions,
        };
        let response = self
            .transport
            .send(http_request, context)
            .await
            .inspect_err(|err| {
                tracing::warn!(operation = I::OPERATION, error = %err, "transport failed");
            })?;

        if response.is_success() {
            tracing::debug!(
                operation = I::OPERATION,
                status = response.status.as_u16(),
                "request succeeded",
            );
            return Ok(response);
        }

        let error = ApiError::from_response(&response);
        tracing::debug!(
            operation = I::OPERATION,
            status = error.status.as_u16(),
            code = error.code.as_deref().unwrap_or("<none>"),
            "service returned an error",
        );
        Err(errors.map(error))
    }

    /// Like [`Runtime::get_response`], wrapping the response for a lazy
    /// parse into `T`.
    pub async fn get_result<I, T, E>(
        &self,
        input: &I,
        errors: &'static ErrorTable<E>,
    ) -> Result<LazyResult<T>, SdkError<E>>
    where
        I: Input,
        T: FromResponse,
        E: 'static,
    {
        let response = self.get_response(input, errors).await?;
        Ok(LazyResult::new(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::EndpointRule;
    use crate::error::InvalidArgument;
    use crate::mock::MockTransport;
    use crate::request::Request;

    static ENDPOINTS: EndpointTable = EndpointTable {
        host_prefix: "demo",
        signing_service: "demo",
        rules: &[EndpointRule {
            regions: &["demo-fips"],
            endpoint: "https://demo-fips.us-east-1.amazonaws.com",
            signing_region: Some("us-east-1"),
        }],
    };

    #[derive(Debug)]
    struct Boom;

    fn boom(_: ApiError) -> Boom {
        Boom
    }

    static ERRORS: ErrorTable<Boom> = ErrorTable::new(&[("BoomException", boom)]);

    #[derive(Debug, Clone, Default)]
    struct Ping {
        name: Option<String>,
        region: Option<String>,
    }

    impl Input for Ping {
        const OPERATION: &'static str = "Ping";

        fn region(&self) -> Option<&str> {
            self.region.as_deref()
        }

        fn request(&self) -> Result<Request, InvalidArgument> {
            let name = crate::required(&self.name, "name", "PingRequest")?;
            Ok(Request::new(http::Method::GET, format!("/ping/{name}")))
        }
    }

    fn ping(name: &str) -> Ping {
        Ping {
            name: Some(name.to_owned()),
            region: None,
        }
    }

    fn runtime(mock: &Arc<MockTransport>, config: ClientConfig) -> Runtime {
        Runtime::new(mock.clone(), config, &ENDPOINTS)
    }

    #[tokio::test]
    async fn test_should_send_to_resolved_endpoint() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, "{}");
        let rt = runtime(&mock, ClientConfig::builder().region("eu-west-1").build());

        let resp = rt.get_response(&ping("a"), &ERRORS).await.expect("success");
        assert!(resp.is_success());

        let requests = mock.requests();
        assert_eq!(requests[0].uri, "https://demo.eu-west-1.amazonaws.com/ping/a");
        let contexts = mock.contexts();
        assert_eq!(contexts[0].operation, "Ping");
        assert_eq!(contexts[0].signing_region, "eu-west-1");
    }

    #[tokio::test]
    async fn test_should_prefer_per_call_region() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, "{}");
        let rt = runtime(&mock, ClientConfig::default());

        let mut input = ping("a");
        input.region = Some("demo-fips".to_owned());
        rt.get_response(&input, &ERRORS).await.expect("success");

        let ctx = &mock.contexts()[0];
        assert_eq!(ctx.region, "demo-fips");
        assert_eq!(ctx.signing_region, "us-east-1");
        assert_eq!(
            mock.requests()[0].uri,
            "https://demo-fips.us-east-1.amazonaws.com/ping/a"
        );
    }

    #[tokio::test]
    async fn test_should_apply_endpoint_override() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, "{}");
        let config = ClientConfig::builder()
            .region("ap-south-1")
            .endpoint("http://localhost:4566/")
            .build();
        let rt = runtime(&mock, config);

        rt.get_response(&ping("a"), &ERRORS).await.expect("success");
        assert_eq!(mock.requests()[0].uri, "http://localhost:4566/ping/a");
        assert_eq!(mock.contexts()[0].signing_region, "ap-south-1");
    }

    #[tokio::test]
    async fn test_should_fail_validation_without_calling_transport() {
        let mock = Arc::new(MockTransport::new());
        let rt = runtime(&mock, ClientConfig::default());

        let err = rt
            .get_response(&Ping::default(), &ERRORS)
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_should_map_error_response() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(400, r#"{"__type":"BoomException"}"#);
        mock.push_json(500, r#"{"__type":"Other"}"#);
        let rt = runtime(&mock, ClientConfig::default());

        let first = rt.get_response(&ping("a"), &ERRORS).await.unwrap_err();
        assert!(matches!(first, SdkError::Service(Boom)));
        let second = rt.get_response(&ping("a"), &ERRORS).await.unwrap_err();
        assert!(matches!(second, SdkError::Server(_)));
    }

    #[tokio::test]
    async fn test_should_surface_transport_error() {
        let mock = Arc::new(MockTransport::new());
        let rt = runtime(&mock, ClientConfig::default());

        let err = rt.get_response(&ping("a"), &ERRORS).await.unwrap_err();
        assert!(matches!(err, SdkError::Transport(_)));
    }
}
