//! Client configuration.
//!
//! Provides [`ClientConfig`], shared by every service client. Values are
//! loaded from the standard AWS environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::AwsRegion;

/// Configuration shared by all service clients.
///
/// # Examples
///
/// ```
/// use nimbus_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .region("eu-west-1")
///     .endpoint("http://localhost:4566")
///     .build();
/// assert_eq!(config.region.as_str(), "eu-west-1");
/// assert_eq!(config.endpoint.as_deref(), Some("http://localhost:4566"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region used when an input does not override it.
    #[builder(default, setter(into))]
    #[serde(default)]
    pub region: AwsRegion,

    /// Endpoint URL replacing the resolved host (e.g. a local emulator).
    ///
    /// Signing region and service still come from the endpoint table.
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | `region` |
    /// | `AWS_ENDPOINT_URL` | `endpoint` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AWS_REGION").or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        {
            if !v.is_empty() {
                config.region = AwsRegion::new(v);
            }
        }
        if let Ok(v) = std::env::var("AWS_ENDPOINT_URL") {
            if !v.is_empty() {
                config.endpoint = Some(v);
            }
        }

        config
    }
}
