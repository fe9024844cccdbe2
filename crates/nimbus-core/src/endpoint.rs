//! Region to endpoint resolution.
//!
//! Every service ships a static [`EndpointTable`]: a list of exact region
//! rows for the hosts that do not follow the generic
//! `https://<prefix>.<region>.amazonaws.com` pattern (FIPS, China, GovCloud
//! and isolated partitions). Nothing is computed beyond the `%region%`
//! substitution.

use std::fmt;

/// Placeholder substituted with the region in [`EndpointRule::endpoint`].
const REGION_PLACEHOLDER: &str = "%region%";

/// Request signature versions supported by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureVersion {
    /// AWS Signature Version 4.
    V4,
}

impl SignatureVersion {
    /// Returns the identifier of this signature version.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V4 => "v4",
        }
    }
}

impl fmt::Display for SignatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature versions used by every service in this workspace.
pub const SIGV4_ONLY: &[SignatureVersion] = &[SignatureVersion::V4];

/// Resolved endpoint and signing parameters for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMetadata {
    /// Base URL of the service, without a trailing slash.
    pub endpoint: String,
    /// Region fed to the request signer.
    pub signing_region: String,
    /// Service name fed to the request signer.
    pub signing_service: &'static str,
    /// Supported signature versions.
    pub signature_versions: &'static [SignatureVersion],
}

/// One row of an endpoint table.
#[derive(Debug, Clone, Copy)]
pub struct EndpointRule {
    /// Region identifiers this row applies to.
    pub regions: &'static [&'static str],
    /// Endpoint URL, optionally containing `%region%`.
    pub endpoint: &'static str,
    /// Signing region; `None` signs with the region identifier itself.
    pub signing_region: Option<&'static str>,
}

/// Static endpoint table of one service.
#[derive(Debug, Clone, Copy)]
pub struct EndpointTable {
    /// Host prefix of the generic pattern.
    pub host_prefix: &'static str,
    /// Service name used for request signing.
    pub signing_service: &'static str,
    /// Special-cased regions, checked in order.
    pub rules: &'static [EndpointRule],
}

impl EndpointTable {
    /// Resolve the endpoint metadata for `region`.
    ///
    /// The first rule listing the region wins; unlisted regions fall through
    /// to the generic pattern.
    #[must_use]
    pub fn resolve(&self, region: &str) -> EndpointMetadata {
        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.regions.contains(&region))
        {
            return EndpointMetadata {
                endpoint: rule.endpoint.replace(REGION_PLACEHOLDER, region),
                signing_region: rule.signing_region.unwrap_or(region).to_owned(),
                signing_service: self.signing_service,
                signature_versions: SIGV4_ONLY,
            };
        }

        EndpointMetadata {
            endpoint: format!("https://{}.{region}.amazonaws.com", self.host_prefix),
            signing_region: region.to_owned(),
            signing_service: self.signing_service,
            signature_versions: SIGV4_ONLY,
        }
    }
}
