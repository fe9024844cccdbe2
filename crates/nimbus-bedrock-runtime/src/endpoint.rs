//! Bedrock Runtime endpoint table.

use nimbus_core::{EndpointRule, EndpointTable};

/// FIPS pseudo-regions are spelled `bedrock-runtime-fips-<region>` and sign
/// with the base region.
macro_rules! rules {
    (fips: [$($region:literal),+ $(,)?], $($rule:expr),* $(,)?) => {
        &[
            $(EndpointRule {
                regions: &[concat!("bedrock-runtime-fips-", $region)],
                endpoint: concat!("https://bedrock-runtime-fips.", $region, ".amazonaws.com"),
                signing_region: Some($region),
            },)+
            $($rule,)*
        ]
    };
}

const RULES: &[EndpointRule] = rules!(
    fips: ["ca-central-1", "us-east-1", "us-east-2", "us-west-2", "us-gov-east-1", "us-gov-west-1"],
    EndpointRule {
        regions: &["bedrock-runtime-us-gov-east-1"],
        endpoint: "https://bedrock-runtime.us-gov-east-1.amazonaws.com",
        signing_region: Some("us-gov-east-1"),
    },
    EndpointRule {
        regions: &["bedrock-runtime-us-gov-west-1"],
        endpoint: "https://bedrock-runtime.us-gov-west-1.amazonaws.com",
        signing_region: Some("us-gov-west-1"),
    },
    EndpointRule {
        regions: &["cn-north-1", "cn-northwest-1"],
        endpoint: "https://bedrock-runtime.%region%.amazonaws.com.cn",
        signing_region: None,
    },
);

/// Endpoints of Bedrock Runtime. Requests are signed as `bedrock`.
pub static ENDPOINTS: EndpointTable = EndpointTable {
    host_prefix: "bedrock-runtime",
    signing_service: "bedrock",
    rules: RULES,
};
