//! KMS endpoint table.

use nimbus_core::{EndpointRule, EndpointTable};

/// Builds the rule list: one row per FIPS region (`<region>-fips` resolves
/// to the `kms-fips` host and signs with the base region), then the
/// partition rows.
macro_rules! rules {
    (fips: [$($region:literal),+ $(,)?], $($rule:expr),* $(,)?) => {
        &[
            $(EndpointRule {
                regions: &[concat!($region, "-fips")],
                endpoint: concat!("https://kms-fips.", $region, ".amazonaws.com"),
                signing_region: Some($region),
            },)+
            $($rule,)*
        ]
    };
}

const RULES: &[EndpointRule] = rules!(
    fips: [
        "af-south-1",
        "ap-east-1",
        "ap-northeast-1",
        "ap-northeast-2",
        "ap-northeast-3",
        "ap-south-1",
        "ap-southeast-1",
        "ap-southeast-2",
        "ap-southeast-3",
        "ca-central-1",
        "eu-central-1",
        "eu-north-1",
        "eu-south-1",
        "eu-west-1",
        "eu-west-2",
        "eu-west-3",
        "me-south-1",
        "sa-east-1",
        "us-east-1",
        "us-east-2",
        "us-west-1",
        "us-west-2",
        "us-gov-east-1",
        "us-gov-west-1",
    ],
    EndpointRule {
        regions: &["cn-north-1", "cn-northwest-1"],
        endpoint: "https://kms.%region%.amazonaws.com.cn",
        signing_region: None,
    },
    EndpointRule {
        regions: &["us-iso-east-1", "us-iso-west-1"],
        endpoint: "https://kms.%region%.c2s.ic.gov",
        signing_region: None,
    },
    EndpointRule {
        regions: &["us-isob-east-1"],
        endpoint: "https://kms.us-isob-east-1.sc2s.sgov.gov",
        signing_region: None,
    },
);

/// Endpoints of the KMS service.
pub static ENDPOINTS: EndpointTable = EndpointTable {
    host_prefix: "kms",
    signing_service: "kms",
    rules: RULES,
};
