//! MediaConvert endpoint table.

use nimbus_core::{EndpointRule, EndpointTable};

/// Builds the rule list: one row per FIPS region (`fips-<region>` resolves
/// to the `mediaconvert-fips` host and signs with the base region), then the
/// partition rows.
macro_rules! rules {
    (fips: [$($region:literal),+ $(,)?], $($rule:expr),* $(,)?) => {
        &[
            $(EndpointRule {
                regions: &[concat!("fips-", $region)],
                endpoint: concat!("https://mediaconvert-fips.", $region, ".amazonaws.com"),
                signing_region: Some($region),
            },)+
            $($rule,)*
        ]
    };
}

const RULES: &[EndpointRule] = rules!(
    fips: ["ca-central-1", "us-east-1", "us-east-2", "us-west-1", "us-west-2"],
    EndpointRule {
        regions: &["cn-northwest-1"],
        endpoint: "https://subscribe.mediaconvert.cn-northwest-1.amazonaws.com.cn",
        signing_region: Some("cn-northwest-1"),
    },
    // GovCloud serves FIPS on its regular host.
    EndpointRule {
        regions: &["us-gov-west-1", "fips-us-gov-west-1"],
        endpoint: "https://mediaconvert.us-gov-west-1.amazonaws.com",
        signing_region: Some("us-gov-west-1"),
    },
);

/// Endpoints of the MediaConvert service.
pub static ENDPOINTS: EndpointTable = EndpointTable {
    host_prefix: "mediaconvert",
    signing_service: "mediaconvert",
    rules: RULES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_resolve_generic_region() {
        let meta = ENDPOINTS.resolve("eu-west-1");
        assert_eq!(meta.endpoint, "https://mediaconvert.eu-west-1.amazonaws.com");
        assert_eq!(meta.signing_region, "eu-west-1");
        assert_eq!(meta.signing_service, "mediaconvert");
    }

    #[test]
    fn test_should_resolve_fips_region() {
        let meta = ENDPOINTS.resolve("fips-us-east-2");
        assert_eq!(meta.endpoint, "https://mediaconvert-fips.us-east-2.amazonaws.com");
        assert_eq!(meta.signing_region, "us-east-2");
    }

    #[test]
    fn test_should_resolve_china_subscription_host() {
        let meta = ENDPOINTS.resolve("cn-northwest-1");
        assert_eq!(
            meta.endpoint,
            "https://subscribe.mediaconvert.cn-northwest-1.amazonaws.com.cn"
        );
        assert_eq!(meta.signing_region, "cn-northwest-1");
    }

    #[test]
    fn test_should_share_govcloud_host() {
        for region in ["us-gov-west-1", "fips-us-gov-west-1"] {
            let meta = ENDPOINTS.resolve(region);
            assert_eq!(meta.endpoint, "https://mediaconvert.us-gov-west-1.amazonaws.com");
            assert_eq!(meta.signing_region, "us-gov-west-1");
        }
    }
}
