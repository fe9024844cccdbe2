//! Integration tests for the Nimbus service clients.
//!
//! Every client is driven end to end through a [`MockTransport`], so the
//! suite runs offline:
//!
//! ```text
//! cargo test -p nimbus-integration
//! ```
//!
//! Set `RUST_LOG=nimbus_core=debug` to see the runtime's request log.

use std::sync::{Arc, Once};

use nimbus_bedrock_runtime::BedrockRuntimeClient;
use nimbus_core::ClientConfig;
use nimbus_core::mock::MockTransport;
use nimbus_kms::KmsClient;
use nimbus_mediaconvert::MediaConvertClient;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Region every test client defaults to.
pub const TEST_REGION: &str = "us-west-2";

fn config() -> ClientConfig {
    ClientConfig::builder().region(TEST_REGION).build()
}

/// A fresh mock transport with tracing initialized.
#[must_use]
pub fn mock_transport() -> Arc<MockTransport> {
    init_tracing();
    Arc::new(MockTransport::new())
}

/// A KMS client answering from `mock`.
#[must_use]
pub fn kms_client(mock: &Arc<MockTransport>) -> KmsClient {
    KmsClient::new(mock.clone(), config())
}

/// A MediaConvert client answering from `mock`.
#[must_use]
pub fn mediaconvert_client(mock: &Arc<MockTransport>) -> MediaConvertClient {
    MediaConvertClient::new(mock.clone(), config())
}

/// A Bedrock Runtime client answering from `mock`.
#[must_use]
pub fn bedrock_client(mock: &Arc<MockTransport>) -> BedrockRuntimeClient {
    BedrockRuntimeClient::new(mock.clone(), config())
}

/// Queue one JSON page per body, in order.
pub fn push_pages<'a>(mock: &MockTransport, pages: impl IntoIterator<Item = &'a str>) {
    for (index, body) in pages.into_iter().enumerate() {
        tracing::debug!(page = index, "queueing page");
        mock.push_json(200, body);
    }
}

mod test_bedrock;
mod test_error;
mod test_kms;
mod test_mediaconvert;
mod test_pagination;
