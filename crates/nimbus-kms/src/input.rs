//! KMS input types.
//!
//! Every operation is a `POST /` carrying a `PascalCase` JSON body; the
//! operation is named by the `X-Amz-Target` header. Optional fields are
//! omitted when `None`, empty collections are omitted too.

use std::collections::BTreeMap;

use bytes::Bytes;
use nimbus_core::{Input, InvalidArgument, PaginatedInput, Request, required};
use serde::Serialize;

use crate::operations::KmsOperation;
use crate::types::{
    CustomerMasterKeySpec, DataKeySpec, EncryptionAlgorithmSpec, KeySpec, KeyUsageType,
    MessageType, OriginType, RecipientInfo, SigningAlgorithmSpec, Tag,
};

/// Content type of the `awsJson1_1` protocol.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

fn rpc_request<T: Serialize>(operation: KmsOperation, body: &T) -> Result<Request, InvalidArgument> {
    Request::new(http::Method::POST, "/")
        .with_header("content-type", CONTENT_TYPE)?
        .with_header("x-amz-target", operation.target())?
        .with_json(body)
}

/// Implement [`Input`] for a KMS request: the listed fields are required.
macro_rules! rpc_input {
    ($ty:ident, $op:ident $(, $field:ident => $wire:literal)* $(,)?) => {
        impl Input for $ty {
            const OPERATION: &'static str = KmsOperation::$op.as_str();

            fn region(&self) -> Option<&str> {
                self.region.as_deref()
            }

            fn request(&self) -> Result<Request, InvalidArgument> {
                $(required(&self.$field, $wire, stringify!($ty))?;)*
                rpc_request(KmsOperation::$op, self)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Keys and aliases
// ---------------------------------------------------------------------------

/// Input for the `CreateAlias` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAliasRequest {
    /// The alias name; must start with `alias/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_name: Option<String>,

    /// Key ID or ARN of the key the alias points to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_key_id: Option<String>,

    /// Region overriding the client default for this call.
    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(CreateAliasRequest, CreateAlias, alias_name => "AliasName", target_key_id => "TargetKeyId");

/// Input for the `CreateKey` operation. Every field is optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsageType>,

    /// Deprecated in favour of `key_spec`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_master_key_spec: Option<CustomerMasterKeySpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_policy_lockout_safety_check: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_key_id: Option<String>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(CreateKeyRequest, CreateKey);

/// Input for the `GetPublicKey` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPublicKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(GetPublicKeyRequest, GetPublicKey, key_id => "KeyId");

/// Input for the `ListAliases` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAliasesRequest {
    /// Only list the aliases of this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Page size, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The `NextMarker` of the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(ListAliasesRequest, ListAliases);

impl PaginatedInput for ListAliasesRequest {
    fn with_continuation(&self, token: String) -> Self {
        Self {
            marker: Some(token),
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Cryptographic operations
// ---------------------------------------------------------------------------

/// Input for the `Encrypt` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Data to encrypt, up to 4096 bytes.
    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub plaintext: Option<Bytes>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub encryption_context: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(EncryptRequest, Encrypt, key_id => "KeyId", plaintext => "Plaintext");

/// Input for the `Decrypt` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecryptRequest {
    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub ciphertext_blob: Option<Bytes>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub encryption_context: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Required only for asymmetric keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(DecryptRequest, Decrypt, ciphertext_blob => "CiphertextBlob");

/// Input for the `GenerateDataKey` operation.
///
/// Set either `key_spec` or `number_of_bytes`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub encryption_context: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bytes: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<DataKeySpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(GenerateDataKeyRequest, GenerateDataKey, key_id => "KeyId");

/// Input for the `Sign` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(
    SignRequest,
    Sign,
    key_id => "KeyId",
    message => "Message",
    signing_algorithm => "SigningAlgorithm",
);

/// Input for the `Verify` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,

    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub signature: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    #[serde(skip)]
    pub region: Option<String>,
}

rpc_input!(
    VerifyRequest,
    Verify,
    key_id => "KeyId",
    message => "Message",
    signature => "Signature",
    signing_algorithm => "SigningAlgorithm",
);
