//! KMS output types.
//!
//! Every output is decoded from a `PascalCase` JSON body; absent fields decode
//! as `None` or an empty collection.

use bytes::Bytes;
use nimbus_core::Page;
use serde::{Deserialize, Serialize};

use crate::types::{
    AliasListEntry, CustomerMasterKeySpec, EncryptionAlgorithmSpec, KeyAgreementAlgorithmSpec,
    KeyMetadata, KeySpec, KeyUsageType, SigningAlgorithmSpec,
};

/// Output for the `CreateAlias` operation, which returns an empty body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAliasResponse {}

/// Output for the `CreateKey` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateKeyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_metadata: Option<KeyMetadata>,
}

/// Output for the `Decrypt` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecryptResponse {
    /// ARN of the key that decrypted the ciphertext.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Absent when the response is encrypted for a recipient.
    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub plaintext: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub ciphertext_for_recipient: Option<Bytes>,
}

/// Output for the `Encrypt` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptResponse {
    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub ciphertext_blob: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,
}

/// Output for the `GenerateDataKey` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyResponse {
    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub ciphertext_blob: Option<Bytes>,

    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub plaintext: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub ciphertext_for_recipient: Option<Bytes>,
}

/// Output for the `GetPublicKey` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPublicKeyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// DER-encoded `SubjectPublicKeyInfo`.
    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_key: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_master_key_spec: Option<CustomerMasterKeySpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsageType>,

    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub encryption_algorithms: Vec<EncryptionAlgorithmSpec>,

    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub signing_algorithms: Vec<SigningAlgorithmSpec>,

    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub key_agreement_algorithms: Vec<KeyAgreementAlgorithmSpec>,
}

/// Output for the `ListAliases` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAliasesResponse {
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aliases: Vec<AliasListEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more aliases follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

impl Page for ListAliasesResponse {
    type Item = AliasListEntry;

    // The marker only counts while the listing is truncated.
    fn next_token(&self) -> Option<&str> {
        if self.truncated == Some(true) {
            self.next_marker.as_deref()
        } else {
            None
        }
    }

    fn items(&self) -> &[AliasListEntry] {
        &self.aliases
    }

    fn into_items(self) -> Vec<AliasListEntry> {
        self.aliases
    }
}

/// Output for the `Sign` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub signature: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,
}

/// Output for the `Verify` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_valid: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,
}

nimbus_core::impl_json_output!(
    CreateAliasResponse,
    CreateKeyResponse,
    DecryptResponse,
    EncryptResponse,
    GenerateDataKeyResponse,
    GetPublicKeyResponse,
    ListAliasesResponse,
    SignResponse,
    VerifyResponse,
);
