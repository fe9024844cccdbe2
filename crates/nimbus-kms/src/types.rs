//! KMS shared types: restricted-value enums and the nested records used by
//! several operations.
//!
//! Records use `PascalCase` JSON field naming to match the `awsJson1_1` wire
//! protocol.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

nimbus_core::string_enum! {
    /// Cryptographic operations a key may be used for.
    pub enum KeyUsageType {
        SignVerify = "SIGN_VERIFY",
        EncryptDecrypt = "ENCRYPT_DECRYPT",
        GenerateVerifyMac = "GENERATE_VERIFY_MAC",
        KeyAgreement = "KEY_AGREEMENT",
    }
}

nimbus_core::string_enum! {
    /// Type of key material.
    pub enum KeySpec {
        Rsa2048 = "RSA_2048",
        Rsa3072 = "RSA_3072",
        Rsa4096 = "RSA_4096",
        EccNistP256 = "ECC_NIST_P256",
        EccNistP384 = "ECC_NIST_P384",
        EccNistP521 = "ECC_NIST_P521",
        EccSecgP256k1 = "ECC_SECG_P256K1",
        SymmetricDefault = "SYMMETRIC_DEFAULT",
        Hmac224 = "HMAC_224",
        Hmac256 = "HMAC_256",
        Hmac384 = "HMAC_384",
        Hmac512 = "HMAC_512",
        Sm2 = "SM2",
    }
}

nimbus_core::string_enum! {
    /// Deprecated spelling of [`KeySpec`], still returned for compatibility.
    pub enum CustomerMasterKeySpec {
        Rsa2048 = "RSA_2048",
        Rsa3072 = "RSA_3072",
        Rsa4096 = "RSA_4096",
        EccNistP256 = "ECC_NIST_P256",
        EccNistP384 = "ECC_NIST_P384",
        EccNistP521 = "ECC_NIST_P521",
        EccSecgP256k1 = "ECC_SECG_P256K1",
        SymmetricDefault = "SYMMETRIC_DEFAULT",
        Hmac224 = "HMAC_224",
        Hmac256 = "HMAC_256",
        Hmac384 = "HMAC_384",
        Hmac512 = "HMAC_512",
        Sm2 = "SM2",
    }
}

nimbus_core::string_enum! {
    /// Source of the key material.
    pub enum OriginType {
        AwsKms = "AWS_KMS",
        External = "EXTERNAL",
        AwsCloudhsm = "AWS_CLOUDHSM",
        ExternalKeyStore = "EXTERNAL_KEY_STORE",
    }
}

nimbus_core::string_enum! {
    /// Encryption algorithms.
    pub enum EncryptionAlgorithmSpec {
        SymmetricDefault = "SYMMETRIC_DEFAULT",
        RsaesOaepSha1 = "RSAES_OAEP_SHA_1",
        RsaesOaepSha256 = "RSAES_OAEP_SHA_256",
        Sm2pke = "SM2PKE",
    }
}

nimbus_core::string_enum! {
    /// Signing algorithms.
    pub enum SigningAlgorithmSpec {
        RsassaPssSha256 = "RSASSA_PSS_SHA_256",
        RsassaPssSha384 = "RSASSA_PSS_SHA_384",
        RsassaPssSha512 = "RSASSA_PSS_SHA_512",
        RsassaPkcs1V15Sha256 = "RSASSA_PKCS1_V1_5_SHA_256",
        RsassaPkcs1V15Sha384 = "RSASSA_PKCS1_V1_5_SHA_384",
        RsassaPkcs1V15Sha512 = "RSASSA_PKCS1_V1_5_SHA_512",
        EcdsaSha256 = "ECDSA_SHA_256",
        EcdsaSha384 = "ECDSA_SHA_384",
        EcdsaSha512 = "ECDSA_SHA_512",
        Sm2dsa = "SM2DSA",
    }
}

nimbus_core::string_enum! {
    /// Length of a generated data key.
    pub enum DataKeySpec {
        Aes256 = "AES_256",
        Aes128 = "AES_128",
    }
}

nimbus_core::string_enum! {
    /// Whether a message to sign is the raw message or its digest.
    pub enum MessageType {
        Raw = "RAW",
        Digest = "DIGEST",
    }
}

nimbus_core::string_enum! {
    /// Lifecycle state of a key.
    pub enum KeyState {
        Creating = "Creating",
        Enabled = "Enabled",
        Disabled = "Disabled",
        PendingDeletion = "PendingDeletion",
        PendingImport = "PendingImport",
        PendingReplicaDeletion = "PendingReplicaDeletion",
        Unavailable = "Unavailable",
        Updating = "Updating",
    }
}

nimbus_core::string_enum! {
    /// Who manages a key.
    pub enum KeyManagerType {
        Aws = "AWS",
        Customer = "CUSTOMER",
    }
}

nimbus_core::string_enum! {
    /// Whether imported key material expires.
    pub enum ExpirationModelType {
        KeyMaterialExpires = "KEY_MATERIAL_EXPIRES",
        KeyMaterialDoesNotExpire = "KEY_MATERIAL_DOES_NOT_EXPIRE",
    }
}

nimbus_core::string_enum! {
    /// Role of a key in a multi-Region set.
    pub enum MultiRegionKeyType {
        Primary = "PRIMARY",
        Replica = "REPLICA",
    }
}

nimbus_core::string_enum! {
    /// HMAC algorithms.
    pub enum MacAlgorithmSpec {
        HmacSha224 = "HMAC_SHA_224",
        HmacSha256 = "HMAC_SHA_256",
        HmacSha384 = "HMAC_SHA_384",
        HmacSha512 = "HMAC_SHA_512",
    }
}

nimbus_core::string_enum! {
    /// Algorithm encrypting a response for a Nitro enclave recipient.
    pub enum KeyEncryptionMechanism {
        RsaesOaepSha256 = "RSAES_OAEP_SHA_256",
    }
}

nimbus_core::string_enum! {
    /// Key agreement algorithms.
    pub enum KeyAgreementAlgorithmSpec {
        Ecdh = "ECDH",
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A key/value tag attached to a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub tag_key: String,
    pub tag_value: String,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_key: key.into(),
            tag_value: value.into(),
        }
    }
}

/// The attestation of a Nitro enclave receiving an encrypted response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_encryption_algorithm: Option<KeyEncryptionMechanism>,
    #[serde(
        default,
        with = "nimbus_core::de::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub attestation_document: Option<Bytes>,
}

/// A key in a multi-Region set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiRegionKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Where a multi-Region key sits in its set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiRegionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region_key_type: Option<MultiRegionKeyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<MultiRegionKey>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub replica_keys: Vec<MultiRegionKey>,
}

/// The external key backing a key in an external key store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XksKeyConfigurationType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Metadata of a key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyMetadata {
    #[serde(rename = "AWSAccountId", skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_state: Option<KeyState>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub valid_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_hsm_cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_model: Option<ExpirationModelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_manager: Option<KeyManagerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_master_key_spec: Option<CustomerMasterKeySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region_configuration: Option<MultiRegionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_deletion_window_in_days: Option<i32>,
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub mac_algorithms: Vec<MacAlgorithmSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_key_configuration: Option<XksKeyConfigurationType>,
}

/// One alias returned by `ListAliases`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliasListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_key_id: Option<String>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "nimbus_core::de::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_enum_wire_strings() {
        assert_eq!(KeySpec::EccSecgP256k1.as_str(), "ECC_SECG_P256K1");
        assert_eq!(
            SigningAlgorithmSpec::RsassaPkcs1V15Sha256.as_str(),
            "RSASSA_PKCS1_V1_5_SHA_256"
        );
        assert_eq!(KeyState::from("PendingDeletion"), KeyState::PendingDeletion);
        for value in EncryptionAlgorithmSpec::VALUES {
            assert!(EncryptionAlgorithmSpec::from(*value).is_known());
        }
    }

    #[test]
    fn test_should_parse_key_metadata() {
        let json = r#"{
            "AWSAccountId": "111122223333",
            "KeyId": "1234abcd-12ab-34cd-56ef-1234567890ab",
            "Arn": "arn:aws:kms:us-west-2:111122223333:key/1234abcd",
            "CreationDate": 1499988169.25,
            "Enabled": true,
            "KeyUsage": "SIGN_VERIFY",
            "KeyState": "Enabled",
            "Origin": "AWS_KMS",
            "KeyManager": "CUSTOMER",
            "KeySpec": "ECC_NIST_P521",
            "SigningAlgorithms": ["ECDSA_SHA_512"],
            "EncryptionAlgorithms": null,
            "MultiRegion": true,
            "MultiRegionConfiguration": {
                "MultiRegionKeyType": "PRIMARY",
                "PrimaryKey": {"Arn": "arn:primary", "Region": "us-west-2"},
                "ReplicaKeys": [{"Arn": "arn:replica", "Region": "eu-west-1"}]
            },
            "FutureField": "ignored"
        }"#;
        let meta: KeyMetadata = serde_json::from_str(json).expect("parse metadata");
        assert_eq!(meta.aws_account_id.as_deref(), Some("111122223333"));
        assert_eq!(meta.key_usage, Some(KeyUsageType::SignVerify));
        assert_eq!(meta.key_spec, Some(KeySpec::EccNistP521));
        assert_eq!(meta.signing_algorithms, vec![SigningAlgorithmSpec::EcdsaSha512]);
        assert!(meta.encryption_algorithms.is_empty());
        assert_eq!(
            meta.creation_date.expect("creation date").timestamp_subsec_millis(),
            250
        );
        let mrc = meta.multi_region_configuration.expect("multi-region");
        assert_eq!(mrc.multi_region_key_type, Some(MultiRegionKeyType::Primary));
        assert_eq!(mrc.replica_keys[0].region.as_deref(), Some("eu-west-1"));
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_should_keep_unknown_key_state() {
        let meta: KeyMetadata =
            serde_json::from_str(r#"{"KeyId":"k","KeyState":"Hibernating"}"#).expect("parse");
        assert_eq!(meta.key_state, Some(KeyState::Unknown("Hibernating".to_owned())));
    }
}
