//! KMS error types and the per-operation error tables.

use nimbus_core::{ApiError, ErrorTable};

nimbus_core::service_error! {
    /// Every documented KMS error.
    pub enum KmsError {
        AlreadyExists(ApiError) = "AlreadyExistsException",
        CloudHsmClusterInvalidConfiguration(ApiError) = "CloudHsmClusterInvalidConfigurationException",
        CustomKeyStoreInvalidState(ApiError) = "CustomKeyStoreInvalidStateException",
        CustomKeyStoreNotFound(ApiError) = "CustomKeyStoreNotFoundException",
        DependencyTimeout(ApiError) = "DependencyTimeoutException",
        Disabled(ApiError) = "DisabledException",
        DryRunOperation(ApiError) = "DryRunOperationException",
        IncorrectKey(ApiError) = "IncorrectKeyException",
        InvalidAliasName(ApiError) = "InvalidAliasNameException",
        InvalidArn(ApiError) = "InvalidArnException",
        InvalidCiphertext(ApiError) = "InvalidCiphertextException",
        InvalidGrantToken(ApiError) = "InvalidGrantTokenException",
        InvalidKeyUsage(ApiError) = "InvalidKeyUsageException",
        InvalidMarker(ApiError) = "InvalidMarkerException",
        KeyUnavailable(ApiError) = "KeyUnavailableException",
        KmsInternal(ApiError) = "KMSInternalException",
        KmsInvalidSignature(ApiError) = "KMSInvalidSignatureException",
        KmsInvalidState(ApiError) = "KMSInvalidStateException",
        LimitExceeded(ApiError) = "LimitExceededException",
        MalformedPolicyDocument(ApiError) = "MalformedPolicyDocumentException",
        NotFound(ApiError) = "NotFoundException",
        Tag(ApiError) = "TagException",
        UnsupportedOperation(ApiError) = "UnsupportedOperationException",
        XksKeyAlreadyInUse(ApiError) = "XksKeyAlreadyInUseException",
        XksKeyInvalidConfiguration(ApiError) = "XksKeyInvalidConfigurationException",
        XksKeyNotFound(ApiError) = "XksKeyNotFoundException",
    }
}

pub(crate) static CREATE_ALIAS: ErrorTable<KmsError> = ErrorTable::new(&[
    ("DependencyTimeoutException", KmsError::DependencyTimeout),
    ("AlreadyExistsException", KmsError::AlreadyExists),
    ("NotFoundException", KmsError::NotFound),
    ("InvalidAliasNameException", KmsError::InvalidAliasName),
    ("KMSInternalException", KmsError::KmsInternal),
    ("LimitExceededException", KmsError::LimitExceeded),
    ("KMSInvalidStateException", KmsError::KmsInvalidState),
]);

pub(crate) static CREATE_KEY: ErrorTable<KmsError> = ErrorTable::new(&[
    ("MalformedPolicyDocumentException", KmsError::MalformedPolicyDocument),
    ("DependencyTimeoutException", KmsError::DependencyTimeout),
    ("InvalidArnException", KmsError::InvalidArn),
    ("UnsupportedOperationException", KmsError::UnsupportedOperation),
    ("KMSInternalException", KmsError::KmsInternal),
    ("LimitExceededException", KmsError::LimitExceeded),
    ("TagException", KmsError::Tag),
    ("CustomKeyStoreNotFoundException", KmsError::CustomKeyStoreNotFound),
    ("CustomKeyStoreInvalidStateException", KmsError::CustomKeyStoreInvalidState),
    (
        "CloudHsmClusterInvalidConfigurationException",
        KmsError::CloudHsmClusterInvalidConfiguration,
    ),
    (
        "XksKeyInvalidConfigurationException",
        KmsError::XksKeyInvalidConfiguration,
    ),
    ("XksKeyAlreadyInUseException", KmsError::XksKeyAlreadyInUse),
    ("XksKeyNotFoundException", KmsError::XksKeyNotFound),
]);

pub(crate) static DECRYPT: ErrorTable<KmsError> = ErrorTable::new(&[
    ("NotFoundException", KmsError::NotFound),
    ("DisabledException", KmsError::Disabled),
    ("InvalidCiphertextException", KmsError::InvalidCiphertext),
    ("KeyUnavailableException", KmsError::KeyUnavailable),
    ("IncorrectKeyException", KmsError::IncorrectKey),
    ("InvalidKeyUsageException", KmsError::InvalidKeyUsage),
    ("DependencyTimeoutException", KmsError::DependencyTimeout),
    ("InvalidGrantTokenException", KmsError::InvalidGrantToken),
    ("KMSInternalException", KmsError::KmsInternal),
    ("KMSInvalidStateException", KmsError::KmsInvalidState),
    ("DryRunOperationException", KmsError::DryRunOperation),
]);

/// Shared by `Encrypt`, `GenerateDataKey` and `Sign`.
pub(crate) static KEY_OPERATION: ErrorTable<KmsError> = ErrorTable::new(&[
    ("NotFoundException", KmsError::NotFound),
    ("DisabledException", KmsError::Disabled),
    ("KeyUnavailableException", KmsError::KeyUnavailable),
    ("DependencyTimeoutException", KmsError::DependencyTimeout),
    ("InvalidKeyUsageException", KmsError::InvalidKeyUsage),
    ("InvalidGrantTokenException", KmsError::InvalidGrantToken),
    ("KMSInternalException", KmsError::KmsInternal),
    ("KMSInvalidStateException", KmsError::KmsInvalidState),
    ("DryRunOperationException", KmsError::DryRunOperation),
]);

pub(crate) static VERIFY: ErrorTable<KmsError> = ErrorTable::new(&[
    ("NotFoundException", KmsError::NotFound),
    ("DisabledException", KmsError::Disabled),
    ("KeyUnavailableException", KmsError::KeyUnavailable),
    ("DependencyTimeoutException", KmsError::DependencyTimeout),
    ("InvalidKeyUsageException", KmsError::InvalidKeyUsage),
    ("InvalidGrantTokenException", KmsError::InvalidGrantToken),
    ("KMSInternalException", KmsError::KmsInternal),
    ("KMSInvalidStateException", KmsError::KmsInvalidState),
    ("KMSInvalidSignatureException", KmsError::KmsInvalidSignature),
    ("DryRunOperationException", KmsError::DryRunOperation),
]);

pub(crate) static GET_PUBLIC_KEY: ErrorTable<KmsError> = ErrorTable::new(&[
    ("NotFoundException", KmsError::NotFound),
    ("DisabledException", KmsError::Disabled),
    ("KeyUnavailableException", KmsError::KeyUnavailable),
    ("DependencyTimeoutException", KmsError::DependencyTimeout),
    ("UnsupportedOperationException", KmsError::UnsupportedOperation),
    ("InvalidArnException", KmsError::InvalidArn),
    ("InvalidGrantTokenException", KmsError::InvalidGrantToken),
    ("InvalidKeyUsageException", KmsError::InvalidKeyUsage),
    ("KMSInternalException", KmsError::KmsInternal),
    ("KMSInvalidStateException", KmsError::KmsInvalidState),
]);

pub(crate) static LIST_ALIASES: ErrorTable<KmsError> = ErrorTable::new(&[
    ("DependencyTimeoutException", KmsError::DependencyTimeout),
    ("InvalidMarkerException", KmsError::InvalidMarker),
    ("KMSInternalException", KmsError::KmsInternal),
    ("InvalidArnException", KmsError::InvalidArn),
    ("NotFoundException", KmsError::NotFound),
]);
