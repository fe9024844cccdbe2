//! The KMS client.

use std::sync::Arc;

use nimbus_core::{
    ClientConfig, EndpointMetadata, HttpTransport, LazyResult, PagedResult, Runtime, SdkError,
};

use crate::endpoint::ENDPOINTS;
use crate::error::{self, KmsError};
use crate::input::{
    CreateAliasRequest, CreateKeyRequest, DecryptRequest, EncryptRequest, GenerateDataKeyRequest,
    GetPublicKeyRequest, ListAliasesRequest, SignRequest, VerifyRequest,
};
use crate::output::{
    CreateAliasResponse, CreateKeyResponse, DecryptResponse, EncryptResponse,
    GenerateDataKeyResponse, GetPublicKeyResponse, ListAliasesResponse, SignResponse,
    VerifyResponse,
};

/// Result type of KMS operations.
pub type KmsResult<T> = Result<LazyResult<T>, SdkError<KmsError>>;

/// Paginated result of `ListAliases`.
pub type ListAliasesResult = PagedResult<ListAliasesRequest, ListAliasesResponse, KmsError>;

/// Client for the AWS Key Management Service.
#[derive(Debug, Clone)]
pub struct KmsClient {
    runtime: Runtime,
}

impl KmsClient {
    /// Create a client sending requests through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, config: ClientConfig) -> Self {
        Self {
            runtime: Runtime::new(transport, config, &ENDPOINTS),
        }
    }

    /// Endpoint and signing parameters for `region`.
    #[must_use]
    pub fn endpoint_metadata(&self, region: &str) -> EndpointMetadata {
        self.runtime.endpoint_metadata(region)
    }

    /// Create an alias for a key.
    pub async fn create_alias(&self, input: CreateAliasRequest) -> KmsResult<CreateAliasResponse> {
        self.runtime.get_result(&input, &error::CREATE_ALIAS).await
    }

    /// Create a key.
    pub async fn create_key(&self, input: CreateKeyRequest) -> KmsResult<CreateKeyResponse> {
        self.runtime.get_result(&input, &error::CREATE_KEY).await
    }

    /// Decrypt ciphertext produced by `encrypt` or `generate_data_key`.
    pub async fn decrypt(&self, input: DecryptRequest) -> KmsResult<DecryptResponse> {
        self.runtime.get_result(&input, &error::DECRYPT).await
    }

    /// Encrypt up to 4 KiB of plaintext.
    pub async fn encrypt(&self, input: EncryptRequest) -> KmsResult<EncryptResponse> {
        self.runtime.get_result(&input, &error::KEY_OPERATION).await
    }

    /// Generate a data key, returned both in plaintext and encrypted.
    pub async fn generate_data_key(
        &self,
        input: GenerateDataKeyRequest,
    ) -> KmsResult<GenerateDataKeyResponse> {
        self.runtime.get_result(&input, &error::KEY_OPERATION).await
    }

    /// Download the public key of an asymmetric key.
    pub async fn get_public_key(&self, input: GetPublicKeyRequest) -> KmsResult<GetPublicKeyResponse> {
        self.runtime.get_result(&input, &error::GET_PUBLIC_KEY).await
    }

    /// List aliases. The result can follow `NextMarker` across pages.
    pub async fn list_aliases(
        &self,
        input: ListAliasesRequest,
    ) -> Result<ListAliasesResult, SdkError<KmsError>> {
        PagedResult::fetch_first(&self.runtime, input, &error::LIST_ALIASES).await
    }

    /// Sign a message or digest.
    pub async fn sign(&self, input: SignRequest) -> KmsResult<SignResponse> {
        self.runtime.get_result(&input, &error::KEY_OPERATION).await
    }

    /// Verify a signature.
    pub async fn verify(&self, input: VerifyRequest) -> KmsResult<VerifyResponse> {
        self.runtime.get_result(&input, &error::VERIFY).await
    }
}
