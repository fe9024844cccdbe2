//! Typed client for the AWS Key Management Service.
//!
//! KMS speaks `awsJson1_1`: every call is a `POST /` whose JSON body carries
//! `PascalCase` fields and whose `X-Amz-Target` header names the operation.
//!
//! ```no_run
//! # async fn demo(transport: std::sync::Arc<dyn nimbus_core::HttpTransport>) {
//! use nimbus_kms::{EncryptRequest, KmsClient};
//!
//! let kms = KmsClient::new(transport, nimbus_core::ClientConfig::from_env());
//! let result = kms
//!     .encrypt(EncryptRequest {
//!         key_id: Some("alias/app".to_owned()),
//!         plaintext: Some(bytes::Bytes::from_static(b"secret")),
//!         ..Default::default()
//!     })
//!     .await
//!     .expect("encrypt");
//! let _ciphertext = result.initialize().expect("parse").ciphertext_blob.clone();
//! # }
//! ```
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{KmsClient, KmsResult, ListAliasesResult};
pub use error::KmsError;
pub use input::{
    CreateAliasRequest, CreateKeyRequest, DecryptRequest, EncryptRequest, GenerateDataKeyRequest,
    GetPublicKeyRequest, ListAliasesRequest, SignRequest, VerifyRequest,
};
pub use operations::KmsOperation;
pub use output::{
    CreateAliasResponse, CreateKeyResponse, DecryptResponse, EncryptResponse,
    GenerateDataKeyResponse, GetPublicKeyResponse, ListAliasesResponse, SignResponse,
    VerifyResponse,
};
