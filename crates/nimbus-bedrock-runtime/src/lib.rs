//! Typed client for Amazon Bedrock Runtime.
//!
//! Bedrock Runtime speaks `restJson1`. `InvokeModel` carries an opaque,
//! model-specific body in both directions, while `Converse` offers one
//! message format across models.
//!
//! ```no_run
//! # async fn demo(transport: std::sync::Arc<dyn nimbus_core::HttpTransport>) {
//! use nimbus_bedrock_runtime::{BedrockRuntimeClient, ConverseRequest, Message};
//!
//! let bedrock = BedrockRuntimeClient::new(transport, nimbus_core::ClientConfig::from_env());
//! let result = bedrock
//!     .converse(ConverseRequest {
//!         model_id: Some("amazon.nova-lite-v1:0".to_owned()),
//!         messages: vec![Message::user("What is 2+2?")],
//!         ..Default::default()
//!     })
//!     .await
//!     .expect("converse");
//! let reply = result.initialize().expect("parse").message().map(Message::text);
//! # let _ = reply;
//! # }
//! ```
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{BedrockRuntimeClient, BedrockRuntimeResult};
pub use error::{BedrockRuntimeError, ModelErrorException};
pub use input::{ConverseRequest, InvokeModelRequest};
pub use operations::BedrockRuntimeOperation;
pub use output::{ConverseResponse, InvokeModelResponse};
pub use types::{ContentBlock, ConversationRole, InferenceConfiguration, Message, StopReason};
