//! Typed client for AWS Elemental MediaConvert.
//!
//! MediaConvert speaks `restJson1`: each operation has its own method and
//! path under `/2017-08-29/`, and bodies are camelCase JSON.
//!
//! ```no_run
//! # async fn demo(transport: std::sync::Arc<dyn nimbus_core::HttpTransport>) {
//! use nimbus_mediaconvert::types::{JobInput, JobSettings};
//! use nimbus_mediaconvert::{CreateJobRequest, MediaConvertClient};
//!
//! let mc = MediaConvertClient::new(transport, nimbus_core::ClientConfig::from_env());
//! let result = mc
//!     .create_job(CreateJobRequest {
//!         role: Some("arn:aws:iam::111122223333:role/MediaConvert".to_owned()),
//!         settings: Some(JobSettings {
//!             inputs: vec![JobInput {
//!                 file_input: Some("s3://media-in/source.mov".to_owned()),
//!                 ..Default::default()
//!             }],
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     })
//!     .await
//!     .expect("create job");
//! let _job_id = result.initialize().expect("parse").job.as_ref().and_then(|j| j.id.clone());
//! # }
//! ```
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_field_names)]
#![allow(missing_docs)]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{
    DescribeEndpointsResult, ListJobsResult, MediaConvertClient, MediaConvertResult,
};
pub use error::MediaConvertError;
pub use input::{
    CancelJobRequest, CreateJobRequest, DescribeEndpointsRequest, GetJobRequest, ListJobsRequest,
};
pub use operations::MediaConvertOperation;
pub use output::{
    CancelJobResponse, CreateJobResponse, DescribeEndpointsResponse, GetJobResponse,
    ListJobsResponse,
};
