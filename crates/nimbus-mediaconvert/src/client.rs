//! The MediaConvert client.

use std::sync::Arc;

use nimbus_core::{
    ClientConfig, EndpointMetadata, HttpTransport, LazyResult, PagedResult, Runtime, SdkError,
};

use crate::endpoint::ENDPOINTS;
use crate::error::{ALL_ERRORS, MediaConvertError};
use crate::input::{
    CancelJobRequest, CreateJobRequest, DescribeEndpointsRequest, GetJobRequest, ListJobsRequest,
};
use crate::output::{
    CancelJobResponse, CreateJobResponse, DescribeEndpointsResponse, GetJobResponse,
    ListJobsResponse,
};

/// Result type of MediaConvert operations.
pub type MediaConvertResult<T> = Result<LazyResult<T>, SdkError<MediaConvertError>>;

/// Paginated result of `DescribeEndpoints`.
pub type DescribeEndpointsResult =
    PagedResult<DescribeEndpointsRequest, DescribeEndpointsResponse, MediaConvertError>;

/// Paginated result of `ListJobs`.
pub type ListJobsResult = PagedResult<ListJobsRequest, ListJobsResponse, MediaConvertError>;

/// Client for AWS Elemental MediaConvert.
///
/// MediaConvert historically required an account-specific endpoint; use
/// [`describe_endpoints`](Self::describe_endpoints) to find it and set it as
/// the [`ClientConfig::endpoint`] of a second client if needed.
#[derive(Debug, Clone)]
pub struct MediaConvertClient {
    runtime: Runtime,
}

impl MediaConvertClient {
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

    /// Cancel a job that is still queued or running.
    pub async fn cancel_job(&self, input: CancelJobRequest) -> MediaConvertResult<CancelJobResponse> {
        self.runtime.get_result(&input, &ALL_ERRORS).await
    }

    /// Submit a transcoding job.
    pub async fn create_job(&self, input: CreateJobRequest) -> MediaConvertResult<CreateJobResponse> {
        self.runtime.get_result(&input, &ALL_ERRORS).await
    }

    /// List the account-specific endpoints.
    pub async fn describe_endpoints(
        &self,
        input: DescribeEndpointsRequest,
    ) -> Result<DescribeEndpointsResult, SdkError<MediaConvertError>> {
        PagedResult::fetch_first(&self.runtime, input, &ALL_ERRORS).await
    }

    /// Fetch one job by id.
    pub async fn get_job(&self, input: GetJobRequest) -> MediaConvertResult<GetJobResponse> {
        self.runtime.get_result(&input, &ALL_ERRORS).await
    }

    /// List jobs submitted in the last 90 days. The result can follow
    /// `nextToken` across pages.
    pub async fn list_jobs(
        &self,
        input: ListJobsRequest,
    ) -> Result<ListJobsResult, SdkError<MediaConvertError>> {
        PagedResult::fetch_first(&self.runtime, input, &ALL_ERRORS).await
    }
}
