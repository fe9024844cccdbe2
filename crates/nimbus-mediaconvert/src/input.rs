//! MediaConvert input types.
//!
//! Operations are addressed by method and path under `/2017-08-29/`. Path
//! labels are percent-encoded, query parameters are rendered in a fixed
//! order, and the remaining fields travel as a camelCase JSON body.

use std::collections::BTreeMap;

use nimbus_core::request::encode_component;
use nimbus_core::{Input, InvalidArgument, PaginatedInput, Request, required};
use serde::Serialize;

use crate::operations::MediaConvertOperation;
use crate::types::{
    AccelerationSettings, BillingTagsSource, DescribeEndpointsMode, HopDestination, JobSettings,
    JobStatus, Order, SimulateReservedQueue, StatusUpdateInterval,
};

/// Content type of JSON request bodies.
pub const CONTENT_TYPE: &str = "application/json";

/// API version prefix of every path.
const API_ROOT: &str = "/2017-08-29";

fn rest_request(operation: MediaConvertOperation, path: &str) -> Result<Request, InvalidArgument> {
    Request::new(operation.method(), format!("{API_ROOT}/{path}"))
        .with_header("content-type", CONTENT_TYPE)
}

/// Render `jobs/{id}`, rejecting a missing or empty id.
fn job_path(id: Option<&str>, shape: &str) -> Result<String, InvalidArgument> {
    let id = id.ok_or_else(|| InvalidArgument::missing("Id", shape))?;
    if id.is_empty() {
        return Err(InvalidArgument::new(format!(
            "Parameter \"Id\" of shape \"{shape}\" must not be empty"
        )));
    }
    Ok(format!("jobs/{}", encode_component(id)))
}

/// Input for the `CancelJob` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelJobRequest {
    /// Job id, bound to the path.
    #[serde(skip)]
    pub id: Option<String>,

    #[serde(skip)]
    pub region: Option<String>,
}

impl Input for CancelJobRequest {
    const OPERATION: &'static str = MediaConvertOperation::CancelJob.as_str();

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn request(&self) -> Result<Request, InvalidArgument> {
        let path = job_path(self.id.as_deref(), "CancelJobRequest")?;
        rest_request(MediaConvertOperation::CancelJob, &path)
    }
}

/// Input for the `CreateJob` operation.
///
/// `client_request_token` makes the submission idempotent; when it is unset a
/// fresh UUID is generated each time the request is rendered.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_settings: Option<AccelerationSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_tags_source: Option<BillingTagsSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hop_destinations: Vec<HopDestination>,

    /// Name or ARN of a job template to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_template: Option<String>,

    /// -50 to 50; higher runs first within a queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,

    /// IAM role MediaConvert assumes to read inputs and write outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<JobSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulate_reserved_queue: Option<SimulateReservedQueue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_update_interval: Option<StatusUpdateInterval>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_metadata: BTreeMap<String, String>,

    #[serde(skip)]
    pub region: Option<String>,
}

impl Input for CreateJobRequest {
    const OPERATION: &'static str = MediaConvertOperation::CreateJob.as_str();

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn request(&self) -> Result<Request, InvalidArgument> {
        required(&self.role, "Role", "CreateJobRequest")?;
        required(&self.settings, "Settings", "CreateJobRequest")?;

        let request = rest_request(MediaConvertOperation::CreateJob, "jobs")?;
        if self.client_request_token.is_some() {
            return request.with_json(self);
        }
        let body = Self {
            client_request_token: Some(uuid::Uuid::new_v4().to_string()),
            ..self.clone()
        };
        request.with_json(&body)
    }
}

/// Input for the `DescribeEndpoints` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeEndpointsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DescribeEndpointsMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip)]
    pub region: Option<String>,
}

impl Input for DescribeEndpointsRequest {
    const OPERATION: &'static str = MediaConvertOperation::DescribeEndpoints.as_str();

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn request(&self) -> Result<Request, InvalidArgument> {
        rest_request(MediaConvertOperation::DescribeEndpoints, "endpoints")?.with_json(self)
    }
}

impl PaginatedInput for DescribeEndpointsRequest {
    fn with_continuation(&self, token: String) -> Self {
        Self {
            next_token: Some(token),
            ..self.clone()
        }
    }
}

/// Input for the `GetJob` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetJobRequest {
    #[serde(skip)]
    pub id: Option<String>,

    #[serde(skip)]
    pub region: Option<String>,
}

impl Input for GetJobRequest {
    const OPERATION: &'static str = MediaConvertOperation::GetJob.as_str();

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn request(&self) -> Result<Request, InvalidArgument> {
        let path = job_path(self.id.as_deref(), "GetJobRequest")?;
        rest_request(MediaConvertOperation::GetJob, &path)
    }
}

/// Input for the `ListJobs` operation. Every field is a query parameter.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsRequest {
    /// Page size, 1 to 20.
    #[serde(skip)]
    pub max_results: Option<i32>,

    #[serde(skip)]
    pub next_token: Option<String>,

    /// Sort by submission time; newest first by default.
    #[serde(skip)]
    pub order: Option<Order>,

    /// Only list jobs of this queue.
    #[serde(skip)]
    pub queue: Option<String>,

    #[serde(skip)]
    pub status: Option<JobStatus>,

    #[serde(skip)]
    pub region: Option<String>,
}

impl Input for ListJobsRequest {
    const OPERATION: &'static str = MediaConvertOperation::ListJobs.as_str();

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn request(&self) -> Result<Request, InvalidArgument> {
        let mut request = rest_request(MediaConvertOperation::ListJobs, "jobs")?;
        if let Some(max_results) = self.max_results {
            request = request.with_query("maxResults", max_results.to_string());
        }
        if let Some(next_token) = &self.next_token {
            request = request.with_query("nextToken", next_token.as_str());
        }
        if let Some(order) = &self.order {
            request = request.with_query("order", order.as_str());
        }
        if let Some(queue) = &self.queue {
            request = request.with_query("queue", queue.as_str());
        }
        if let Some(status) = &self.status {
            request = request.with_query("status", status.as_str());
        }
        Ok(request)
    }
}

impl PaginatedInput for ListJobsRequest {
    fn with_continuation(&self, token: String) -> Self {
        Self {
            next_token: Some(token),
            ..self.clone()
        }
    }
}
