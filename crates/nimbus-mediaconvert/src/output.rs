//! MediaConvert output types.

use nimbus_core::Page;
use serde::{Deserialize, Serialize};

use crate::types::{Endpoint, Job};

/// Output of `CancelJob`. The service returns an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelJobResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeEndpointsResponse {
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub endpoints: Vec<Endpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Page for DescribeEndpointsResponse {
    type Item = Endpoint;

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn items(&self) -> &[Endpoint] {
        &self.endpoints
    }

    fn into_items(self) -> Vec<Endpoint> {
        self.endpoints
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsResponse {
    #[serde(
        default,
        deserialize_with = "nimbus_core::de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub jobs: Vec<Job>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Page for ListJobsResponse {
    type Item = Job;

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn items(&self) -> &[Job] {
        &self.jobs
    }

    fn into_items(self) -> Vec<Job> {
        self.jobs
    }
}

nimbus_core::impl_json_output!(
    CancelJobResponse,
    CreateJobResponse,
    DescribeEndpointsResponse,
    GetJobResponse,
    ListJobsResponse,
);

#[cfg(test)]
mod tests {
    use nimbus_core::{FromResponse, Response};

    use super::*;
    use crate::types::JobStatus;

    fn ok(body: &str) -> Response {
        Response::new(http::StatusCode::OK, http::HeaderMap::new(), body.to_owned())
    }

    #[test]
    fn test_should_parse_empty_cancel_response() {
        assert_eq!(
            CancelJobResponse::from_response(&ok("{}")).expect("parse"),
            CancelJobResponse {}
        );
        assert_eq!(
            CancelJobResponse::from_response(&ok("")).expect("parse"),
            CancelJobResponse {}
        );
    }

    #[test]
    fn test_should_parse_job_list_page() {
        let page = ListJobsResponse::from_response(&ok(
            r#"{"jobs":[{"id":"j1","status":"COMPLETE"},{"id":"j2","status":"ERROR","errorCode":1010}],"nextToken":"t2"}"#,
        ))
        .expect("parse");
        assert_eq!(page.next_token(), Some("t2"));
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.jobs[1].status, Some(JobStatus::Error));
        assert_eq!(page.jobs[1].error_code, Some(1010));
    }

    #[test]
    fn test_should_treat_missing_lists_as_empty() {
        let page = ListJobsResponse::from_response(&ok(r#"{"jobs":null}"#)).expect("parse");
        assert!(page.jobs.is_empty());
        assert_eq!(page.next_token(), None);

        let page = DescribeEndpointsResponse::from_response(&ok("{}")).expect("parse");
        assert!(page.items().is_empty());
    }

    #[test]
    fn test_should_parse_get_job_response() {
        let out = GetJobResponse::from_response(&ok(
            r#"{"job":{"id":"j1","arn":"arn:aws:mediaconvert:us-east-1:1:jobs/j1","priority":0}}"#,
        ))
        .expect("parse");
        let job = out.job.expect("job");
        assert_eq!(job.id.as_deref(), Some("j1"));
        assert_eq!(job.priority, Some(0));
        assert!(job.settings.is_none());
    }
}
