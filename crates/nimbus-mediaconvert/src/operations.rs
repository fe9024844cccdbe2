//! MediaConvert operation enum.

use std::fmt;

/// All supported MediaConvert operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaConvertOperation {
    /// Cancel a job that has not finished.
    CancelJob,
    /// Submit a transcoding job.
    CreateJob,
    /// Look up the account-specific endpoint.
    DescribeEndpoints,
    /// Fetch one job.
    GetJob,
    /// List recent jobs.
    ListJobs,
}

impl MediaConvertOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CancelJob,
        Self::CreateJob,
        Self::DescribeEndpoints,
        Self::GetJob,
        Self::ListJobs,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CancelJob => "CancelJob",
            Self::CreateJob => "CreateJob",
            Self::DescribeEndpoints => "DescribeEndpoints",
            Self::GetJob => "GetJob",
            Self::ListJobs => "ListJobs",
        }
    }

    /// Parse an operation name string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// HTTP method of the operation.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::CancelJob => http::Method::DELETE,
            Self::CreateJob | Self::DescribeEndpoints => http::Method::POST,
            Self::GetJob | Self::ListJobs => http::Method::GET,
        }
    }
}

impl fmt::Display for MediaConvertOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
