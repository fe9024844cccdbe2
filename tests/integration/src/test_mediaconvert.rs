//! MediaConvert integration tests.

#[cfg(test)]
mod tests {
    use nimbus_mediaconvert::types::{
        FileGroupSettings, JobSettings, JobStatus, OutputGroup, OutputGroupSettings,
        OutputGroupType,
    };
    use nimbus_mediaconvert::{CancelJobRequest, CreateJobRequest, GetJobRequest};

    use crate::{mediaconvert_client, mock_transport};

    const ROLE: &str = "arn:aws:iam::111122223333:role/MediaConvert";

    fn file_group_settings() -> JobSettings {
        JobSettings {
            output_groups: vec![OutputGroup {
                name: Some("File Group".to_owned()),
                output_group_settings: Some(OutputGroupSettings {
                    kind: Some(OutputGroupType::FileGroupSettings),
                    file_group_settings: Some(FileGroupSettings {
                        destination: Some("s3://bucket/out/".to_owned()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_should_submit_track_and_cancel_job() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(
            201,
            r#"{"job":{"id":"1604342140-abc","status":"SUBMITTED","role":"arn:aws:iam::111122223333:role/MediaConvert"}}"#,
        );
        mock.push_json(
            200,
            r#"{"job":{"id":"1604342140-abc","status":"PROGRESSING","jobPercentComplete":42}}"#,
        );
        mock.push_json(202, "{}");
        let mediaconvert = mediaconvert_client(&mock);

        let created = mediaconvert
            .create_job(CreateJobRequest {
                role: Some(ROLE.to_owned()),
                settings: Some(file_group_settings()),
                ..Default::default()
            })
            .await?
            .into_output()?;
        let id = created.job.and_then(|job| job.id).expect("job id");

        let fetched = mediaconvert
            .get_job(GetJobRequest {
                id: Some(id.clone()),
                ..Default::default()
            })
            .await?
            .into_output()?;
        let job = fetched.job.expect("job");
        assert_eq!(job.status, Some(JobStatus::Progressing));
        assert_eq!(job.job_percent_complete, Some(42));

        mediaconvert
            .cancel_job(CancelJobRequest {
                id: Some(id),
                ..Default::default()
            })
            .await?;

        let requests = mock.requests();
        let methods: Vec<_> = requests.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(methods, ["POST", "GET", "DELETE"]);
        assert_eq!(
            requests[2].uri,
            "https://mediaconvert.us-west-2.amazonaws.com/2017-08-29/jobs/1604342140-abc"
        );

        let body = requests[0].json();
        assert_eq!(body["role"], ROLE);
        assert_eq!(
            body["settings"]["outputGroups"][0]["outputGroupSettings"]["type"],
            "FILE_GROUP_SETTINGS"
        );
        assert!(body["clientRequestToken"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn test_should_generate_token_per_submission() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(201, r#"{"job":{"id":"a"}}"#);
        mock.push_json(201, r#"{"job":{"id":"b"}}"#);
        let mediaconvert = mediaconvert_client(&mock);
        let request = CreateJobRequest {
            role: Some(ROLE.to_owned()),
            settings: Some(file_group_settings()),
            ..Default::default()
        };

        mediaconvert.create_job(request.clone()).await?;
        mediaconvert.create_job(request).await?;

        let tokens: Vec<_> = mock
            .requests()
            .iter()
            .map(|r| r.json()["clientRequestToken"].clone())
            .collect();
        assert_ne!(tokens[0], tokens[1]);
        Ok(())
    }

    #[tokio::test]
    async fn test_should_keep_caller_token() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(201, r#"{"job":{"id":"a"}}"#);

        mediaconvert_client(&mock)
            .create_job(CreateJobRequest {
                role: Some(ROLE.to_owned()),
                settings: Some(file_group_settings()),
                client_request_token: Some("retry-7".to_owned()),
                ..Default::default()
            })
            .await?;

        let body = mock.last_request().expect("request").json();
        assert_eq!(body["clientRequestToken"], "retry-7");
        Ok(())
    }
}
