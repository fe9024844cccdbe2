//! Pagination integration tests across services.

#[cfg(test)]
mod tests {
    use futures::{StreamExt, TryStreamExt};
    use nimbus_core::SdkError;
    use nimbus_kms::ListAliasesRequest;
    use nimbus_mediaconvert::types::{JobStatus, Order};
    use nimbus_mediaconvert::{DescribeEndpointsRequest, ListJobsRequest, MediaConvertError};

    use crate::{kms_client, mediaconvert_client, mock_transport, push_pages};

    #[tokio::test]
    async fn test_should_stream_aliases_across_pages() -> anyhow::Result<()> {
        let mock = mock_transport();
        push_pages(
            &mock,
            [
                r#"{"Aliases":[{"AliasName":"alias/a"},{"AliasName":"alias/b"}],"NextMarker":"m1","Truncated":true}"#,
                r#"{"Aliases":[{"AliasName":"alias/c"}],"Truncated":false}"#,
            ],
        );

        let aliases: Vec<_> = kms_client(&mock)
            .list_aliases(ListAliasesRequest {
                limit: Some(2),
                ..Default::default()
            })
            .await?
            .into_items()
            .try_collect()
            .await?;

        let names: Vec<_> = aliases
            .iter()
            .filter_map(|a| a.alias_name.as_deref())
            .collect();
        assert_eq!(names, ["alias/a", "alias/b", "alias/c"]);
        assert_eq!(mock.call_count(), 2);

        let follow_up = &mock.requests()[1].json();
        assert_eq!(follow_up["Marker"], "m1");
        assert_eq!(follow_up["Limit"], 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_should_ignore_marker_of_complete_listing() -> anyhow::Result<()> {
        let mock = mock_transport();
        push_pages(
            &mock,
            [r#"{"Aliases":[{"AliasName":"alias/a"}],"NextMarker":"stale","Truncated":false}"#],
        );

        let result = kms_client(&mock)
            .list_aliases(ListAliasesRequest::default())
            .await?;
        assert_eq!(result.next_token()?, None);
        let aliases: Vec<_> = result.into_items().try_collect().await?;
        assert_eq!(aliases.len(), 1);
        assert_eq!(mock.call_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_should_read_first_page_without_follow_up() -> anyhow::Result<()> {
        let mock = mock_transport();
        push_pages(
            &mock,
            [
                r#"{"jobs":[{"id":"j1","status":"COMPLETE"},{"id":"j2","status":"ERROR"}],"nextToken":"t1"}"#,
                r#"{"jobs":[{"id":"j3"}]}"#,
            ],
        );

        let result = mediaconvert_client(&mock)
            .list_jobs(ListJobsRequest {
                status: Some(JobStatus::Complete),
                order: Some(Order::Descending),
                ..Default::default()
            })
            .await?;
        let page = result.current_page()?;
        assert_eq!(page.len(), 2);
        assert_eq!(page[1].status, Some(JobStatus::Error));
        assert_eq!(result.next_token()?, Some("t1"));
        assert_eq!(mock.call_count(), 1);

        let request = mock.last_request().expect("request");
        assert_eq!(
            request.uri,
            "https://mediaconvert.us-west-2.amazonaws.com/2017-08-29/jobs?order=DESCENDING&status=COMPLETE"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_should_carry_filters_into_follow_up_page() -> anyhow::Result<()> {
        let mock = mock_transport();
        push_pages(
            &mock,
            [
                r#"{"jobs":[{"id":"j1"}],"nextToken":"t/1"}"#,
                r#"{"jobs":[{"id":"j2"}]}"#,
            ],
        );

        let ids: Vec<_> = mediaconvert_client(&mock)
            .list_jobs(ListJobsRequest {
                queue: Some("Default".to_owned()),
                ..Default::default()
            })
            .await?
            .into_items()
            .map_ok(|job| job.id.unwrap_or_default())
            .try_collect()
            .await?;
        assert_eq!(ids, ["j1", "j2"]);

        let follow_up = &mock.requests()[1];
        assert_eq!(
            follow_up.uri,
            "https://mediaconvert.us-west-2.amazonaws.com/2017-08-29/jobs?nextToken=t%2F1&queue=Default"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_should_end_stream_after_failed_page() -> anyhow::Result<()> {
        let mock = mock_transport();
        push_pages(&mock, [r#"{"endpoints":[{"url":"https://a.example"}],"nextToken":"n"}"#]);
        mock.push_json(
            429,
            r#"{"message":"slow down"}"#,
        );

        let results: Vec<_> = mediaconvert_client(&mock)
            .describe_endpoints(DescribeEndpointsRequest::default())
            .await?
            .into_items()
            .collect()
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].as_ref().ok().and_then(|e| e.url.as_deref()),
            Some("https://a.example")
        );
        assert!(matches!(results[1], Err(SdkError::Client(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_type_declared_error_on_follow_up_page() -> anyhow::Result<()> {
        let mock = mock_transport();
        push_pages(&mock, [r#"{"jobs":[],"nextToken":"n"}"#]);
        mock.push_json(
            429,
            r#"{"__type":"TooManyRequestsException","message":"slow down"}"#,
        );

        let err = mediaconvert_client(&mock)
            .list_jobs(ListJobsRequest::default())
            .await?
            .into_items()
            .try_collect::<Vec<_>>()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Service(MediaConvertError::TooManyRequests(_))
        ));
        Ok(())
    }
}
