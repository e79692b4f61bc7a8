use crate::env_variable_utils::CONFIG;
use crate::models::{PayloadShape, SearchRequest, VideoCategory, VideoSummary};
use crate::search::adapter::{interpret_search_payload, interpret_videos_payload, SearchOutcome};
use crate::search::error::{Operation, SearchError};
use gloo_net::http::Request;
use serde_json::Value;

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn post_form(
    path: &str,
    fields: &[(&str, &str)],
    operation: Operation,
) -> Result<Value, SearchError> {
    let url = CONFIG.endpoint(path);

    let request = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encode_form(fields))
        .map_err(|e| SearchError::transport(operation, format!("Request error: {e}")))?;

    let response = request
        .send()
        .await
        .map_err(|e| SearchError::transport(operation, format!("Network error: {e}")))?;

    // The status is informational only: an `error` field decides failure.
    let status = response.status();
    if !response.ok() {
        log::warn!("{} answered HTTP {}", url, status);
    }

    response.json::<Value>().await.map_err(|e| {
        SearchError::transport(
            operation,
            format!("Failed to parse response (HTTP {status}): {e}"),
        )
    })
}

pub async fn execute_search(
    request: &SearchRequest,
    shape: PayloadShape,
) -> Result<SearchOutcome, SearchError> {
    let payload = post_form("/search", &request.form_fields(), Operation::Search).await?;
    log::debug!("Received data: {}", payload);
    interpret_search_payload(payload, shape)
}

pub async fn load_videos(
    channel_id: &str,
    api_key: &str,
    category: VideoCategory,
) -> Result<Vec<VideoSummary>, SearchError> {
    let fields = [
        ("channel_id", channel_id),
        ("api_key", api_key),
        ("video_type", category.tag()),
    ];
    let payload = post_form("/get_videos", &fields, Operation::LoadVideos).await?;
    let videos = interpret_videos_payload(payload)?;
    log::debug!("Loaded {} {} videos", videos.len(), category.tag());
    Ok(videos)
}
