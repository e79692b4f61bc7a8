use crate::models::{ChannelInfo, PayloadShape, VideoCategory, VideoSummary};
use crate::search::error::{Operation, SearchError};
use crate::search::tabs::PartitionedVideos;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub channel: ChannelInfo,
    pub videos: Option<PartitionedVideos>,
}

pub fn interpret_search_payload(
    payload: Value,
    shape: PayloadShape,
) -> Result<SearchOutcome, SearchError> {
    check_reported_error(&payload)?;

    let channel_value = match shape {
        PayloadShape::Flat => payload,
        PayloadShape::Nested => match payload {
            Value::Object(mut object) => object.remove("channel_info").ok_or_else(|| {
                SearchError::transport(Operation::Search, "Response has no channel_info")
            })?,
            other => {
                return Err(SearchError::transport(
                    Operation::Search,
                    format!("Expected a JSON object, got {other}"),
                ))
            }
        },
    };

    let raw: RawChannel = serde_json::from_value(channel_value).map_err(|e| {
        SearchError::transport(Operation::Search, format!("Unexpected channel payload: {e}"))
    })?;

    Ok(raw.into_outcome())
}

pub fn interpret_videos_payload(payload: Value) -> Result<Vec<VideoSummary>, SearchError> {
    check_reported_error(&payload)?;

    let raw: RawVideoList = serde_json::from_value(payload).map_err(|e| {
        SearchError::transport(
            Operation::LoadVideos,
            format!("Unexpected videos payload: {e}"),
        )
    })?;

    Ok(raw
        .videos
        .unwrap_or_default()
        .into_iter()
        .map(RawVideo::into_summary)
        .collect())
}

// Only a truthy `error` fails the call: null, false, 0 and "" count as absent.
fn check_reported_error(payload: &Value) -> Result<(), SearchError> {
    match payload.get("error") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(()),
        Some(Value::String(message)) if message.is_empty() => Ok(()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(()),
        Some(Value::String(message)) => Err(SearchError::Application(message.clone())),
        Some(other) => Err(SearchError::Application(other.to_string())),
    }
}

#[derive(Deserialize)]
struct RawChannel {
    channel_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    title: String,
    #[serde(default, alias = "thumbnail_url", deserialize_with = "nullable_string")]
    thumbnail: String,
    #[serde(default)]
    banner_url: Option<String>,
    #[serde(default, deserialize_with = "count")]
    subscriber_count: u64,
    #[serde(default, deserialize_with = "count")]
    view_count: u64,
    #[serde(default, deserialize_with = "count")]
    video_count: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    description: String,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    custom_url: Option<String>,
    #[serde(default)]
    videos: Option<RawPartitions>,
}

impl RawChannel {
    fn into_outcome(self) -> SearchOutcome {
        let channel = ChannelInfo {
            channel_id: self.channel_id,
            title: self.title,
            thumbnail_url: self.thumbnail,
            banner_url: non_empty(self.banner_url),
            subscriber_count: self.subscriber_count,
            view_count: self.view_count,
            video_count: self.video_count,
            description: self.description,
            published_at: non_empty(self.published_at),
            custom_url: non_empty(self.custom_url),
        };

        SearchOutcome {
            channel,
            videos: self.videos.map(RawPartitions::into_partitioned),
        }
    }
}

#[derive(Deserialize)]
struct RawPartitions {
    #[serde(default)]
    latest: Option<Vec<RawVideo>>,
    #[serde(default)]
    popular: Option<Vec<RawVideo>>,
    #[serde(default)]
    latest_shorts: Option<Vec<RawVideo>>,
    #[serde(default)]
    popular_shorts: Option<Vec<RawVideo>>,
}

impl RawPartitions {
    fn into_partitioned(self) -> PartitionedVideos {
        let mut partitioned = PartitionedVideos::default();
        let lists = [
            (VideoCategory::Latest, self.latest),
            (VideoCategory::Popular, self.popular),
            (VideoCategory::LatestShorts, self.latest_shorts),
            (VideoCategory::PopularShorts, self.popular_shorts),
        ];
        for (category, list) in lists {
            let videos = list
                .unwrap_or_default()
                .into_iter()
                .map(RawVideo::into_summary)
                .collect();
            partitioned.insert(category, videos);
        }
        partitioned
    }
}

#[derive(Deserialize)]
struct RawVideoList {
    #[serde(default)]
    videos: Option<Vec<RawVideo>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVideo {
    Native(NativeVideo),
    Flat(FlatVideo),
}

impl RawVideo {
    fn into_summary(self) -> VideoSummary {
        match self {
            RawVideo::Native(video) => VideoSummary {
                id: video.id.into_string(),
                title: video.snippet.title,
                thumbnail_url: video.snippet.thumbnails.best_url(),
                view_count: video
                    .statistics
                    .as_ref()
                    .map_or(0, |statistics| statistics.view_count),
                comment_count: video
                    .statistics
                    .and_then(|statistics| statistics.comment_count),
                publish_date: video.snippet.published_at,
            },
            RawVideo::Flat(video) => VideoSummary {
                id: video.id,
                title: video.title,
                thumbnail_url: video.thumbnail,
                view_count: video.views,
                comment_count: video.comments,
                publish_date: video.publish_date,
            },
        }
    }
}

#[derive(Deserialize)]
struct FlatVideo {
    id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    title: String,
    #[serde(default, alias = "thumbnail_url", deserialize_with = "nullable_string")]
    thumbnail: String,
    #[serde(default, alias = "view_count", deserialize_with = "count")]
    views: u64,
    #[serde(default, alias = "comment_count", deserialize_with = "optional_count")]
    comments: Option<u64>,
    #[serde(default, alias = "published_at", deserialize_with = "nullable_string")]
    publish_date: String,
}

#[derive(Deserialize)]
struct NativeVideo {
    id: NativeVideoId,
    snippet: NativeSnippet,
    #[serde(default)]
    statistics: Option<NativeStatistics>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NativeVideoId {
    Plain(String),
    Resource {
        #[serde(rename = "videoId")]
        video_id: String,
    },
}

impl NativeVideoId {
    fn into_string(self) -> String {
        match self {
            NativeVideoId::Plain(id) => id,
            NativeVideoId::Resource { video_id } => video_id,
        }
    }
}

#[derive(Deserialize)]
struct NativeSnippet {
    #[serde(default, deserialize_with = "nullable_string")]
    title: String,
    #[serde(default)]
    thumbnails: NativeThumbnails,
    #[serde(rename = "publishedAt", default, deserialize_with = "nullable_string")]
    published_at: String,
}

#[derive(Deserialize, Default)]
struct NativeThumbnails {
    #[serde(default)]
    default: Option<NativeThumbnail>,
    #[serde(default)]
    medium: Option<NativeThumbnail>,
    #[serde(default)]
    high: Option<NativeThumbnail>,
    #[serde(default)]
    standard: Option<NativeThumbnail>,
    #[serde(default)]
    maxres: Option<NativeThumbnail>,
}

impl NativeThumbnails {
    fn best_url(self) -> String {
        self.maxres
            .or(self.standard)
            .or(self.high)
            .or(self.medium)
            .or(self.default)
            .map(|thumbnail| thumbnail.url)
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct NativeThumbnail {
    url: String,
}

#[derive(Deserialize)]
struct NativeStatistics {
    #[serde(rename = "viewCount", default, deserialize_with = "count")]
    view_count: u64,
    #[serde(rename = "commentCount", default, deserialize_with = "optional_count")]
    comment_count: Option<u64>,
}

// The provider sends counts as strings, our own backends as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl RawCount {
    fn value<E: de::Error>(self) -> Result<u64, E> {
        match self {
            RawCount::Integer(n) => Ok(n),
            RawCount::Float(f) if f.is_finite() && f > 0.0 => Ok(f as u64),
            RawCount::Float(_) => Ok(0),
            RawCount::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid count '{text}'"))),
        }
    }
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(optional_count(deserializer)?.unwrap_or(0))
}

fn optional_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Option::<RawCount>::deserialize(deserializer)?
        .map(RawCount::value)
        .transpose()
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
