use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchRequest {
    pub channel_input: String,
    pub api_key: String,
    pub openai_api_key: Option<String>,
}

impl SearchRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("channel_input", self.channel_input.as_str()),
            ("api_key", self.api_key.as_str()),
        ];
        if let Some(openai_api_key) = &self.openai_api_key {
            fields.push(("openai_api_key", openai_api_key.as_str()));
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInfo {
    pub channel_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub banner_url: Option<String>,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub description: String,
    pub published_at: Option<String>,
    pub custom_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub view_count: u64,
    pub comment_count: Option<u64>,
    pub publish_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoCategory {
    Latest,
    Popular,
    LatestShorts,
    PopularShorts,
}

impl VideoCategory {
    pub fn all_variants() -> Vec<Self> {
        vec![
            VideoCategory::Latest,
            VideoCategory::Popular,
            VideoCategory::LatestShorts,
            VideoCategory::PopularShorts,
        ]
    }

    // Tag sent as `video_type` and used as the partition key in payloads.
    pub fn tag(&self) -> &'static str {
        match self {
            VideoCategory::Latest => "latest",
            VideoCategory::Popular => "popular",
            VideoCategory::LatestShorts => "latest_shorts",
            VideoCategory::PopularShorts => "popular_shorts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoCategory::Latest => "最新動画",
            VideoCategory::Popular => "人気動画",
            VideoCategory::LatestShorts => "最新ショート",
            VideoCategory::PopularShorts => "人気ショート",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Flat,
    Nested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSource {
    Deferred,
    Partitioned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Deferred,
    Partitioned,
    Flat,
}

impl Layout {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "deferred" => Some(Layout::Deferred),
            "partitioned" => Some(Layout::Partitioned),
            "flat" => Some(Layout::Flat),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Layout::Deferred => "deferred",
            Layout::Partitioned => "partitioned",
            Layout::Flat => "flat",
        }
    }

    pub fn payload_shape(&self) -> PayloadShape {
        match self {
            Layout::Deferred | Layout::Partitioned => PayloadShape::Nested,
            Layout::Flat => PayloadShape::Flat,
        }
    }

    pub fn video_source(&self) -> VideoSource {
        match self {
            Layout::Partitioned => VideoSource::Partitioned,
            Layout::Deferred | Layout::Flat => VideoSource::Deferred,
        }
    }

    pub fn collects_openai_key(&self) -> bool {
        matches!(self, Layout::Flat)
    }

    pub fn default_category(&self) -> VideoCategory {
        match self.video_source() {
            VideoSource::Deferred => VideoCategory::Latest,
            VideoSource::Partitioned => VideoCategory::Popular,
        }
    }
}
