use crate::models::{ChannelInfo, VideoSummary};
use crate::utils::{channel_url, css_url, format_locale_date, format_number, video_url};

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelView {
    pub banner_url: Option<String>,
    pub banner_style: String,
    pub icon_src: String,
    pub channel_link: String,
    pub name: String,
    pub channel_id_text: String,
    pub subscriber_text: String,
    pub total_views_text: String,
    pub video_count_text: String,
    pub description: String,
    pub published_text: Option<String>,
    pub custom_url_text: Option<String>,
}

impl ChannelView {
    pub fn new(info: &ChannelInfo) -> Self {
        let banner_style = match &info.banner_url {
            Some(url) => format!("display: block; background-image: {};", css_url(url)),
            None => "display: none;".to_string(),
        };

        Self {
            banner_url: info.banner_url.clone(),
            banner_style,
            icon_src: info.thumbnail_url.clone(),
            channel_link: channel_url(&info.channel_id),
            name: info.title.clone(),
            channel_id_text: format!("チャンネルID: {}", info.channel_id),
            subscriber_text: format!("登録者数: {}", format_number(info.subscriber_count)),
            total_views_text: format!("総再生数: {}", format_number(info.view_count)),
            video_count_text: format!("動画数: {}", format_number(info.video_count)),
            description: info.description.clone(),
            published_text: info
                .published_at
                .as_deref()
                .map(|date| format!("開設日: {}", format_locale_date(date))),
            custom_url_text: info
                .custom_url
                .as_deref()
                .map(|custom_url| format!("カスタムURL: {custom_url}")),
        }
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoCardView {
    pub link: String,
    pub thumbnail: String,
    pub title: String,
    pub views_text: String,
    pub comments_text: Option<String>,
    pub published_text: String,
}

impl VideoCardView {
    pub fn new(video: &VideoSummary) -> Self {
        Self {
            link: video_url(&video.id),
            thumbnail: video.thumbnail_url.clone(),
            title: video.title.clone(),
            views_text: format!("再生回数: {}", format_number(video.view_count)),
            comments_text: video
                .comment_count
                .map(|count| format!("コメント数: {}", format_number(count))),
            published_text: format!("公開日: {}", format_locale_date(&video.publish_date)),
        }
    }
}
