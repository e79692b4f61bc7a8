use crate::models::{Layout, VideoSource, VideoSummary};
use crate::search::adapter::SearchOutcome;
use crate::search::error::SearchError;
use crate::search::tabs::ShelfAction;
use crate::search::view::ChannelView;

#[derive(Debug, Clone, PartialEq)]
pub enum VideoUpdate {
    Stale,
    Apply(ShelfAction),
    Failed(SearchError),
}

pub fn apply_videos(
    is_current: bool,
    result: Result<Vec<VideoSummary>, SearchError>,
) -> VideoUpdate {
    if !is_current {
        return VideoUpdate::Stale;
    }
    match result {
        Ok(videos) => VideoUpdate::Apply(ShelfAction::Replace(videos)),
        Err(e) => VideoUpdate::Failed(e),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchUpdate {
    Stale,
    Failed(SearchError),
    Show {
        view: ChannelView,
        channel_id: String,
        shelf: ShelfAction,
    },
}

pub fn apply_search(
    layout: Layout,
    is_current: bool,
    result: Result<SearchOutcome, SearchError>,
) -> SearchUpdate {
    if !is_current {
        return SearchUpdate::Stale;
    }
    match result {
        Err(e) => SearchUpdate::Failed(e),
        Ok(outcome) => {
            let partitions = match layout.video_source() {
                VideoSource::Partitioned => Some(outcome.videos.unwrap_or_default()),
                VideoSource::Deferred => None,
            };
            SearchUpdate::Show {
                view: ChannelView::new(&outcome.channel),
                channel_id: outcome.channel.channel_id,
                shelf: ShelfAction::NewChannel(partitions),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChannelInfo, VideoCategory};
    use crate::search::error::Operation;
    use crate::search::sequence::RequestSequence;
    use crate::search::tabs::{PartitionedVideos, TabState, VideoShelf};
    use std::rc::Rc;
    use yew::Reducible;

    fn video(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: id.to_string(),
            thumbnail_url: String::new(),
            view_count: 10,
            comment_count: None,
            publish_date: "2024-01-01".to_string(),
        }
    }

    fn outcome(videos: Option<PartitionedVideos>) -> SearchOutcome {
        SearchOutcome {
            channel: ChannelInfo {
                channel_id: "UC123".to_string(),
                title: "Test".to_string(),
                thumbnail_url: String::new(),
                banner_url: None,
                subscriber_count: 1000,
                view_count: 0,
                video_count: 0,
                description: String::new(),
                published_at: None,
                custom_url: None,
            },
            videos,
        }
    }

    #[test]
    fn current_video_list_replaces_shelf() {
        let update = apply_videos(true, Ok(vec![video("a")]));
        assert_eq!(
            update,
            VideoUpdate::Apply(ShelfAction::Replace(vec![video("a")]))
        );
    }

    #[test]
    fn stale_video_list_is_dropped() {
        assert_eq!(apply_videos(false, Ok(vec![video("a")])), VideoUpdate::Stale);
        let err = SearchError::Application("quota".to_string());
        assert_eq!(apply_videos(false, Err(err)), VideoUpdate::Stale);
    }

    #[test]
    fn failed_video_fetch_keeps_the_list_on_screen() {
        let shelf = Rc::new(VideoShelf::Loaded(vec![video("kept")]));
        let err = SearchError::transport(Operation::LoadVideos, "Network error");

        match apply_videos(true, Err(err.clone())) {
            VideoUpdate::Failed(reported) => assert_eq!(reported, err),
            other => panic!("expected a failure, got {other:?}"),
        }
        let after = shelf.reduce(ShelfAction::FetchFailed);
        assert_eq!(
            after.visible(TabState::Active(VideoCategory::Latest)).unwrap()[0].id,
            "kept"
        );
    }

    #[test]
    fn new_search_makes_in_flight_video_load_stale() {
        let videos = RequestSequence::default();
        let ticket = videos.issue();

        // A search starts while the video request is outstanding.
        videos.invalidate();

        let update = apply_videos(videos.is_current(ticket), Ok(vec![video("old")]));
        assert_eq!(update, VideoUpdate::Stale);
    }

    #[test]
    fn reported_error_leaves_results_untouched() {
        let err = SearchError::Application("invalid key".to_string());
        let update = apply_search(Layout::Deferred, true, Err(err.clone()));
        assert_eq!(update, SearchUpdate::Failed(err));
    }

    #[test]
    fn stale_search_result_is_dropped() {
        let searches = RequestSequence::default();
        let first = searches.issue();
        let _second = searches.issue();

        let update = apply_search(
            Layout::Deferred,
            searches.is_current(first),
            Ok(outcome(None)),
        );
        assert_eq!(update, SearchUpdate::Stale);
    }

    #[test]
    fn deferred_search_shows_channel_and_keeps_shelf() {
        match apply_search(Layout::Flat, true, Ok(outcome(None))) {
            SearchUpdate::Show {
                view,
                channel_id,
                shelf,
            } => {
                assert_eq!(view.subscriber_text, "登録者数: 1,000");
                assert_eq!(channel_id, "UC123");
                assert_eq!(shelf, ShelfAction::NewChannel(None));
            }
            other => panic!("expected a channel, got {other:?}"),
        }
    }

    #[test]
    fn partitioned_search_always_brings_partitions() {
        match apply_search(Layout::Partitioned, true, Ok(outcome(None))) {
            SearchUpdate::Show { shelf, .. } => assert_eq!(
                shelf,
                ShelfAction::NewChannel(Some(PartitionedVideos::default()))
            ),
            other => panic!("expected a channel, got {other:?}"),
        }
    }
}
