use crate::models::{VideoCategory, VideoSource, VideoSummary};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabState {
    #[default]
    NoSelection,
    Active(VideoCategory),
}

impl TabState {
    pub fn active(&self) -> Option<VideoCategory> {
        match self {
            TabState::NoSelection => None,
            TabState::Active(category) => Some(*category),
        }
    }

    pub fn is_active(&self, category: VideoCategory) -> bool {
        self.active() == Some(category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    Fetch(VideoCategory),
    Toggle(VideoCategory),
}

// Selecting always replaces the previous marker, so only one tab is ever active.
pub fn select_tab(source: VideoSource, category: VideoCategory) -> (TabState, TabAction) {
    let action = match source {
        VideoSource::Deferred => TabAction::Fetch(category),
        VideoSource::Partitioned => TabAction::Toggle(category),
    };
    (TabState::Active(category), action)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartitionedVideos {
    lists: BTreeMap<VideoCategory, Vec<VideoSummary>>,
}

impl PartitionedVideos {
    pub fn insert(&mut self, category: VideoCategory, videos: Vec<VideoSummary>) {
        self.lists.insert(category, videos);
    }

    pub fn get(&self, category: VideoCategory) -> &[VideoSummary] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum VideoShelf {
    #[default]
    Empty,
    // A fetch failed before any list was shown.
    Failed,
    Loaded(Vec<VideoSummary>),
    Partitioned(PartitionedVideos),
}

impl VideoShelf {
    pub fn visible(&self, tab: TabState) -> Option<&[VideoSummary]> {
        match self {
            VideoShelf::Empty | VideoShelf::Failed => None,
            VideoShelf::Loaded(videos) => Some(videos.as_slice()),
            VideoShelf::Partitioned(partitioned) => {
                tab.active().map(|category| partitioned.get(category))
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, VideoShelf::Failed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShelfAction {
    Replace(Vec<VideoSummary>),
    FetchFailed,
    NewChannel(Option<PartitionedVideos>),
}

impl Reducible for VideoShelf {
    type Action = ShelfAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShelfAction::Replace(videos) => Rc::new(VideoShelf::Loaded(videos)),
            // Whatever is on screen stays; only a pending shelf stops waiting.
            ShelfAction::FetchFailed => {
                if matches!(*self, VideoShelf::Empty) {
                    Rc::new(VideoShelf::Failed)
                } else {
                    self
                }
            }
            ShelfAction::NewChannel(Some(partitioned)) => {
                Rc::new(VideoShelf::Partitioned(partitioned))
            }
            // The old list stays until the new channel's first fetch lands.
            ShelfAction::NewChannel(None) => {
                if self.is_failed() {
                    Rc::new(VideoShelf::Empty)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: format!("Video {id}"),
            thumbnail_url: String::new(),
            view_count: 1,
            comment_count: None,
            publish_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn starts_without_selection() {
        let tab = TabState::default();
        assert_eq!(tab.active(), None);
        for category in VideoCategory::all_variants() {
            assert!(!tab.is_active(category));
        }
    }

    #[test]
    fn selecting_activates_only_the_clicked_tab() {
        let (first, _) = select_tab(VideoSource::Deferred, VideoCategory::Latest);
        assert!(first.is_active(VideoCategory::Latest));
        let (tab, _) = select_tab(VideoSource::Deferred, VideoCategory::PopularShorts);

        let active: Vec<_> = VideoCategory::all_variants()
            .into_iter()
            .filter(|c| tab.is_active(*c))
            .collect();
        assert_eq!(active, vec![VideoCategory::PopularShorts]);
    }

    #[test]
    fn source_decides_fetch_or_toggle() {
        assert_eq!(
            select_tab(VideoSource::Deferred, VideoCategory::Popular).1,
            TabAction::Fetch(VideoCategory::Popular)
        );
        assert_eq!(
            select_tab(VideoSource::Partitioned, VideoCategory::Popular).1,
            TabAction::Toggle(VideoCategory::Popular)
        );
    }

    #[test]
    fn partitioned_shelf_follows_active_tab() {
        let mut partitioned = PartitionedVideos::default();
        partitioned.insert(VideoCategory::Popular, vec![video("p1"), video("p2")]);
        partitioned.insert(VideoCategory::Latest, vec![video("l1")]);
        let shelf = VideoShelf::Partitioned(partitioned);

        assert!(shelf.visible(TabState::NoSelection).is_none());
        assert_eq!(
            shelf.visible(TabState::Active(VideoCategory::Popular)).unwrap().len(),
            2
        );
        assert_eq!(
            shelf.visible(TabState::Active(VideoCategory::Latest)).unwrap()[0].id,
            "l1"
        );
        assert!(shelf
            .visible(TabState::Active(VideoCategory::LatestShorts))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn reloading_the_same_list_does_not_accumulate() {
        let videos = vec![video("a"), video("b"), video("c")];
        let mut shelf = VideoShelf::Loaded(videos.clone());
        let once = shelf.visible(TabState::NoSelection).unwrap().len();
        shelf = VideoShelf::Loaded(videos);
        let twice = shelf.visible(TabState::NoSelection).unwrap().len();
        assert_eq!(once, 3);
        assert_eq!(twice, once);
    }

    #[test]
    fn failed_fetch_keeps_the_displayed_list() {
        let shelf = Rc::new(VideoShelf::Loaded(vec![video("a"), video("b")]));
        let after = shelf.clone().reduce(ShelfAction::FetchFailed);
        assert_eq!(after, shelf);
        assert_eq!(after.visible(TabState::NoSelection).unwrap().len(), 2);
    }

    #[test]
    fn failed_first_fetch_stops_waiting() {
        let after = Rc::new(VideoShelf::Empty).reduce(ShelfAction::FetchFailed);
        assert!(after.is_failed());
        assert!(after.visible(TabState::Active(VideoCategory::Latest)).is_none());

        let retried = after.reduce(ShelfAction::NewChannel(None));
        assert_eq!(*retried, VideoShelf::Empty);
    }

    #[test]
    fn new_channel_without_partitions_keeps_previous_list() {
        let shelf = Rc::new(VideoShelf::Loaded(vec![video("old")]));
        let after = shelf.clone().reduce(ShelfAction::NewChannel(None));
        assert_eq!(after, shelf);

        let replaced = after.reduce(ShelfAction::Replace(vec![video("new")]));
        assert_eq!(
            replaced.visible(TabState::NoSelection).unwrap()[0].id,
            "new"
        );
    }

    #[test]
    fn new_channel_with_partitions_replaces_shelf() {
        let mut partitioned = PartitionedVideos::default();
        partitioned.insert(VideoCategory::Popular, vec![video("p")]);
        let after = Rc::new(VideoShelf::Loaded(vec![video("old")]))
            .reduce(ShelfAction::NewChannel(Some(partitioned.clone())));
        assert_eq!(*after, VideoShelf::Partitioned(partitioned));
    }

    #[test]
    fn loaded_list_ignores_tab_marker() {
        let shelf = VideoShelf::Loaded(vec![video("x")]);
        assert_eq!(
            shelf.visible(TabState::Active(VideoCategory::Popular)),
            shelf.visible(TabState::Active(VideoCategory::Latest))
        );
    }
}
