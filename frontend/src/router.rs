use crate::env_variable_utils::CONFIG;
use crate::models::{Layout, SearchRequest, VideoCategory};
use crate::search::api::{execute_search, load_videos};
use crate::search::components::{ChannelCard, SearchForm, VideoList, VideoTabs};
use crate::search::error::report_failure;
use crate::search::flow::{apply_search, apply_videos, SearchUpdate, VideoUpdate};
use crate::search::sequence::RequestSequence;
use crate::search::tabs::{select_tab, ShelfAction, TabAction, TabState, VideoShelf};
use crate::search::view::ChannelView;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <ChannelSearchApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
struct VideoSession {
    channel_id: String,
    api_key: String,
}

#[derive(Clone)]
struct VideoPanel {
    tab: UseStateHandle<TabState>,
    shelf: UseReducerHandle<VideoShelf>,
    sequence: RequestSequence,
}

impl VideoPanel {
    fn select(&self, layout: Layout, session: &VideoSession, category: VideoCategory) {
        let (tab, action) = select_tab(layout.video_source(), category);
        self.tab.set(tab);

        if let TabAction::Fetch(category) = action {
            let session = session.clone();
            let shelf = self.shelf.clone();
            let sequence = self.sequence.clone();
            let ticket = sequence.issue();

            wasm_bindgen_futures::spawn_local(async move {
                let result = load_videos(&session.channel_id, &session.api_key, category).await;
                match apply_videos(sequence.is_current(ticket), result) {
                    VideoUpdate::Stale => {
                        log::debug!("Dropping stale {} video list", category.tag())
                    }
                    VideoUpdate::Apply(action) => shelf.dispatch(action),
                    VideoUpdate::Failed(e) => {
                        shelf.dispatch(ShelfAction::FetchFailed);
                        report_failure(&e);
                    }
                }
            });
        }
    }
}

#[function_component(ChannelSearchApp)]
pub fn channel_search_app() -> Html {
    let layout = CONFIG.layout;
    let channel = use_state(|| None::<ChannelView>);
    let session = use_state(|| None::<VideoSession>);
    let tab = use_state(TabState::default);
    let shelf = use_reducer(VideoShelf::default);
    let loading = use_state(|| false);
    let search_sequence = use_state(RequestSequence::default);
    let video_sequence = use_state(RequestSequence::default);

    let panel = VideoPanel {
        tab: tab.clone(),
        shelf: shelf.clone(),
        sequence: (*video_sequence).clone(),
    };

    let on_search = {
        let channel = channel.clone();
        let session = session.clone();
        let loading = loading.clone();
        let search_sequence = (*search_sequence).clone();
        let panel = panel.clone();

        Callback::from(move |request: SearchRequest| {
            let ticket = search_sequence.issue();
            // Video lists still in flight belong to the previous channel.
            panel.sequence.invalidate();
            loading.set(true);

            let channel = channel.clone();
            let session = session.clone();
            let loading = loading.clone();
            let search_sequence = search_sequence.clone();
            let panel = panel.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = execute_search(&request, layout.payload_shape()).await;
                let update = apply_search(layout, search_sequence.is_current(ticket), result);
                if matches!(update, SearchUpdate::Stale) {
                    log::debug!(
                        "Dropping stale search result for '{}'",
                        request.channel_input
                    );
                    return;
                }
                loading.set(false);

                match update {
                    SearchUpdate::Show {
                        view,
                        channel_id,
                        shelf,
                    } => {
                        log::info!("Displaying channel {}", channel_id);
                        let current = VideoSession {
                            channel_id,
                            api_key: request.api_key.clone(),
                        };

                        channel.set(Some(view));
                        panel.shelf.dispatch(shelf);
                        panel.select(layout, &current, layout.default_category());
                        session.set(Some(current));
                    }
                    SearchUpdate::Failed(e) => report_failure(&e),
                    SearchUpdate::Stale => {}
                }
            });
        })
    };

    let on_select_tab = {
        let panel = panel.clone();
        let session = session.clone();

        Callback::from(move |category: VideoCategory| match &*session {
            Some(current) => panel.select(layout, current, category),
            None => log::warn!("Tab {} selected before any channel", category.tag()),
        })
    };

    let visible_videos = shelf.visible(*tab).map(|videos| videos.to_vec());

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-3xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { CONFIG.app_name.clone() }
                </h1>

                <SearchForm
                    loading={*loading}
                    collect_openai_key={layout.collects_openai_key()}
                    on_search={on_search}
                />

                {
                    if let Some(view) = &*channel {
                        html! {
                            <div id="result">
                                <ChannelCard view={view.clone()} />
                                <VideoTabs active={*tab} on_select={on_select_tab} />
                                <VideoList videos={visible_videos} failed={shelf.is_failed()} />
                            </div>
                        }
                    } else {
                        html! { <div id="result" class="hidden"></div> }
                    }
                }
            </div>
        </div>
    }
}
