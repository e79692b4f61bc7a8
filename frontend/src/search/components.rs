use crate::models::{SearchRequest, VideoCategory, VideoSummary};
use crate::search::tabs::TabState;
use crate::search::view::{ChannelView, VideoCardView};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchFormProps {
    pub loading: bool,
    pub collect_openai_key: bool,
    pub on_search: Callback<SearchRequest>,
}

#[derive(Properties, PartialEq)]
pub struct ChannelCardProps {
    pub view: ChannelView,
}

#[derive(Properties, PartialEq)]
pub struct VideoTabsProps {
    pub active: TabState,
    pub on_select: Callback<VideoCategory>,
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Option<Vec<VideoSummary>>,
    #[prop_or_default]
    pub failed: bool,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoSummary,
}

fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlInputElement>().value());
    })
}

#[function_component(SearchForm)]
pub fn search_form(props: &SearchFormProps) -> Html {
    let channel_input = use_state(String::new);
    let api_key = use_state(String::new);
    let openai_api_key = use_state(String::new);

    let on_submit = {
        let on_search = props.on_search.clone();
        let collect_openai_key = props.collect_openai_key;
        let channel_input = channel_input.clone();
        let api_key = api_key.clone();
        let openai_api_key = openai_api_key.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit(SearchRequest {
                channel_input: (*channel_input).clone(),
                api_key: (*api_key).clone(),
                openai_api_key: collect_openai_key.then(|| (*openai_api_key).clone()),
            });
        })
    };

    let input_class = "w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <form onsubmit={on_submit} class="space-y-3 mb-6">
            <input
                id="channel-input"
                type="text"
                class={input_class}
                placeholder="チャンネルID / URL / @ハンドル"
                value={(*channel_input).clone()}
                oninput={bind_input(&channel_input)}
            />
            <input
                id="api-key"
                type="password"
                class={input_class}
                placeholder="YouTube Data API キー"
                value={(*api_key).clone()}
                oninput={bind_input(&api_key)}
            />
            {
                if props.collect_openai_key {
                    html! {
                        <input
                            id="openai-api-key"
                            type="password"
                            class={input_class}
                            placeholder="OpenAI API キー"
                            value={(*openai_api_key).clone()}
                            oninput={bind_input(&openai_api_key)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <button
                id="search-button"
                type="submit"
                class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
            >
                { if props.loading { "検索中..." } else { "検索" } }
            </button>
        </form>
    }
}

#[function_component(ChannelCard)]
pub fn channel_card(props: &ChannelCardProps) -> Html {
    let view = &props.view;

    html! {
        <div class="mb-6">
            <div
                id="channel-header"
                class="h-32 rounded-t-lg bg-cover bg-center"
                style={view.banner_style.clone()}
                aria-hidden={if view.banner_visible() { "false" } else { "true" }}
            ></div>
            <div class="flex items-center gap-4 p-4 bg-gray-50 rounded-b-lg">
                <a id="channel-link" href={view.channel_link.clone()} target="_blank">
                    <img id="channel-icon" class="w-20 h-20 rounded-full" src={view.icon_src.clone()} alt={view.name.clone()} />
                </a>
                <div>
                    <h2 id="channel-name" class="text-2xl font-bold text-gray-800">{ &view.name }</h2>
                    <p id="channel-id" class="text-sm text-gray-500">{ &view.channel_id_text }</p>
                    {
                        if let Some(custom_url) = &view.custom_url_text {
                            html! { <p class="text-sm text-gray-500">{ custom_url }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="flex flex-wrap gap-4 p-4 text-sm text-gray-700">
                <p id="subscriber-count">{ &view.subscriber_text }</p>
                <p id="total-views">{ &view.total_views_text }</p>
                <p id="video-count">{ &view.video_count_text }</p>
                {
                    if let Some(published) = &view.published_text {
                        html! { <p id="published-at">{ published }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <p id="channel-description" class="px-4 text-gray-700 whitespace-pre-line">{ &view.description }</p>
        </div>
    }
}

#[function_component(VideoTabs)]
pub fn video_tabs(props: &VideoTabsProps) -> Html {
    html! {
        <div id="video-tabs" class="flex flex-wrap gap-2 mb-4">
            { for VideoCategory::all_variants().into_iter().map(|category| {
                let active = props.active.is_active(category);
                let onclick = {
                    let on_select = props.on_select.clone();
                    move |_: MouseEvent| on_select.emit(category)
                };
                html! {
                    <button
                        type="button"
                        data-video-type={category.tag()}
                        class={classes!(
                            "px-4", "py-2", "rounded", "text-sm",
                            if active { "active bg-blue-600 text-white" } else { "bg-gray-200 text-gray-800 hover:bg-gray-300" }
                        )}
                        {onclick}
                    >
                        { category.display_name() }
                    </button>
                }
            })}
        </div>
    }
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    match &props.videos {
        None if props.failed => html! {
            <div id="video-list">
                <p class="text-center text-gray-500">{"動画を読み込めませんでした。"}</p>
            </div>
        },
        None => html! {
            <div id="video-list">
                <p class="text-center text-gray-500">{"読み込み中..."}</p>
            </div>
        },
        Some(videos) if videos.is_empty() => html! {
            <div id="video-list">
                <p class="text-center text-gray-500">{"動画が見つかりませんでした。"}</p>
            </div>
        },
        Some(videos) => html! {
            <div id="video-list" class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { for videos.iter().map(|video| html! {
                    <VideoCard video={video.clone()} />
                })}
            </div>
        },
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let card = VideoCardView::new(&props.video);

    html! {
        <div class="video-card bg-gray-100 rounded-lg overflow-hidden">
            <a href={card.link} target="_blank" class="block hover:opacity-90">
                <img class="w-full" src={card.thumbnail} alt={card.title.clone()} />
                <h3 class="p-2 text-base font-semibold text-gray-800">{ card.title }</h3>
            </a>
            <div class="px-2 pb-2 text-sm text-gray-600">
                <p>{ card.views_text }</p>
                {
                    if let Some(comments) = card.comments_text {
                        html! { <p>{ comments }</p> }
                    } else {
                        html! {}
                    }
                }
                <p>{ card.published_text }</p>
            </div>
        </div>
    }
}
