//! Home page: popular and top-rated shelves plus title search.

use leptos::prelude::*;

use crate::app::AppSaveSync;
use crate::components::movie_section::{MovieSection, SectionLayout, SectionMessage};
use crate::net::catalog::CatalogClient;
use crate::state::catalog::{SHELF_LIMIT, SectionFeed, section_feed};
use crate::state::notifications::NotificationKind;
use crate::state::search::{SearchSettlement, SearchState, settle, validate_query};

const POPULAR_TITLE: &str = "Popular Movies";
const TOP_RATED_TITLE: &str = "Top Rated";

#[component]
pub fn HomePage() -> impl IntoView {
    let sync = expect_context::<AppSaveSync>();
    let catalog = expect_context::<CatalogClient>();

    let popular = LocalResource::new({
        let catalog = catalog.clone();
        move || {
            let catalog = catalog.clone();
            async move { section_feed(catalog.popular().await, SHELF_LIMIT, "popular movies") }
        }
    });
    let top_rated = LocalResource::new({
        let catalog = catalog.clone();
        move || {
            let catalog = catalog.clone();
            async move { section_feed(catalog.top_rated().await, SHELF_LIMIT, "recommended movies") }
        }
    });

    let query = RwSignal::new(String::new());
    let search = RwSignal::new(SearchState::default());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if search.with(|s| s.pending) {
            return;
        }
        let q = match validate_query(&query.get()) {
            Ok(q) => q,
            Err(message) => {
                sync.notify(message, NotificationKind::Info);
                return;
            }
        };
        let mut generation = 0;
        search.update(|s| generation = s.begin());

        #[cfg(feature = "csr")]
        {
            let catalog = catalog.clone();
            let sync = sync.clone();
            leptos::task::spawn_local(async move {
                let result = catalog.search(&q).await;
                apply_settlement(generation, settle(q, result), search, &sync);
            });
        }

        #[cfg(not(feature = "csr"))]
        apply_settlement(
            generation,
            settle(q, Err(crate::net::catalog::CatalogError::Unavailable)),
            search,
            &sync,
        );
    };

    let on_back = move |_| {
        search.update(SearchState::reset);
        query.set(String::new());
    };

    view! {
        <div class="home-page">
            <form class="search-bar" on:submit=on_search>
                <input
                    class="search-bar__input"
                    type="text"
                    placeholder="Search for a movie..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="search-bar__button" type="submit" disabled=move || search.with(|s| s.pending)>
                    "Search"
                </button>
            </form>

            <Show when=move || search.with(|s| s.is_active() || s.pending)>
                <button class="btn btn--back" on:click=on_back>"Back to Popular Movies"</button>
            </Show>

            <Show
                when=move || search.with(|s| s.loading_line().is_none())
                fallback=move || {
                    view! {
                        <p class="movie-section__loading">
                            {move || search.with(|s| s.loading_line().unwrap_or_default())}
                        </p>
                    }
                }
            >
                <Show
                    when=move || search.with(SearchState::is_active)
                    fallback=move || {
                        view! {
                            <Suspense fallback=move || view! { <p class="movie-section__loading">"Loading..."</p> }>
                                {move || popular.get().map(|feed| render_feed(POPULAR_TITLE, feed))}
                            </Suspense>
                        }
                    }
                >
                    {move || {
                        let state = search.get();
                        view! {
                            <MovieSection
                                title=state.heading().unwrap_or_default()
                                movies=state.results
                                layout=SectionLayout::Grid
                            />
                        }
                    }}
                </Show>
            </Show>

            <Suspense fallback=move || view! { <p class="movie-section__loading">"Loading..."</p> }>
                {move || top_rated.get().map(|feed| render_feed(TOP_RATED_TITLE, feed))}
            </Suspense>
        </div>
    }
}

fn render_feed(title: &'static str, feed: SectionFeed) -> AnyView {
    match feed {
        SectionFeed::Movies(movies) => view! { <MovieSection title=title movies=movies/> }.into_any(),
        SectionFeed::Message(message) => view! { <SectionMessage title=title message=message/> }.into_any(),
    }
}

fn apply_settlement(
    generation: u64,
    settlement: SearchSettlement,
    search: RwSignal<SearchState>,
    sync: &AppSaveSync,
) {
    // The page may have unmounted while the request was in flight.
    let Some(note) = search.try_update(|s| s.apply(generation, settlement)) else {
        return;
    };
    if let Some((message, kind)) = note {
        sync.notify(&message, kind);
    }
}
