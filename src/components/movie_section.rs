//! A titled group of movie cards (home shelves, search results, saved grid).

use leptos::prelude::*;

use crate::app::AppSaveSync;
use crate::components::movie_card::MovieCard;
use crate::net::types::MovieRecord;
use crate::state::save_sync::{CardList, ListView};
use crate::state::ui::UiState;

/// How a section arranges its cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionLayout {
    /// Horizontally scrolling row.
    #[default]
    Shelf,
    Grid,
}

impl SectionLayout {
    fn class(self) -> &'static str {
        match self {
            Self::Shelf => "movie-section__cards movie-section__cards--shelf",
            Self::Grid => "movie-section__cards movie-section__cards--grid",
        }
    }
}

/// Renders `movies` as cards bound to the saved store.
///
/// The section rebinds every card whenever another section changes the
/// saved list, so the same movie shown twice never disagrees with itself.
#[component]
pub fn MovieSection(
    #[prop(into)] title: String,
    movies: Vec<MovieRecord>,
    #[prop(optional)] view: ListView,
    #[prop(optional)] layout: SectionLayout,
) -> impl IntoView {
    let sync = expect_context::<AppSaveSync>();
    let ui = expect_context::<RwSignal<UiState>>();

    let list = RwSignal::new(sync.card_list(view, movies));

    Effect::new(move |prev: Option<u64>| {
        let revision = ui.with(|u| u.saved_revision);
        if prev.is_some_and(|p| p != revision) {
            list.update(|l| sync.bind_list(l));
        }
        revision
    });

    let is_empty = move || list.with(CardList::is_empty);
    let placeholder = move || list.with(|l| l.placeholder().unwrap_or_default());

    view! {
        <section class="movie-section">
            <h2 class="movie-section__title">{title}</h2>
            <Show
                when=move || !is_empty()
                fallback=move || view! { <p class="movie-section__empty">{placeholder}</p> }
            >
                <div class=layout.class()>
                    <For
                        each=move || list.with(CardList::movies)
                        key=|m| m.id
                        children=move |movie| view! { <MovieCard movie=movie list=list/> }
                    />
                </div>
            </Show>
        </section>
    }
}

/// Inline message shown where a section's cards would be.
#[component]
pub fn SectionMessage(#[prop(into)] title: String, message: String) -> impl IntoView {
    view! {
        <section class="movie-section">
            <h2 class="movie-section__title">{title}</h2>
            <p class="movie-section__empty">{message}</p>
        </section>
    }
}
