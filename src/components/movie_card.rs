//! Poster card for one movie with its save/remove button.

use leptos::prelude::*;

use crate::app::AppSaveSync;
use crate::net::catalog::CatalogClient;
use crate::net::types::MovieRecord;
use crate::state::save_sync::CardList;
use crate::state::saved::StoreOutcome;
use crate::state::ui::UiState;

/// A movie card bound to the section list that owns it.
///
/// The button reads its label and class from the card's affordance in
/// `list`, so it always reflects the last completed save or remove.
#[component]
pub fn MovieCard(movie: MovieRecord, list: RwSignal<CardList>) -> impl IntoView {
    let sync = expect_context::<AppSaveSync>();
    let catalog = expect_context::<CatalogClient>();
    let ui = expect_context::<RwSignal<UiState>>();

    let id = movie.id;
    let poster = catalog.poster_url(&movie);
    let affordance = move || list.with(|l| l.affordance(id).unwrap_or_default());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let mut outcome = None;
        list.update(|l| outcome = sync.on_affordance_clicked(l, id));
        if outcome.is_some_and(StoreOutcome::is_ok) {
            ui.update(UiState::bump_saved_revision);
        }
    };

    view! {
        <div class="movie-card">
            <img class="movie-card__poster" src=poster alt=movie.title.clone() loading="lazy"/>
            <div class="movie-card__info">
                <h3 class="movie-card__title">{movie.title.clone()}</h3>
                <p class="movie-card__meta">
                    <span class="movie-card__year">{movie.year().to_owned()}</span>
                    <span class="movie-card__rating">{format!("⭐ {}", movie.rating_label())}</span>
                </p>
                <p class="movie-card__overview">{movie.overview_text().to_owned()}</p>
                <button class=move || affordance().class() on:click=on_click>
                    {move || affordance().label()}
                </button>
            </div>
        </div>
    }
}
