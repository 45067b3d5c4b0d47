//! Saved movies page.

use leptos::prelude::*;

use crate::app::AppSaveSync;
use crate::components::movie_section::{MovieSection, SectionLayout};
use crate::state::save_sync::ListView;

/// Grid of every saved movie. Removing one drops its card in place.
#[component]
pub fn SavedPage() -> impl IntoView {
    let sync = expect_context::<AppSaveSync>();
    let movies = sync.store().get_all();
    log::debug!("rendering {} saved movies", movies.len());

    view! {
        <div class="saved-page">
            <a class="btn btn--back" href="/">"← Back to Home"</a>
            <MovieSection
                title="My Saved Movies"
                movies=movies
                view=ListView::Saved
                layout=SectionLayout::Grid
            />
        </div>
    }
}
