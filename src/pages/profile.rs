//! Profile page: notification preference and saved-list housekeeping.

use leptos::prelude::*;

use crate::app::AppSaveSync;
use crate::state::ui::UiState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let sync = expect_context::<AppSaveSync>();

    let saved_count = {
        let sync = sync.clone();
        move || {
            ui.with(|u| u.saved_revision);
            sync.store().count()
        }
    };

    let toggle_class = move || {
        if ui.with(|u| u.notifications_enabled) { "toggle-btn on" } else { "toggle-btn off" }
    };

    let on_clear = move |_| {
        let outcome = sync.store().clear();
        if outcome.is_ok() {
            ui.update(UiState::bump_saved_revision);
        }
        sync.notify(outcome.message(), outcome.kind());
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <section class="profile-page__section">
                <h2>"Preferences"</h2>
                <button
                    class=toggle_class
                    on:click=move |_| ui.update(|u| u.notifications_enabled = !u.notifications_enabled)
                >
                    {move || ui.with(UiState::notifications_label)}
                </button>
            </section>
            <section class="profile-page__section">
                <h2>"Saved Movies"</h2>
                <p class="profile-page__count">{move || format!("{} saved", saved_count())}</p>
                <button class="btn btn--danger" on:click=on_clear>"Clear saved movies"</button>
            </section>
        </div>
    }
}
