//! Top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::AppSaveSync;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let sync = expect_context::<AppSaveSync>();
    let location = use_location();

    // Close the menu whenever the route changes.
    Effect::new(move || {
        location.pathname.track();
        ui.update(UiState::close_mobile_menu);
    });

    let saved_count = move || {
        ui.with(|u| u.saved_revision);
        sync.store().count()
    };
    let menu_class = move || {
        if ui.with(|u| u.mobile_menu_open) { "nav-bar__links nav-bar__links--open" } else { "nav-bar__links" }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"🎬 MovieBox"</a>
            <button
                class="nav-bar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_mobile_menu)
            >
                "☰"
            </button>
            <ul class=menu_class>
                <li><a href="/">"Home"</a></li>
                <li>
                    <a href="/saved">
                        "Saved "
                        <span class="nav-bar__count">{move || format!("({})", saved_count())}</span>
                    </a>
                </li>
                <li><a href="/profile">"Profile"</a></li>
                <li><a href="/login" class="nav-bar__logout">"Logout"</a></li>
            </ul>
        </nav>
    }
}
