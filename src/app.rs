//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notification_stack::{NotificationStack, Toaster};
use crate::config::AppConfig;
use crate::net::catalog::CatalogClient;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, saved::SavedPage};
use crate::state::notifications::NotificationsState;
use crate::state::save_sync::SaveSync;
use crate::state::saved::SavedStore;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Save/remove coordinator shared by every movie card.
pub type AppSaveSync = SaveSync<Toaster>;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();

    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let store = SavedStore::new(Arc::new(BrowserStorage), config.saved_key.clone());
    let sync: AppSaveSync = SaveSync::new(store, Toaster::new(notifications, ui));
    let catalog = CatalogClient::new(config.catalog.clone());

    provide_context(ui);
    provide_context(notifications);
    provide_context(sync);
    provide_context(catalog);
    provide_context(config);

    view! {
        <Stylesheet id="moviebox" href="/style/main.css"/>
        <Title text="MovieBox"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("saved") view=SavedPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
        <NotificationStack/>
    }
}
