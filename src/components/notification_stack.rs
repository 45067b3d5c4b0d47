//! Transient status banners raised by save, remove, and search flows.

use leptos::prelude::*;

use crate::state::notifications::{NOTIFICATION_DURATION_MS, NotificationKind, NotificationsState};
use crate::state::save_sync::Notifier;
use crate::state::ui::UiState;

/// [`Notifier`] that pushes banners into the shared notifications signal.
///
/// Each banner dismisses itself after [`NOTIFICATION_DURATION_MS`]. With the
/// notifications preference off, success and info messages are only logged.
#[derive(Clone, Copy, Debug)]
pub struct Toaster {
    notifications: RwSignal<NotificationsState>,
    ui: RwSignal<UiState>,
}

impl Toaster {
    pub fn new(notifications: RwSignal<NotificationsState>, ui: RwSignal<UiState>) -> Self {
        Self { notifications, ui }
    }
}

impl Notifier for Toaster {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let enabled = self.ui.with_untracked(|ui| ui.notifications_enabled);
        if !enabled && kind != NotificationKind::Error {
            log::info!("notification suppressed: {message}");
            return;
        }

        let mut id = 0;
        self.notifications.update(|n| id = n.push(message, kind));

        #[cfg(feature = "csr")]
        {
            let notifications = self.notifications;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTIFICATION_DURATION_MS).await;
                if notifications.try_update(|n| n.dismiss(id)).is_none() {
                    log::debug!("notification {id} outlived its owner");
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        log::debug!("notification {id} shown for {NOTIFICATION_DURATION_MS}ms");
    }
}

/// Fixed-position stack of active banners.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div
                            class=n.kind.class()
                            on:click=move |_| notifications.update(|s| s.dismiss(id))
                        >
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
