//! Transient status banners.
//!
//! Banners stack in arrival order. Each one is dismissed by its own timer
//! (see `components::notification_stack::Toaster`); a newer banner never
//! cancels an older one.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a banner stays on screen.
pub const NOTIFICATION_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
            Self::Info => "notification notification-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Banners currently on screen.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Add a banner and return its id for later dismissal.
    pub fn push(&mut self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, message: message.to_owned(), kind });
        id
    }

    /// Remove the banner with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
