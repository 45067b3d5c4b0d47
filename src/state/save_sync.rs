//! Keeps rendered movie cards in step with the saved-movie store.
//!
//! DESIGN
//! ======
//! Each card carries an [`Affordance`] value instead of a swappable click
//! handler. The one click handler dispatches on that value, so the action a
//! click triggers always matches the store membership observed by the last
//! completed mutation.
//!
//! A [`CardList`] is the set of cards one section renders. In the
//! [`ListView::Saved`] view, a successful removal also drops the card from the
//! list, and an emptied list reports the "no saved movies" placeholder.

#[cfg(test)]
#[path = "save_sync_test.rs"]
mod save_sync_test;

use super::notifications::NotificationKind;
use super::saved::{SavedStore, StoreOutcome};
use crate::net::types::MovieRecord;

pub const EMPTY_SAVED_PLACEHOLDER: &str =
    "No saved movies yet. Start saving movies by clicking the heart button on any movie!";
pub const EMPTY_BROWSE_PLACEHOLDER: &str = "No movies to display";

/// Sink for user-facing status banners.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Visible save state of a card's save button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affordance {
    #[default]
    Unsaved,
    Saved,
}

/// What clicking the save button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffordanceAction {
    Save,
    Remove,
}

impl Affordance {
    pub fn from_saved(saved: bool) -> Self {
        if saved { Self::Saved } else { Self::Unsaved }
    }

    pub fn is_saved(self) -> bool {
        self == Self::Saved
    }

    pub fn action(self) -> AffordanceAction {
        match self {
            Self::Unsaved => AffordanceAction::Save,
            Self::Saved => AffordanceAction::Remove,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unsaved => "🤍 Save",
            Self::Saved => "❤️ Saved",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Unsaved => "save-btn",
            Self::Saved => "save-btn saved",
        }
    }
}

/// Which kind of section a card list is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// Catalog listings (popular, top rated, search results).
    #[default]
    Browse,
    /// The saved-movies view; removed movies leave the list.
    Saved,
}

/// A rendered movie card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    pub movie: MovieRecord,
    pub affordance: Affordance,
}

/// Cards rendered by one section, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardList {
    view: ListView,
    cards: Vec<CardState>,
}

impl CardList {
    /// Unbound cards for `movies`; call [`SaveSync::bind_list`] before display.
    pub fn new(view: ListView, movies: Vec<MovieRecord>) -> Self {
        let cards = movies
            .into_iter()
            .map(|movie| CardState { movie, affordance: Affordance::Unsaved })
            .collect();
        Self { view, cards }
    }

    pub fn view(&self) -> ListView {
        self.view
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: i64) -> Option<&CardState> {
        self.cards.iter().find(|c| c.movie.id == id)
    }

    pub fn affordance(&self, id: i64) -> Option<Affordance> {
        self.card(id).map(|c| c.affordance)
    }

    /// Movies still shown, in display order.
    pub fn movies(&self) -> Vec<MovieRecord> {
        self.cards.iter().map(|c| c.movie.clone()).collect()
    }

    /// Text to show instead of cards when the list is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        if !self.cards.is_empty() {
            return None;
        }
        Some(match self.view {
            ListView::Saved => EMPTY_SAVED_PLACEHOLDER,
            ListView::Browse => EMPTY_BROWSE_PLACEHOLDER,
        })
    }

    fn card_mut(&mut self, id: i64) -> Option<&mut CardState> {
        self.cards.iter_mut().find(|c| c.movie.id == id)
    }

    fn drop_card(&mut self, id: i64) {
        self.cards.retain(|c| c.movie.id != id);
    }
}

/// Binds cards to a [`SavedStore`] and reports outcomes through a [`Notifier`].
#[derive(Clone, Debug)]
pub struct SaveSync<N> {
    store: SavedStore,
    notifier: N,
}

impl<N: Notifier> SaveSync<N> {
    pub fn new(store: SavedStore, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &SavedStore {
        &self.store
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifier.notify(message, kind);
    }

    /// Set the card's affordance from current store membership.
    pub fn bind_initial_state(&self, card: &mut CardState) {
        card.affordance = Affordance::from_saved(self.store.is_saved(card.movie.id));
    }

    /// Build a card list for `movies` with each card bound to its initial state.
    pub fn card_list(&self, view: ListView, movies: Vec<MovieRecord>) -> CardList {
        let mut list = CardList::new(view, movies);
        for card in &mut list.cards {
            self.bind_initial_state(card);
        }
        list
    }

    /// Rebind every card in `list` against one snapshot of the store.
    ///
    /// In the saved view, cards whose movie is no longer saved are dropped.
    pub fn bind_list(&self, list: &mut CardList) {
        let saved: Vec<i64> = self.store.get_all().iter().map(|m| m.id).collect();
        for card in &mut list.cards {
            card.affordance = Affordance::from_saved(saved.contains(&card.movie.id));
        }
        if list.view == ListView::Saved {
            list.cards.retain(|c| c.affordance.is_saved());
        }
    }

    /// Handle a click on the save button of card `id`.
    ///
    /// Returns `None` when `list` has no such card.
    pub fn on_affordance_clicked(&self, list: &mut CardList, id: i64) -> Option<StoreOutcome> {
        match list.affordance(id)?.action() {
            AffordanceAction::Save => self.on_save_requested(list, id),
            AffordanceAction::Remove => self.on_remove_requested(list, id),
        }
    }

    /// Save the movie bound to card `id`.
    ///
    /// Afterwards the card's affordance reflects store membership, whatever
    /// the outcome.
    pub fn on_save_requested(&self, list: &mut CardList, id: i64) -> Option<StoreOutcome> {
        let card = list.card_mut(id)?;
        let outcome = self.store.save(&card.movie);
        card.affordance = match outcome {
            StoreOutcome::Saved | StoreOutcome::AlreadySaved => Affordance::Saved,
            _ => Affordance::from_saved(self.store.is_saved(id)),
        };
        self.notifier.notify(outcome.message(), outcome.kind());
        Some(outcome)
    }

    /// Remove the movie bound to card `id`.
    ///
    /// Afterwards the card's affordance reflects store membership. In the
    /// saved view a successful removal also drops the card from the list; a
    /// failed one leaves it in place.
    pub fn on_remove_requested(&self, list: &mut CardList, id: i64) -> Option<StoreOutcome> {
        let card = list.card_mut(id)?;
        let outcome = self.store.remove(id);
        card.affordance = match outcome {
            StoreOutcome::Removed | StoreOutcome::NotFound => Affordance::Unsaved,
            _ => Affordance::from_saved(self.store.is_saved(id)),
        };
        if outcome.is_ok() && list.view == ListView::Saved {
            list.drop_card(id);
        }
        self.notifier.notify(outcome.message(), outcome.kind());
        Some(outcome)
    }
}
