use super::*;

fn movies(n: i64) -> Vec<MovieRecord> {
    (1..=n)
        .map(|id| MovieRecord {
            id,
            title: format!("Alien {id}"),
            poster_path: None,
            overview: None,
            release_date: None,
            vote_average: 7.0,
            saved_at: None,
        })
        .collect()
}

// =============================================================
// validate_query
// =============================================================

#[test]
fn validate_query_trims_input() {
    assert_eq!(validate_query("  alien  "), Ok("alien".to_owned()));
}

#[test]
fn validate_query_rejects_blank() {
    assert_eq!(validate_query("   "), Err(EMPTY_QUERY_MESSAGE));
    assert_eq!(validate_query(""), Err("Please enter a movie title to search"));
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_shows_at_most_twelve_results() {
    let SearchSettlement::Show { query, results } = settle("alien".to_owned(), Ok(movies(20))) else {
        panic!("expected results");
    };
    assert_eq!(query, "alien");
    assert_eq!(results.len(), 12);
}

#[test]
fn settle_with_no_results_restores_with_info() {
    assert_eq!(
        settle("zzzz".to_owned(), Ok(Vec::new())),
        SearchSettlement::Restore { message: "No movies found for \"zzzz\"".to_owned(), kind: NotificationKind::Info }
    );
}

#[test]
fn settle_with_error_restores_with_error() {
    assert_eq!(
        settle("alien".to_owned(), Err(CatalogError::Request("offline".to_owned()))),
        SearchSettlement::Restore { message: SEARCH_FAILED_MESSAGE.to_owned(), kind: NotificationKind::Error }
    );
}

#[test]
fn search_state_default_is_inactive() {
    let state = SearchState::default();
    assert!(!state.is_active());
    assert_eq!(state.heading(), None);
}

// =============================================================
// generations
// =============================================================

#[test]
fn current_settlement_shows_results() {
    let mut state = SearchState::default();
    let generation = state.begin();
    assert!(state.pending);

    let note = state.apply(generation, settle("alien".to_owned(), Ok(movies(3))));
    assert_eq!(note, None);
    assert!(state.is_active());
    assert!(!state.pending);
    assert_eq!(state.results.len(), 3);
    assert_eq!(state.heading(), Some("Search Results for \"alien\"".to_owned()));
}

#[test]
fn current_restore_clears_and_returns_notification() {
    let mut state = SearchState::default();
    let generation = state.begin();
    let note = state.apply(generation, settle("zzzz".to_owned(), Ok(Vec::new())));
    assert_eq!(note, Some(("No movies found for \"zzzz\"".to_owned(), NotificationKind::Info)));
    assert!(!state.is_active());
    assert!(!state.pending);
}

#[test]
fn settlement_after_back_is_dropped() {
    let mut state = SearchState::default();
    let generation = state.begin();
    state.reset();
    assert!(!state.pending);

    let note = state.apply(generation, settle("alien".to_owned(), Ok(movies(3))));
    assert_eq!(note, None);
    assert!(!state.is_active());
    assert!(state.results.is_empty());
}

#[test]
fn failure_after_back_raises_nothing() {
    let mut state = SearchState::default();
    let generation = state.begin();
    state.reset();
    let note = state.apply(generation, settle("alien".to_owned(), Err(CatalogError::Status(500))));
    assert_eq!(note, None);
}

#[test]
fn older_search_finishing_late_does_not_overwrite_newer() {
    let mut state = SearchState::default();
    let first = state.begin();
    state.reset();
    let second = state.begin();
    assert!(!state.is_current(first));
    assert!(state.is_current(second));

    state.apply(second, settle("predator".to_owned(), Ok(movies(2))));
    state.apply(first, settle("alien".to_owned(), Ok(movies(5))));
    assert_eq!(state.query.as_deref(), Some("predator"));
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.generation(), second);
}

#[test]
fn loading_line_shown_only_while_pending() {
    let mut state = SearchState::default();
    assert_eq!(state.loading_line(), None);
    let generation = state.begin();
    assert_eq!(state.loading_line(), Some("Searching..."));
    state.apply(generation, settle("alien".to_owned(), Ok(movies(1))));
    assert_eq!(state.loading_line(), None);

    state.begin();
    state.reset();
    assert_eq!(state.loading_line(), None);
}
