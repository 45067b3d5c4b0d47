use super::*;
use crate::util::storage::MemoryStorage;

const KEY: &str = "savedMovies";

fn fixed_time() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_714_557_600).expect("timestamp")
}

fn store_on(storage: Arc<MemoryStorage>) -> SavedStore {
    SavedStore::new(storage, KEY).with_clock(fixed_time)
}

fn store() -> (SavedStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (store_on(storage.clone()), storage)
}

fn movie(id: i64) -> MovieRecord {
    MovieRecord {
        id,
        title: format!("Movie {id}"),
        poster_path: Some(format!("/poster-{id}.jpg")),
        overview: Some("Overview".to_owned()),
        release_date: Some("2019-05-30".to_owned()),
        vote_average: 7.5,
        saved_at: None,
    }
}

// =============================================================
// getAll
// =============================================================

#[test]
fn get_all_is_empty_when_key_absent() {
    let (store, _) = store();
    assert!(store.get_all().is_empty());
    assert_eq!(store.count(), 0);
}

#[test]
fn get_all_treats_corrupt_blob_as_empty() {
    let (store, storage) = store();
    storage.set_item(KEY, "{not json").expect("seed");
    assert!(store.get_all().is_empty());
    assert!(!store.is_saved(1));
}

#[test]
fn get_all_treats_wrong_shape_as_empty() {
    let (store, storage) = store();
    storage.set_item(KEY, r#"{"id": 1, "title": "not an array"}"#).expect("seed");
    assert!(store.get_all().is_empty());
}

#[test]
fn get_all_keeps_first_of_repeated_ids() {
    let (store, storage) = store();
    storage
        .set_item(KEY, r#"[{"id":1,"title":"First"},{"id":2,"title":"Two"},{"id":1,"title":"Again"}]"#)
        .expect("seed");
    let movies = store.get_all();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "First");
}

#[test]
fn get_all_reads_blob_written_by_older_client() {
    let (store, storage) = store();
    storage
        .set_item(
            KEY,
            r#"[{"id":9,"title":"Nine","poster_path":"","overview":"","release_date":"","vote_average":6.1,"savedAt":"2024-01-02T03:04:05.678Z"}]"#,
        )
        .expect("seed");
    let movies = store.get_all();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].year(), "N/A");
    assert!(movies[0].saved_at.is_some());
}

#[cfg(not(feature = "csr"))]
#[test]
fn get_all_is_empty_when_backend_unavailable() {
    let store = SavedStore::new(Arc::new(crate::util::storage::BrowserStorage), KEY);
    assert!(store.get_all().is_empty());
}

// =============================================================
// save
// =============================================================

#[test]
fn save_round_trips_all_fields_plus_saved_at() {
    let (store, _) = store();
    let m = movie(42);
    assert_eq!(store.save(&m), StoreOutcome::Saved);

    let saved = store.get_all();
    assert_eq!(saved.len(), 1);
    let stored = &saved[0];
    assert_eq!(stored.id, m.id);
    assert_eq!(stored.title, m.title);
    assert_eq!(stored.poster_path, m.poster_path);
    assert_eq!(stored.overview, m.overview);
    assert_eq!(stored.release_date, m.release_date);
    assert!((stored.vote_average - m.vote_average).abs() < f64::EPSILON);
    assert_eq!(stored.saved_at, Some(fixed_time()));
}

/// Deterministic xorshift ratings spread over `[0, 10)`.
fn spread_ratings(n: usize) -> Vec<f64> {
    let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x >> 11) as f64 / (1u64 << 53) as f64 * 10.0
        })
        .collect()
}

#[test]
fn save_keeps_full_precision_ratings() {
    let (store, _) = store();
    // Values whose shortest decimal form needs all 17 significant digits.
    let mut ratings = vec![1.754_621_790_330_662_7, 0.1 + 0.2, 9.999_999_999_999_998, 6.02e-7];
    ratings.extend(spread_ratings(300));

    for (id, rating) in (1..).zip(&ratings) {
        let m = MovieRecord { vote_average: *rating, ..movie(id) };
        assert_eq!(store.save(&m), StoreOutcome::Saved);
    }

    let stored: Vec<f64> = store.get_all().iter().map(|m| m.vote_average).collect();
    assert_eq!(stored.len(), ratings.len());
    for (got, want) in stored.iter().zip(&ratings) {
        assert_eq!(got.to_bits(), want.to_bits(), "rating {want} came back as {got}");
    }
}

#[test]
fn save_ignores_caller_supplied_saved_at() {
    let (store, _) = store();
    let mut m = movie(5);
    m.saved_at = Some(OffsetDateTime::UNIX_EPOCH);
    store.save(&m);
    assert_eq!(store.get_all()[0].saved_at, Some(fixed_time()));
}

#[test]
fn duplicate_save_is_rejected_without_mutation() {
    let (store, storage) = store();
    assert!(store.save(&movie(42)).is_ok());
    let blob_before = storage.get_item(KEY).expect("read");

    let second = store.save(&movie(42));
    assert_eq!(second, StoreOutcome::AlreadySaved);
    assert!(!second.is_ok());
    assert_eq!(second.message(), "Movie is already saved!");
    assert_eq!(store.count(), 1);
    assert_eq!(storage.get_item(KEY).expect("read"), blob_before);
}

#[test]
fn repeated_saves_never_duplicate_ids() {
    let (store, _) = store();
    for id in [3, 1, 3, 2, 1, 1, 4, 2] {
        store.save(&movie(id));
    }
    let ids: Vec<i64> = store.get_all().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);
}

#[test]
fn save_preserves_insertion_order() {
    let (store, _) = store();
    store.save(&movie(10));
    store.save(&movie(2));
    store.save(&movie(7));
    let ids: Vec<i64> = store.get_all().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![10, 2, 7]);
}

#[test]
fn save_reports_write_failure_and_keeps_prior_state() {
    let storage = Arc::new(MemoryStorage::with_quota(400));
    let store = store_on(storage.clone());
    assert_eq!(store.save(&movie(1)), StoreOutcome::Saved);

    let mut big = movie(2);
    big.overview = Some("x".repeat(1_000));
    let outcome = store.save(&big);
    assert_eq!(outcome, StoreOutcome::SaveFailed);
    assert_eq!(outcome.message(), "Error saving movie. Please try again.");
    assert_eq!(outcome.kind(), NotificationKind::Error);

    let ids: Vec<i64> = store.get_all().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn save_rejects_invalid_record() {
    let (store, _) = store();
    let mut m = movie(3);
    m.title = String::new();
    assert_eq!(store.save(&m), StoreOutcome::SaveFailed);
    assert_eq!(store.count(), 0);
}

#[test]
fn save_over_corrupt_blob_starts_fresh() {
    let (store, storage) = store();
    storage.set_item(KEY, "garbage").expect("seed");
    assert_eq!(store.save(&movie(8)), StoreOutcome::Saved);
    assert_eq!(store.count(), 1);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_missing_id_reports_not_found() {
    let (store, _) = store();
    store.save(&movie(1));
    let outcome = store.remove(99);
    assert_eq!(outcome, StoreOutcome::NotFound);
    assert_eq!(outcome.message(), "Movie not found in saved list!");
    assert_eq!(store.count(), 1);
}

#[test]
fn remove_present_id_succeeds_and_unsaves() {
    let (store, _) = store();
    store.save(&movie(1));
    store.save(&movie(2));
    let outcome = store.remove(1);
    assert_eq!(outcome, StoreOutcome::Removed);
    assert_eq!(outcome.message(), "Movie removed from saved list!");
    assert!(!store.is_saved(1));
    assert!(store.is_saved(2));
}

#[test]
fn remove_last_movie_leaves_empty_array() {
    let (store, storage) = store();
    store.save(&movie(1));
    store.remove(1);
    assert_eq!(storage.get_item(KEY).expect("read"), Some("[]".to_owned()));
    assert_eq!(store.count(), 0);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_deletes_the_key() {
    let (store, storage) = store();
    store.save(&movie(1));
    let outcome = store.clear();
    assert_eq!(outcome, StoreOutcome::Cleared);
    assert_eq!(outcome.kind(), NotificationKind::Success);
    assert_eq!(storage.get_item(KEY).expect("read"), None);
    assert_eq!(store.count(), 0);
}

#[cfg(not(feature = "csr"))]
#[test]
fn clear_reports_backend_failure() {
    let store = SavedStore::new(Arc::new(crate::util::storage::BrowserStorage), KEY);
    let outcome = store.clear();
    assert_eq!(outcome, StoreOutcome::ClearFailed);
    assert_eq!(outcome.message(), "Error clearing saved movies.");
}

// =============================================================
// Sharing
// =============================================================

#[test]
fn clones_share_the_same_collection() {
    let (store, _) = store();
    let other = store.clone();
    store.save(&movie(1));
    assert!(other.is_saved(1));
    assert_eq!(other.key(), KEY);
}
