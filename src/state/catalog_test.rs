use super::*;

fn movies(n: i64) -> Vec<MovieRecord> {
    (1..=n)
        .map(|id| MovieRecord {
            id,
            title: format!("Movie {id}"),
            poster_path: None,
            overview: None,
            release_date: None,
            vote_average: 5.0,
            saved_at: None,
        })
        .collect()
}

#[test]
fn shelf_keeps_first_eight() {
    let SectionFeed::Movies(shown) = section_feed(Ok(movies(20)), SHELF_LIMIT, "popular movies") else {
        panic!("expected movies");
    };
    assert_eq!(shown.len(), 8);
    assert_eq!(shown[0].id, 1);
    assert_eq!(shown[7].id, 8);
}

#[test]
fn short_listing_is_shown_whole() {
    let feed = section_feed(Ok(movies(3)), SEARCH_LIMIT, "search results");
    assert_eq!(feed, SectionFeed::Movies(movies(3)));
}

#[test]
fn empty_listing_reports_unable_to_load() {
    let feed = section_feed(Ok(Vec::new()), SHELF_LIMIT, "recommended movies");
    assert_eq!(feed, SectionFeed::Message("Unable to load recommended movies".to_owned()));
}

#[test]
fn failed_fetch_reports_error_inline() {
    let feed = section_feed(Err(CatalogError::Status(500)), SHELF_LIMIT, "popular movies");
    assert_eq!(feed, SectionFeed::Message("Error loading popular movies".to_owned()));
}
