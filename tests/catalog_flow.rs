// tests/catalog_flow.rs
//
// End-to-end flows against the bundled catalog in data/.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use movieshelf::app::{bootstrap, build_state, BundleConfig};
use movieshelf::application::{DetailView, NavigationIntent, NavigationLog, Session, UserIntent};
use movieshelf::{AppError, AppState, CatalogBundle, Movie};

fn bundled_config() -> BundleConfig {
    BundleConfig {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        ..BundleConfig::default()
    }
}

fn boot() -> (AppState, NavigationLog) {
    let navigation = NavigationLog::new();
    let state = bootstrap(&bundled_config(), Arc::new(navigation.clone())).unwrap();
    (state, navigation)
}

fn names(movies: &[Movie]) -> Vec<String> {
    movies.iter().map(|m| m.name.clone()).collect()
}

#[test]
fn test_seed_is_first_five_of_catalog_in_order() {
    let (state, _) = boot();

    let catalog = state.store.catalog().movies().to_vec();
    assert_eq!(catalog.len(), 9);

    let displayed = state.store.displayed();
    assert_eq!(displayed, catalog[..5].to_vec());
}

#[test]
fn test_available_is_remaining_four_sorted() {
    let (state, _) = boot();

    assert_eq!(
        names(&state.store.available()),
        vec!["Fight Club", "Inception", "Interstellar", "The Matrix"]
    );
}

#[test]
fn test_add_first_available_then_batch_delete() {
    let (state, navigation) = boot();
    let mut session = Session::new(&state);

    let prior_ids: HashSet<String> = state
        .store
        .catalog()
        .movies()
        .iter()
        .map(|m| m.id.clone())
        .collect();

    session.dispatch(UserIntent::OpenAddFlow).unwrap();
    session.dispatch(UserIntent::ConfirmAdd).unwrap();

    let displayed = state.store.displayed();
    assert_eq!(displayed.len(), 6);
    assert_eq!(state.store.available().len(), 3);

    let added = displayed.last().unwrap();
    assert_eq!(added.name, "Fight Club");
    assert!(!prior_ids.contains(&added.id));
    assert_eq!(
        navigation.intents(),
        vec![NavigationIntent::ShowAddFlow, NavigationIntent::Back]
    );

    session
        .dispatch(UserIntent::DeleteAtOffsets {
            offsets: BTreeSet::from([2, 0]),
        })
        .unwrap();

    assert_eq!(
        names(&state.store.displayed()),
        vec!["The Godfather", "Pulp Fiction", "Forrest Gump", "Fight Club"]
    );
}

#[test]
fn test_favorite_toggle_is_shared_between_list_and_detail() {
    let (state, _) = boot();
    let mut session = Session::new(&state);

    session
        .dispatch(UserIntent::SelectMovie {
            movie_id: "3".to_string(),
        })
        .unwrap();
    session.dispatch(UserIntent::ToggleFavorite).unwrap();

    let in_list = state.store.item_at("3").unwrap().get().unwrap();
    assert!(in_list.is_favorite);

    match session.detail().unwrap().view() {
        DetailView::Movie(dto) => assert!(dto.is_favorite),
        other => panic!("expected movie, got {:?}", other),
    }
}

#[test]
fn test_unknown_movie_shows_fallback() {
    let (state, _) = boot();

    assert!(matches!(
        state.store.item_at("does-not-exist"),
        Err(AppError::MovieNotFound(_))
    ));

    let mut session = Session::new(&state);
    session
        .dispatch(UserIntent::SelectMovie {
            movie_id: "does-not-exist".to_string(),
        })
        .unwrap();

    match session.detail().unwrap().view() {
        DetailView::NotFound(response) => assert_eq!(response.message, "Movie not found"),
        other => panic!("expected fallback, got {:?}", other),
    }
}

#[test]
fn test_available_never_contains_displayed_titles() {
    let (state, _) = boot();
    let mut session = Session::new(&state);

    for _ in 0..4 {
        session.dispatch(UserIntent::OpenAddFlow).unwrap();
        session.dispatch(UserIntent::ConfirmAdd).unwrap();

        let shown: HashSet<String> = state
            .store
            .displayed()
            .iter()
            .map(|m| m.name.to_lowercase())
            .collect();
        let available = state.store.available();

        assert!(available
            .iter()
            .all(|m| !shown.contains(&m.name.to_lowercase())));
        assert!(available.windows(2).all(|w| w[0].name < w[1].name));
    }

    // Every title is shown now; the add flow has nothing to offer
    session.dispatch(UserIntent::OpenAddFlow).unwrap();
    assert!(session.add_flow().unwrap().selected().is_none());
    session.dispatch(UserIntent::ConfirmAdd).unwrap();
    assert_eq!(state.store.len(), 9);
}

#[test]
fn test_empty_seed_makes_whole_catalog_available() {
    let catalog = vec![
        Movie::new("Zodiac".to_string(), String::new(), String::new()),
        Movie::new("Amélie".to_string(), String::new(), String::new()),
    ];
    let state = build_state(
        CatalogBundle {
            catalog: catalog.clone(),
            seed: Vec::new(),
        },
        Arc::new(NavigationLog::new()),
    );

    assert_eq!(names(&state.store.available()), vec!["Amélie", "Zodiac"]);
}

#[test]
fn test_single_move_round_trip_restores_order() {
    let (state, _) = boot();
    let original = state.store.displayed();

    for (from, to) in [(0, 3), (4, 1), (2, 2), (1, 4)] {
        state.store.move_items(&BTreeSet::from([from]), to);
        state.store.move_items(&BTreeSet::from([to]), from);
        assert_eq!(state.store.displayed(), original);
    }
}
