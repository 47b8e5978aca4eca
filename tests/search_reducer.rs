mod common;

use common::{added, booted_viewer, sequential_bytes, sixteen_columns, ROW_HEIGHT_PX};
use hexlens::config::SearchMode;
use hexlens::hex::HexDocument;
use hexlens::viewer::{dispatch, CellClass, SearchStep, Settings, Viewer};

fn booted_with(bytes: Vec<u8>, settings: Settings) -> Viewer {
    let mut viewer = Viewer::new(HexDocument::from_bytes(bytes), settings);
    viewer.boot(None, None, Some(8 * ROW_HEIGHT_PX));
    viewer
}

#[test]
fn hex_pattern_finds_every_occurrence() {
    let mut viewer = booted_viewer(1024, 8);
    viewer.dispatch(dispatch::search_change("4d 4e"));

    let search = &viewer.store().search;
    assert_eq!(search.results, vec![77, 333, 589, 845]);
    assert_eq!(search.selected_result, Some(0));
    assert_eq!(search.pattern_len, 2);
    assert_eq!(viewer.store().cursor.index, Some(77));
    assert_eq!(viewer.store().selection.ordered(), Some((77, 78)));
}

#[test]
fn next_n_times_wraps_to_first() {
    let mut viewer = booted_viewer(1024, 8);
    viewer.dispatch(dispatch::search_change("4d4e"));
    let count = viewer.store().search.match_count();

    for _ in 0..count {
        let action = dispatch::search_navigate(viewer.store(), SearchStep::Next).unwrap();
        viewer.dispatch(action);
    }
    assert_eq!(viewer.store().search.selected_result, Some(0));
}

#[test]
fn previous_from_first_wraps_to_last_and_reveals_it() {
    let mut viewer = booted_viewer(1024, 8);
    viewer.dispatch(dispatch::search_change("4d4e"));
    let action = dispatch::search_navigate(viewer.store(), SearchStep::Previous).unwrap();
    viewer.dispatch(action);

    let store = viewer.store();
    assert_eq!(store.search.selected_result, Some(3));
    assert_eq!(store.cursor.index, Some(845));
    let row = 845 / 16;
    assert!(store.scroll.index <= row && row < store.scroll.index + store.layout.row.size);
}

#[test]
fn no_matches_leaves_selection_empty_and_blocks_navigation() {
    let mut viewer = booted_viewer(64, 8);
    viewer.dispatch(dispatch::search_change("not here"));

    assert!(viewer.store().search.results.is_empty());
    assert_eq!(viewer.store().search.selected_result, None);
    assert!(dispatch::search_navigate(viewer.store(), SearchStep::Next).is_none());
    assert!(dispatch::search_navigate(viewer.store(), SearchStep::Previous).is_none());
}

#[test]
fn auto_mode_falls_back_to_text() {
    let mut viewer = booted_with(b"MZ..MZMZ".to_vec(), sixteen_columns());
    viewer.dispatch(dispatch::search_change("MZ"));
    assert_eq!(viewer.store().search.results, vec![0, 4, 6]);
}

#[test]
fn hex_mode_with_invalid_pattern_finds_nothing() {
    let settings = Settings {
        search_mode: SearchMode::Hex,
        ..sixteen_columns()
    };
    let mut viewer = booted_with(b"zz zz".to_vec(), settings);
    viewer.dispatch(dispatch::search_change("zz"));
    assert!(viewer.store().search.results.is_empty());
}

#[test]
fn text_mode_searches_hex_looking_input_as_text() {
    let settings = Settings {
        search_mode: SearchMode::Text,
        ..sixteen_columns()
    };
    let mut viewer = booted_with(b"..ab..".to_vec(), settings);
    viewer.dispatch(dispatch::search_change("ab"));
    assert_eq!(viewer.store().search.results, vec![2]);
}

#[test]
fn matches_and_selected_match_are_rendered() {
    let mut viewer = booted_viewer(256, 8);
    let effects = viewer.dispatch(dispatch::search_change("00"));
    assert_eq!(added(&effects, CellClass::SearchMatch), vec![0]);
    assert_eq!(added(&effects, CellClass::SearchSelected), vec![0]);
}

#[test]
fn clear_requires_input_and_resets() {
    let mut viewer = booted_viewer(256, 8);
    assert!(dispatch::search_clear(viewer.store()).is_none());

    viewer.dispatch(dispatch::search_change("10"));
    let action = dispatch::search_clear(viewer.store()).unwrap();
    viewer.dispatch(action);
    assert_eq!(viewer.store().search.input_value, None);
    assert!(viewer.store().search.results.is_empty());
}

#[test]
fn replacing_the_document_resets_search() {
    let mut viewer = booted_viewer(256, 8);
    viewer.dispatch(dispatch::search_change("10"));
    viewer.replace_document(HexDocument::from_bytes(sequential_bytes(32)), true);
    assert_eq!(viewer.store().search.selected_result, None);
    assert_eq!(viewer.store().cursor.index, None);
    assert_eq!(viewer.store().selection.range, None);
}
