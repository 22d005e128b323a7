//! End-to-end flows across store, navigation, and display units.

use std::cell::RefCell;
use std::rc::Rc;

use guide_core::{
    route_title, DataStore, DisplayUnit, FilterConfig, NavIntent, Navigator, NpcList, NpcListView,
    RecordKind, RecordPayload, RecordView, Route, Section,
};

#[test]
fn selecting_a_settlement_lands_on_its_page() {
    let store = DataStore::embedded().unwrap();
    let mut nav = Navigator::default();
    let titles = Rc::new(RefCell::new(Vec::new()));

    let seen = titles.clone();
    let titles_store = store.clone();
    nav.subscribe(move |route| seen.borrow_mut().push(route_title(route, &titles_store)));

    assert!(nav.dispatch(NavIntent::SelectSettlement("brackwater".into())));
    assert_eq!(*titles.borrow(), vec!["Brackwater | Settlements"]);

    let route = nav.current().clone();
    let kind = route.section.record_kind().unwrap();
    let key = route.item.clone().unwrap();

    let mut panel = DisplayUnit::new(RecordView::default());
    panel.set_data(RecordPayload::resolve(&store, kind, key.as_str()));
    panel.attach();
    let html = panel.html().unwrap();
    assert!(html.contains("Old Pell"));
    assert!(html.contains("Wren"));
}

#[test]
fn links_in_rendered_records_round_trip_through_the_navigator() {
    let store = DataStore::embedded().unwrap();
    let mut nav = Navigator::default();

    let mut panel = DisplayUnit::new(RecordView::default());
    panel.attach();
    panel.set_data(RecordPayload::resolve(&store, RecordKind::Npc, "old-pell"));
    let html = panel.html().unwrap();
    assert!(html.contains("href=\"#/settlements/brackwater\""));

    assert!(nav.dispatch(NavIntent::OpenHash("#/settlements/brackwater".to_string())));
    assert_eq!(
        nav.current(),
        &Route::record(Section::Settlements, "brackwater").unwrap()
    );

    // Same hash again: nothing changes
    assert!(!nav.dispatch(NavIntent::OpenHash("#/settlements/brackwater".to_string())));
    assert!(nav.dispatch(NavIntent::Back));
    assert_eq!(nav.current(), &Route::overview());
}

#[test]
fn npc_typeahead_respects_threshold() {
    let store = DataStore::embedded().unwrap();
    let config = FilterConfig::default();
    let mut list = DisplayUnit::new(NpcListView);

    let payload = |query: &str| match config.apply(store.npcs(), Some(query)) {
        Some(matches) => NpcList::scored(&matches, query),
        None => NpcList::all(store.npcs()),
    };

    list.set_data(payload("ha"));
    list.attach();
    let html = list.html().unwrap();
    assert!(!html.contains("class=\"score\""));
    assert!(html.contains("Dagny Ash"));

    list.set_data(payload("harb"));
    let html = list.html().unwrap();
    assert!(html.contains("class=\"score\""));
    assert!(html.contains("Maren Holt"));
    assert!(!html.contains("Dagny Ash"));
}

#[test]
fn bad_hash_leaves_route_alone() {
    let mut nav = Navigator::new(Route::section(Section::Threats));
    assert!(!nav.dispatch(NavIntent::OpenHash("#/krakens/all/of-them".to_string())));
    assert_eq!(nav.current(), &Route::section(Section::Threats));
    assert!(!nav.can_go_back());
}
