//! Relevance filter laws and property tests
//!
//! Uses proptest to check the ranking invariants over arbitrary NPC sets.

use guide_core::{filter_records, FilterConfig, Npc};
use proptest::prelude::*;

fn npc(name: &str, location: Option<&str>, role: Option<&str>, description: Option<&str>) -> Npc {
    Npc {
        key: name.to_lowercase().replace(' ', "-").into(),
        name: name.to_string(),
        location: location.map(str::to_string),
        role: role.map(str::to_string),
        description: description.map(str::to_string),
        ..Default::default()
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn harbor_district_scenario() {
    let records = vec![
        npc("Ishmael", Some("Harbor District"), None, Some("a young sailor")),
        npc("Flask", Some("Harbor District"), None, Some("a short sailor")),
    ];

    let matches = filter_records(&records, "harbor");
    let got: Vec<_> = matches
        .iter()
        .map(|m| (m.record.name.as_str(), m.score))
        .collect();
    assert_eq!(got, vec![("Ishmael", 4), ("Flask", 4)]);
}

#[test]
fn captain_scores_name_role_and_description() {
    let records = vec![npc(
        "Captain Ahab",
        None,
        Some("Ship Captain"),
        Some("an obsessed sea captain"),
    )];
    let matches = filter_records(&records, "captain");
    assert_eq!(matches[0].score, 4 + 2 + 1);
}

#[test]
fn every_field_counts_once() {
    let records = vec![npc(
        "Sailor Sam",
        Some("Sailor's Rest"),
        Some("sailor"),
        Some("a sailor's sailor"),
    )];
    assert_eq!(filter_records(&records, "sailor")[0].score, 11);
}

#[test]
fn empty_queries_and_misses_find_nothing() {
    let records = vec![npc("Ishmael", Some("Harbor District"), None, None)];
    assert!(filter_records(&records, "").is_empty());
    assert!(filter_records(&records, "   ").is_empty());
    assert!(filter_records(&records, "zzzznotfound").is_empty());
}

#[test]
fn threshold_belongs_to_the_caller() {
    let records = vec![npc("Abel", None, None, None)];

    // The bare function happily matches two characters
    assert_eq!(filter_records(&records, "ab").len(), 1);

    // The search-box policy treats it as "no filter"
    let config = FilterConfig::default();
    assert!(config.apply(&records, Some("ab")).is_none());
    assert_eq!(config.apply(&records, Some("abe")).unwrap().len(), 1);
}

#[test]
fn records_are_not_mutated() {
    let records = vec![
        npc("Ishmael", Some("Harbor District"), None, None),
        npc("Flask", None, None, None),
    ];
    let before = records.clone();
    let _ = filter_records(&records, "ish");
    assert_eq!(records, before);
}

// ============================================================================
// Strategy Generators
// ============================================================================

fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[a-zA-Z ]{0,24}").expect("valid regex"))
}

fn npc_strategy() -> impl Strategy<Value = Npc> {
    (
        prop::string::string_regex("[a-zA-Z ]{1,16}").expect("valid regex"),
        field_strategy(),
        field_strategy(),
        field_strategy(),
    )
        .prop_map(|(name, location, role, description)| Npc {
            key: name.clone().into(),
            name,
            location,
            role,
            description,
            ..Default::default()
        })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,3}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Results never include a zero score and never exceed the max weight sum
    #[test]
    fn scores_are_positive_and_bounded(
        records in prop::collection::vec(npc_strategy(), 0..30),
        query in query_strategy(),
    ) {
        for m in filter_records(&records, &query) {
            prop_assert!(m.score > 0);
            prop_assert!(m.score <= 11);
        }
    }

    /// Scores are non-increasing, and ties keep input order
    #[test]
    fn sorted_descending_and_stable(
        records in prop::collection::vec(npc_strategy(), 0..30),
        query in query_strategy(),
    ) {
        let index_of = |r: &Npc| records.iter().position(|x| std::ptr::eq(x, r)).unwrap();
        let matches = filter_records(&records, &query);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(index_of(pair[0].record) < index_of(pair[1].record));
            }
        }
    }

    /// Every result borrows a distinct input record
    #[test]
    fn results_are_a_subset_of_input(
        records in prop::collection::vec(npc_strategy(), 0..30),
        query in query_strategy(),
    ) {
        let matches = filter_records(&records, &query);
        prop_assert!(matches.len() <= records.len());
        for m in &matches {
            prop_assert!(records.iter().any(|r| std::ptr::eq(r, m.record)));
        }
    }

    /// Query case does not affect the result
    #[test]
    fn case_insensitive(
        records in prop::collection::vec(npc_strategy(), 0..30),
        query in query_strategy(),
    ) {
        let lower: Vec<_> = filter_records(&records, &query.to_lowercase())
            .iter()
            .map(|m| (m.record as *const Npc, m.score))
            .collect();
        let upper: Vec<_> = filter_records(&records, &query.to_uppercase())
            .iter()
            .map(|m| (m.record as *const Npc, m.score))
            .collect();
        prop_assert_eq!(lower, upper);
    }

    /// A record whose name is exactly the query always scores at least the name weight
    #[test]
    fn exact_name_always_matches(record in npc_strategy()) {
        let query = record.name.trim().to_string();
        prop_assume!(!query.is_empty());
        let records = vec![record];
        let matches = filter_records(&records, &query);
        prop_assert_eq!(matches.len(), 1);
        prop_assert!(matches[0].score >= 4);
    }
}
