//! Relevance-scored text filter for typeahead search.
//!
//! [`filter_records`] scores every record against a query on four weighted
//! fields and returns the hits, best first. The function itself has no
//! minimum query length; the activation threshold lives in [`FilterConfig`],
//! which is what search boxes should call.
//!
//! ```ignore
//! let config = FilterConfig::default();
//! match config.apply(store.npcs(), &query) {
//!     None => show_all(),
//!     Some(matches) => show(matches),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Searchable;

/// Default weight of a name hit
pub const NAME_WEIGHT: u32 = 4;
/// Default weight of a location hit
pub const LOCATION_WEIGHT: u32 = 4;
/// Default weight of a role hit
pub const ROLE_WEIGHT: u32 = 2;
/// Default weight of a description hit
pub const DESCRIPTION_WEIGHT: u32 = 1;
/// Queries shorter than this (after trimming) leave the list unfiltered
pub const MIN_QUERY_LEN: usize = 3;

/// Per-field weights added to a record's score when the field contains the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterWeights {
    pub name: u32,
    pub location: u32,
    pub role: u32,
    pub description: u32,
}

impl Default for FilterWeights {
    fn default() -> Self {
        Self {
            name: NAME_WEIGHT,
            location: LOCATION_WEIGHT,
            role: ROLE_WEIGHT,
            description: DESCRIPTION_WEIGHT,
        }
    }
}

impl FilterWeights {
    /// Score one record against an already-lowercased, non-empty needle
    fn score<R: Searchable + ?Sized>(&self, record: &R, needle: &str) -> u32 {
        let hit = |field: Option<&str>, weight: u32| match field {
            Some(value) if value.to_lowercase().contains(needle) => weight,
            _ => 0,
        };

        // Weights come from user config, so the sum saturates.
        hit(record.search_name(), self.name)
            .saturating_add(hit(record.search_location(), self.location))
            .saturating_add(hit(record.search_role(), self.role))
            .saturating_add(hit(record.search_description(), self.description))
    }
}

/// A record paired with its relevance score
#[derive(Debug, PartialEq)]
pub struct ScoredMatch<'a, R> {
    pub record: &'a R,
    pub score: u32,
}

// Derived Clone/Copy would demand `R: Clone`.
impl<R> Clone for ScoredMatch<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ScoredMatch<'_, R> {}

/// Filter `records` by `query` using the default 4/4/2/1 weights.
pub fn filter_records<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<ScoredMatch<'a, R>> {
    filter_records_with(records, query, &FilterWeights::default())
}

/// Filter `records` by `query` using explicit weights.
///
/// Matching is case-insensitive substring containment of the trimmed query.
/// Records scoring zero are dropped. The result is sorted by score,
/// highest first; equal scores keep their input order.
pub fn filter_records_with<'a, R: Searchable>(
    records: &'a [R],
    query: &str,
    weights: &FilterWeights,
) -> Vec<ScoredMatch<'a, R>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ScoredMatch<'a, R>> = records
        .iter()
        .filter_map(|record| {
            let score = weights.score(record, &needle);
            (score > 0).then_some(ScoredMatch { record, score })
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::trace!(query = %needle, candidates = records.len(), hits = matches.len(), "filtered records");
    matches
}

/// Search-box policy: weights plus the activation threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub weights: FilterWeights,
    /// Minimum trimmed query length, in characters, before filtering kicks in
    pub min_query_len: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            weights: FilterWeights::default(),
            min_query_len: MIN_QUERY_LEN,
        }
    }
}

impl FilterConfig {
    /// Whether `query` is long enough to filter on
    pub fn is_active(&self, query: Option<&str>) -> bool {
        query
            .map(|q| q.trim().chars().count() >= self.min_query_len.max(1))
            .unwrap_or(false)
    }

    /// Run the filter if the query is active.
    ///
    /// Returns `None` when the query is below the threshold, meaning "no
    /// filter": the caller shows the unfiltered collection.
    pub fn apply<'a, R: Searchable>(
        &self,
        records: &'a [R],
        query: Option<&str>,
    ) -> Option<Vec<ScoredMatch<'a, R>>> {
        let query = query.filter(|q| self.is_active(Some(*q)))?;
        Some(filter_records_with(records, query, &self.weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Npc;

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

    #[test]
    fn captain_ahab_scores_seven() {
        let records = vec![npc(
            "Captain Ahab",
            None,
            Some("Ship Captain"),
            Some("an obsessed sea captain"),
        )];
        let matches = filter_records(&records, "captain");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 7);
    }

    #[test]
    fn empty_and_blank_queries_return_nothing() {
        let records = vec![npc("Ishmael", None, None, None)];
        assert!(filter_records(&records, "").is_empty());
        assert!(filter_records(&records, "   ").is_empty());
    }

    #[test]
    fn no_match_returns_nothing() {
        let records = vec![
            npc("Ishmael", Some("Harbor District"), None, Some("a young sailor")),
            npc("Queequeg", None, Some("Harpooneer"), None),
        ];
        assert!(filter_records(&records, "zzzznotfound").is_empty());
    }

    #[test]
    fn matching_ignores_case_and_surrounding_space() {
        let records = vec![npc("Starbuck", None, None, None)];
        let matches = filter_records(&records, "  STARB ");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 4);
    }

    #[test]
    fn higher_scores_come_first() {
        let records = vec![
            npc("Fedallah", None, None, Some("whispers of the whale")),
            npc("Whale Watcher", None, None, None),
            npc("Stubb", None, Some("whaleman"), None),
        ];
        let names: Vec<_> = filter_records(&records, "whale")
            .into_iter()
            .map(|m| (m.record.name.as_str(), m.score))
            .collect();
        assert_eq!(
            names,
            vec![("Whale Watcher", 4), ("Stubb", 2), ("Fedallah", 1)]
        );
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let records = vec![
            npc("Tashtego", None, Some("harpooneer"), None),
            npc("Daggoo", None, Some("harpooneer"), None),
            npc("Queequeg", None, Some("harpooneer"), None),
        ];
        let names: Vec<_> = filter_records(&records, "harp")
            .iter()
            .map(|m| m.record.name.clone())
            .collect();
        assert_eq!(names, vec!["Tashtego", "Daggoo", "Queequeg"]);
    }

    #[test]
    fn custom_weights_change_ranking() {
        let records = vec![
            npc("Pip", None, None, Some("the cabin boy")),
            npc("Boy Wonder", None, None, None),
        ];
        let weights = FilterWeights {
            name: 1,
            location: 0,
            role: 0,
            description: 10,
        };
        let matches = filter_records_with(&records, "boy", &weights);
        assert_eq!(matches[0].record.name, "Pip");
        assert_eq!(matches[0].score, 10);
        assert_eq!(matches[1].score, 1);
    }

    #[test]
    fn huge_weights_saturate_instead_of_overflowing() {
        let records = vec![
            npc("Harbor Hal", Some("Harbor District"), None, None),
            npc("Quiet Sue", None, None, Some("lives by the harbor")),
        ];
        let weights = FilterWeights {
            name: u32::MAX,
            location: u32::MAX,
            role: 2,
            description: 1,
        };
        let matches = filter_records_with(&records, "harbor", &weights);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].score, u32::MAX);
        assert_eq!(matches[1].score, 1);
    }

    #[test]
    fn bare_function_has_no_length_gate() {
        let records = vec![npc("Ab", None, None, None)];
        assert_eq!(filter_records(&records, "ab").len(), 1);
    }

    #[test]
    fn config_threshold_is_inert_below_three_chars() {
        let config = FilterConfig::default();
        let records = vec![npc("Ab", None, None, None), npc("Abe", None, None, None)];

        assert!(!config.is_active(None));
        assert!(!config.is_active(Some("ab")));
        assert!(!config.is_active(Some("  ab  ")));
        assert!(config.is_active(Some("abe")));

        assert!(config.apply(&records, Some("ab")).is_none());
        assert!(config.apply(&records, None).is_none());

        let matches = config.apply(&records, Some("abe")).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].record.name, "Abe");
    }

    #[test]
    fn active_query_with_no_hits_is_empty_not_inert() {
        let config = FilterConfig::default();
        let records = vec![npc("Ishmael", None, None, None)];
        assert_eq!(config.apply(&records, Some("zzz")).map(|m| m.len()), Some(0));
    }

    #[test]
    fn config_deserializes_partial_json() {
        let config: FilterConfig = serde_json::from_str(r#"{"min_query_len": 2}"#).unwrap();
        assert_eq!(config.min_query_len, 2);
        assert_eq!(config.weights, FilterWeights::default());
    }
}
