//! Section page: one collection as a searchable grid of record cards.

use dioxus::prelude::*;
use guide_core::{
    DataStore, FilterConfig, ModalContent, NavIntent, Record, RecordKey, RecordKind, Searchable,
    Section,
};
use guide_ui::{RecordCard, SearchInput};

use crate::components::NpcListPanel;
use crate::context::{use_config, use_dispatch, use_modal, use_store};

/// What a record card shows
#[derive(Debug, Clone, PartialEq)]
struct CardEntry {
    key: RecordKey,
    title: String,
    subtitle: Option<String>,
    description: Option<String>,
    score: Option<u32>,
}

fn card<R: Record + Searchable>(record: &R, score: Option<u32>) -> CardEntry {
    CardEntry {
        key: record.key().clone(),
        title: record.name().to_string(),
        subtitle: record
            .search_role()
            .or_else(|| record.search_location())
            .map(str::to_string),
        description: record.search_description().map(str::to_string),
        score,
    }
}

/// Ranked matches when the query is long enough, otherwise every record
fn entries<R: Record + Searchable>(records: &[R], filter: &FilterConfig, query: &str) -> Vec<CardEntry> {
    match filter.apply(records, Some(query)) {
        Some(matches) => matches.iter().map(|m| card(m.record, Some(m.score))).collect(),
        None => records.iter().map(|r| card(r, None)).collect(),
    }
}

fn section_entries(
    store: &DataStore,
    kind: RecordKind,
    filter: &FilterConfig,
    query: &str,
) -> Vec<CardEntry> {
    match kind {
        RecordKind::Settlement => entries(store.settlements(), filter, query),
        RecordKind::Npc => entries(store.npcs(), filter, query),
        RecordKind::Threat => entries(store.threats(), filter, query),
        RecordKind::Event => entries(store.events(), filter, query),
        RecordKind::Location => entries(store.locations(), filter, query),
    }
}

#[component]
pub fn SectionPage(section: String) -> Element {
    let store = use_store();
    let config = use_config();
    let dispatch = use_dispatch();
    let mut modal = use_modal();
    let mut query = use_signal(String::new);

    // A new section starts with an empty search box
    use_effect(use_reactive!(|section| {
        tracing::debug!(%section, "showing section");
        query.set(String::new());
    }));

    let Some((current, kind)) = Section::from_slug(&section)
        .and_then(|s| s.record_kind().map(|kind| (s, kind)))
    else {
        return rsx! {
            div { class: "page-placeholder",
                h2 { "Nothing here" }
                p { "There is no section called \u{201c}{section}\u{201d}." }
            }
        };
    };

    let filter = config.filter;
    // NPC results render through their display unit instead of cards
    let npc_list = kind == RecordKind::Npc;
    let cards = if npc_list {
        Vec::new()
    } else {
        section_entries(&store, kind, &filter, &query())
    };
    let filtering = filter.is_active(Some(&query()));

    rsx! {
        section { class: "section-page",
            div { class: "section-page__header",
                h2 { class: "section-title", "{current.title()}" }
                SearchInput {
                    value: query(),
                    oninput: move |s| query.set(s),
                    placeholder: format!("search {}...", current.title().to_lowercase()),
                    min_len: filter.min_query_len,
                }
            }

            if npc_list {
                NpcListPanel { query: query() }
            } else if cards.is_empty() {
                p { class: "placeholder",
                    if filtering {
                        "No {current.title()} match \u{201c}{query().trim()}\u{201d}."
                    } else {
                        "No {current.title()} recorded."
                    }
                }
            }

            div { class: "card-grid",
                for entry in cards {
                    {
                        let open_key = entry.key.clone();
                        let peek_key = entry.key.clone();
                        rsx! {
                            RecordCard {
                                key: "{entry.key}",
                                title: entry.title,
                                subtitle: entry.subtitle,
                                description: entry.description,
                                score: entry.score,
                                onclick: move |_| dispatch.call(NavIntent::ShowRecord {
                                    section: current,
                                    key: open_key.clone(),
                                }),
                                on_peek: move |_| modal.write().open(ModalContent::Record {
                                    kind,
                                    key: peek_key.clone(),
                                }),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(cards: &[CardEntry]) -> Vec<&str> {
        cards.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn short_query_lists_everything_unscored() {
        let store = DataStore::embedded().unwrap();
        let cards = section_entries(&store, RecordKind::Npc, &FilterConfig::default(), "ha");
        assert_eq!(cards.len(), store.npcs().len());
        assert!(cards.iter().all(|c| c.score.is_none()));
    }

    #[test]
    fn long_query_ranks_matches() {
        let store = DataStore::embedded().unwrap();
        let cards = section_entries(&store, RecordKind::Npc, &FilterConfig::default(), "harbor");
        assert_eq!(titles(&cards), vec!["Maren Holt", "Tobias Reed", "The Tide-Speaker"]);
        assert_eq!(cards[0].score, Some(7));
        assert_eq!(cards[0].subtitle.as_deref(), Some("Harbormaster"));
    }

    #[test]
    fn every_section_has_cards() {
        let store = DataStore::embedded().unwrap();
        for kind in RecordKind::ALL {
            let cards = section_entries(&store, kind, &FilterConfig::default(), "");
            assert_eq!(cards.len(), store.count(kind), "{kind}");
        }
    }
}
