//! Overview page: campaign summary, section tiles, and whole-campaign search.

use dioxus::prelude::*;
use guide_core::html::{markdown, RenderTree};
use guide_core::{ModalContent, NavIntent, Section};
use guide_ui::{RecordCard, SearchInput};

use crate::context::{use_config, use_dispatch, use_modal, use_store};

#[component]
pub fn Overview() -> Element {
    let store = use_store();
    let config = use_config();
    let dispatch = use_dispatch();
    let mut modal = use_modal();
    let mut query = use_signal(String::new);

    let summary = store
        .summary()
        .map(|s| RenderTree::new(vec![markdown(s)]).to_html());

    let searching = config.filter.is_active(Some(&query()));
    let hits = if searching {
        store.search(&query())
    } else {
        Vec::new()
    };

    rsx! {
        section { class: "overview-page",
            h2 { class: "overview-title", "{store.title()}" }
            if let Some(summary) = summary {
                div { class: "overview-summary", dangerous_inner_html: "{summary}" }
            }

            SearchInput {
                value: query(),
                oninput: move |s| query.set(s),
                placeholder: "search the whole campaign...".to_string(),
                min_len: config.filter.min_query_len,
            }

            if searching {
                if hits.is_empty() {
                    p { class: "placeholder", "Nothing matches \u{201c}{query().trim()}\u{201d}." }
                }
                div { class: "card-grid",
                    for hit in hits {
                        {
                            let section = Section::for_kind(hit.kind);
                            let open_key = hit.key.clone();
                            let peek_key = hit.key.clone();
                            rsx! {
                                RecordCard {
                                    key: "{hit.kind}-{hit.key}",
                                    title: hit.name,
                                    subtitle: hit.kind.label().to_string(),
                                    onclick: move |_| dispatch.call(NavIntent::ShowRecord {
                                        section,
                                        key: open_key.clone(),
                                    }),
                                    on_peek: move |_| modal.write().open(ModalContent::Record {
                                        kind: hit.kind,
                                        key: peek_key.clone(),
                                    }),
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "card-grid",
                    for section in Section::ALL.into_iter().filter(|s| s.record_kind().is_some()) {
                        {
                            let count = section.record_kind().map(|kind| store.count(kind)).unwrap_or(0);
                            rsx! {
                                RecordCard {
                                    key: "{section.slug()}",
                                    title: section.title().to_string(),
                                    subtitle: format!("{} recorded", count),
                                    onclick: move |_| dispatch.call(NavIntent::ShowSection(section)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
