//! Quick-view modal for a record, and the help sheet.

use dioxus::prelude::*;
use guide_core::{ModalContent, NavIntent, RecordKind, Section};
use guide_ui::{Button, ButtonVariant, ModalFrame};

use super::RecordPanel;
use crate::context::{use_dispatch, use_modal, use_show_secrets, use_store};

#[component]
pub fn RecordModal() -> Element {
    let mut modal = use_modal();
    let Some(content) = modal.read().current().cloned() else {
        return rsx! {};
    };

    let on_close = move |_: ()| {
        modal.write().close();
    };

    match content {
        ModalContent::Record { kind, key } => rsx! {
            RecordQuickView { kind, record_key: key.to_string(), on_close }
        },
        ModalContent::Help => rsx! {
            ModalFrame { title: "Using the guide".to_string(), on_close,
                ul { class: "help-list",
                    li { "Pick a section from the pills under the title." }
                    li { "Type three or more letters in a search box to filter and rank results." }
                    li { "Use \u{201c}quick view\u{201d} on a card to peek without leaving the page." }
                    li { "The GM secrets toggle on a record page reveals hooks and secrets." }
                }
            }
        },
    }
}

#[component]
fn RecordQuickView(kind: RecordKind, record_key: String, on_close: EventHandler<()>) -> Element {
    let store = use_store();
    let dispatch = use_dispatch();
    let show_secrets = use_show_secrets();

    let title = store
        .record_name(kind, &record_key)
        .unwrap_or("Not found")
        .to_string();
    let target = record_key.clone();

    rsx! {
        ModalFrame { title, on_close,
            RecordPanel { kind, record_key: record_key.clone(), show_secrets: show_secrets() }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Badge,
                    title: format!("All {}", Section::for_kind(kind).title()),
                    onclick: move |_| {
                        on_close.call(());
                        dispatch.call(NavIntent::ShowSection(Section::for_kind(kind)));
                    },
                    "{kind.label()}"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        on_close.call(());
                        dispatch.call(NavIntent::ShowRecord {
                            section: Section::for_kind(kind),
                            key: target.clone().into(),
                        });
                    },
                    "open page"
                }
            }
        }
    }
}
