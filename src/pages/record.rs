//! Record page: one record, full size, with the GM secrets toggle.

use dioxus::prelude::*;
use guide_core::{NavIntent, Section};
use guide_ui::{Button, ButtonVariant};

use crate::components::RecordPanel;
use crate::context::{use_dispatch, use_show_secrets};

#[component]
pub fn RecordPage(section: String, record: String) -> Element {
    let dispatch = use_dispatch();
    let mut show_secrets = use_show_secrets();

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

    rsx! {
        section { class: "record-page",
            div { class: "record-page__toolbar",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| dispatch.call(NavIntent::ShowSection(current)),
                    "\u{2190} all {current.title()}"
                }
                Button {
                    variant: ButtonVariant::Toggle,
                    active: show_secrets(),
                    title: "Show hooks and secrets meant for the GM".to_string(),
                    onclick: move |_| {
                        let shown = show_secrets();
                        show_secrets.set(!shown);
                        tracing::debug!(shown = !shown, "GM secrets toggled");
                    },
                    "GM secrets"
                }
            }
            RecordPanel { kind, record_key: record.clone(), show_secrets: show_secrets() }
        }
    }
}
