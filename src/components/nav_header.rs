//! Navigation Header Component
//!
//! Campaign title, back/forward, section pills, and the help button.

use dioxus::prelude::*;
use guide_core::{ModalContent, NavIntent, Section};
use guide_ui::{IconButton, SectionPills};

use crate::context::{use_dispatch, use_modal, use_store};

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Section of the current route
    pub current: Section,
    pub can_back: bool,
    pub can_forward: bool,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let store = use_store();
    let dispatch = use_dispatch();
    let mut modal = use_modal();

    let sections: Vec<(Section, Option<usize>)> = Section::ALL
        .iter()
        .map(|s| (*s, s.record_kind().map(|kind| store.count(kind))))
        .collect();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-history",
                    IconButton {
                        aria_label: "Back".to_string(),
                        disabled: !props.can_back,
                        onclick: move |_| dispatch.call(NavIntent::Back),
                        "\u{2190}"
                    }
                    IconButton {
                        aria_label: "Forward".to_string(),
                        disabled: !props.can_forward,
                        onclick: move |_| dispatch.call(NavIntent::Forward),
                        "\u{2192}"
                    }
                }

                h1 {
                    class: "app-title",
                    onclick: move |_| dispatch.call(NavIntent::ShowSection(Section::Overview)),
                    "{store.title()}"
                }

                IconButton {
                    aria_label: "Help".to_string(),
                    class: "help-btn".to_string(),
                    onclick: move |_| modal.write().open(ModalContent::Help),
                    "?"
                }
            }

            SectionPills {
                sections,
                selected: props.current,
                on_select: move |section| dispatch.call(NavIntent::ShowSection(section)),
            }
        }
    }
}
