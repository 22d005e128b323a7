//! Hosts the NPC typeahead results as an [`NpcListView`] display unit.
//!
//! Every query change goes through `set_data`; the unit re-renders itself
//! once attached. Names in the rendered list are `record-link` anchors, so
//! clicks reach the router through the shell's link interceptor.

use dioxus::prelude::*;
use guide_core::{DisplayUnit, NpcList, NpcListView};

use crate::context::{use_config, use_store};

#[component]
pub fn NpcListPanel(query: String) -> Element {
    let store = use_store();
    let config = use_config();
    let mut unit = use_signal(|| {
        let mut unit = DisplayUnit::named("npc-list", NpcListView);
        unit.on_ready(|| tracing::debug!("npc list ready"));
        unit
    });
    let mut html = use_signal(String::new);

    use_effect(use_reactive!(|query| {
        let list = NpcList::for_query(store.npcs(), &config.filter, &query);
        unit.write().set_data(list);
        html.set(unit.peek().html().unwrap_or_default());
    }));

    use_drop(move || {
        if let Ok(mut unit) = unit.try_write() {
            unit.detach();
        }
    });

    rsx! {
        div {
            class: if unit.read().is_ready() { "npc-list-panel ready" } else { "npc-list-panel" },
            onmounted: move |_| {
                unit.write().attach();
                html.set(unit.peek().html().unwrap_or_default());
            },
            dangerous_inner_html: "{html}",
        }
    }
}
