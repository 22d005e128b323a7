//! Record Panel Component
//!
//! Hosts a [`RecordView`] display unit. The unit is attached when its
//! element mounts and detached when the component is dropped; data and
//! settings changes go through `set_data` and `configure` whenever they
//! happen, attached or not.

use dioxus::prelude::*;
use guide_core::{DisplayUnit, RecordKind, RecordPayload, RecordView};

use crate::context::use_store;

#[component]
pub fn RecordPanel(kind: RecordKind, record_key: String, #[props(default = false)] show_secrets: bool) -> Element {
    let store = use_store();
    let mut unit = use_signal(|| {
        let mut unit = DisplayUnit::named("record-panel", RecordView::new(show_secrets));
        unit.on_ready(|| tracing::debug!("record panel ready"));
        unit
    });
    let mut html = use_signal(String::new);

    use_effect(use_reactive!(|(kind, record_key)| {
        unit.write().set_data(RecordPayload::resolve(&store, kind, &record_key));
        html.set(unit.peek().html().unwrap_or_default());
    }));

    use_effect(use_reactive!(|show_secrets| {
        unit.write().configure(|view| view.show_secrets = show_secrets);
        html.set(unit.peek().html().unwrap_or_default());
    }));

    use_drop(move || {
        if let Ok(mut unit) = unit.try_write() {
            unit.detach();
        }
    });

    rsx! {
        div {
            class: if unit.read().is_ready() { "record-panel ready" } else { "record-panel" },
            onmounted: move |_| {
                unit.write().attach();
                html.set(unit.peek().html().unwrap_or_default());
            },
            dangerous_inner_html: "{html}",
        }
    }
}
