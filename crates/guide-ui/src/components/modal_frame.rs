//! Modal Frame Component
//!
//! Overlay with a titled dialog. Closes on the close button, a click on the
//! backdrop, or Escape.

use dioxus::prelude::*;

use super::CloseButton;

#[derive(Clone, PartialEq, Props)]
pub struct ModalFrameProps {
    pub title: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(content) = modal.read().current().cloned() {
///         ModalFrame {
///             title: "Maren Holt".to_string(),
///             on_close: move |_| { modal.write().close(); },
///             RecordPanel { kind, key }
///         }
///     }
/// }
/// ```
#[component]
pub fn ModalFrame(props: ModalFrameProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-dialog",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                tabindex: "-1",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                div { class: "modal-body", {props.children} }
            }
        }
    }
}
