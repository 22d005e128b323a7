//! Record Card Component
//!
//! Clickable summary card used on section pages and in search results.

use dioxus::prelude::*;

/// Longest excerpt shown on a card, in characters
pub const EXCERPT_LEN: usize = 140;

/// Shorten `text` to at most `max` characters, breaking on a word boundary
/// where one is available.
pub fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}\u{2026}", cut.trim_end_matches(|c: char| c.is_whitespace() || c == ','))
}

#[derive(Clone, PartialEq, Props)]
pub struct RecordCardProps {
    pub title: String,
    /// Role, kind, or region under the title
    #[props(default)]
    pub subtitle: Option<String>,
    /// Description; shortened to [`EXCERPT_LEN`]
    #[props(default)]
    pub description: Option<String>,
    /// Relevance score from the search filter
    #[props(default)]
    pub score: Option<u32>,
    pub onclick: EventHandler<()>,
    /// Secondary action, e.g. a quick-view
    #[props(default)]
    pub on_peek: Option<EventHandler<()>>,
}

#[component]
pub fn RecordCard(props: RecordCardProps) -> Element {
    let description = props
        .description
        .as_deref()
        .map(|d| excerpt(d, EXCERPT_LEN));
    let on_peek = props.on_peek;

    rsx! {
        div {
            class: "record-card",
            role: "button",
            tabindex: "0",
            onclick: move |_| props.onclick.call(()),
            div { class: "record-card__header",
                h3 { class: "record-card__title", "{props.title}" }
                if let Some(score) = props.score {
                    span { class: "score", title: "relevance", "{score}" }
                }
            }
            if let Some(subtitle) = &props.subtitle {
                p { class: "record-card__subtitle", "{subtitle}" }
            }
            if let Some(description) = description {
                p { class: "record-card__excerpt", "{description}" }
            }
            if let Some(on_peek) = on_peek {
                button {
                    class: "btn-ghost record-card__peek",
                    r#type: "button",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_peek.call(());
                    },
                    "quick view"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(excerpt("  A salt-stained port.  ", 140), "A salt-stained port.");
    }

    #[test]
    fn long_text_breaks_on_a_word() {
        let text = "Runs the copper crews with a hard voice and a fair hand.";
        assert_eq!(excerpt(text, 24), "Runs the copper crews\u{2026}");
    }

    #[test]
    fn unbroken_text_is_cut_hard() {
        assert_eq!(excerpt("abcdefghij", 4), "abcd\u{2026}");
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        assert_eq!(excerpt("ééééé ééééé", 7), "ééééé\u{2026}");
    }
}
