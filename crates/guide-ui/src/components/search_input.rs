//! Search Input Component
//!
//! Typeahead search box. Shows a hint while the query is too short to
//! filter on, so the user knows why the list has not narrowed yet.

use dioxus::prelude::*;

/// Hint shown under the box, if any.
///
/// Nothing for an empty box or a query long enough to filter; otherwise a
/// count of the characters still needed.
pub fn threshold_hint(value: &str, min_len: usize) -> Option<String> {
    let len = value.trim().chars().count();
    if len == 0 || len >= min_len {
        return None;
    }
    let missing = min_len - len;
    Some(format!(
        "type {} more character{} to search",
        missing,
        if missing == 1 { "" } else { "s" }
    ))
}

#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default = "search...".to_string())]
    pub placeholder: String,
    /// Characters required before the query filters anything
    #[props(default = 3)]
    pub min_len: usize,
    /// Accessible label
    #[props(default = "Search".to_string())]
    pub label: String,
}

/// # Example
///
/// ```rust,ignore
/// let mut query = use_signal(String::new);
///
/// rsx! {
///     SearchInput {
///         value: query(),
///         oninput: move |s| query.set(s),
///         placeholder: "search NPCs...".to_string(),
///     }
/// }
/// ```
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let hint = threshold_hint(&props.value, props.min_len);

    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                "aria-label": "{props.label}",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(hint) = hint {
                span { class: "input-hint", "{hint}" }
            }
        }
    }
}
