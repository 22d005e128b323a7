//! Button Components
//!
//! - Primary: main actions
//! - Badge: small tag-like buttons (record kinds, counts)
//! - Toggle: on/off switches such as the GM secrets toggle
//! - Ghost: subtle secondary actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Badge,
    /// Rendered pressed when `active` is set
    Toggle,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Badge => "btn-badge",
            ButtonVariant::Toggle => "btn-toggle",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Full class attribute for a button
pub fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Pressed state, for [`ButtonVariant::Toggle`]
    #[props(default = false)]
    pub active: bool,
    /// Hover text
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Toggle,
///         active: show_secrets(),
///         onclick: move |_| show_secrets.toggle(),
///         "GM secrets"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());
    let pressed = (props.variant == ButtonVariant::Toggle).then_some(props.active);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            title: props.title.clone(),
            "aria-pressed": pressed.map(|p| p.to_string()),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, back, forward)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
