//! Section Pills Component
//!
//! Horizontal row of guide sections. The selected section is highlighted.

use dioxus::prelude::*;
use guide_core::Section;

/// Pill label, with a record count when one is given
pub fn pill_label(section: Section, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} ({})", section.title(), n),
        None => section.title().to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionPillsProps {
    /// Sections to show, in order, with optional record counts
    pub sections: Vec<(Section, Option<usize>)>,
    pub selected: Section,
    pub on_select: EventHandler<Section>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionPills {
///         sections: Section::ALL.iter().map(|s| (*s, None)).collect(),
///         selected: route.section,
///         on_select: move |section| dispatch(NavIntent::ShowSection(section)),
///     }
/// }
/// ```
#[component]
pub fn SectionPills(props: SectionPillsProps) -> Element {
    rsx! {
        nav {
            class: "section-pills",
            role: "tablist",
            "aria-label": "Guide sections",
            for (section, count) in props.sections.iter().copied() {
                {
                    let is_selected = section == props.selected;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{section.slug()}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(section),
                            "{pill_label(section, count)}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_section_titles() {
        assert_eq!(pill_label(Section::Npcs, None), "NPCs");
        assert_eq!(pill_label(Section::Threats, Some(3)), "Threats (3)");
    }
}
