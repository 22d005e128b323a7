use dioxus::prelude::*;
use guide_core::{route_title, ModalController, NavIntent, Navigator, Section};

use crate::components::{NavHeader, RecordModal};
use crate::context::{use_config, use_store};
use crate::pages::{Overview, RecordPage, SectionPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Campaign overview with whole-store search
/// - `/:section` - One collection, e.g. `/npcs`
/// - `/:section/:record` - One record, e.g. `/npcs/maren-holt`
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Overview {},
        #[route("/:section")]
        SectionPage { section: String },
        #[route("/:section/:record")]
        RecordPage { section: String, record: String },
}

impl From<&guide_core::Route> for Route {
    fn from(route: &guide_core::Route) -> Self {
        match (route.section, &route.item) {
            (Section::Overview, _) => Route::Overview {},
            (section, None) => Route::SectionPage {
                section: section.slug().to_string(),
            },
            (section, Some(key)) => Route::RecordPage {
                section: section.slug().to_string(),
                record: key.to_string(),
            },
        }
    }
}

/// Clicks on record links inside rendered record HTML are reported back
/// instead of navigating the webview.
const LINK_INTERCEPTOR: &str = r#"
document.addEventListener('click', (event) => {
    const link = event.target.closest('a.record-link');
    if (!link) return;
    event.preventDefault();
    event.stopPropagation();
    dioxus.send(link.getAttribute('href'));
}, true);
"#;

/// Root application component.
///
/// Provides global styles, shared UI state, and routing.
#[component]
pub fn App() -> Element {
    let config = use_config();
    let show_secrets = use_signal(|| config.show_secrets);
    let modal = use_signal(ModalController::new);

    use_context_provider(|| show_secrets);
    use_context_provider(|| modal);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout around every page. Owns the navigation coordinator.
#[component]
fn Shell() -> Element {
    let store = use_store();
    let router = navigator();
    let mut nav = use_signal(Navigator::default);

    let dispatch = use_callback(move |intent: NavIntent| {
        let changed = nav.write().dispatch(intent);
        if changed {
            router.push(Route::from(nav.peek().current()));
        }
    });
    use_context_provider(|| dispatch);

    use_future(move || async move {
        let mut links = document::eval(LINK_INTERCEPTOR);
        while let Ok(href) = links.recv::<String>().await {
            dispatch.call(NavIntent::OpenHash(href));
        }
        tracing::debug!("record link listener closed");
    });

    let (section, title, can_back, can_forward) = {
        let nav = nav.read();
        (
            nav.current().section,
            route_title(nav.current(), &store),
            nav.can_go_back(),
            nav.can_go_forward(),
        )
    };

    rsx! {
        document::Title { "{title}" }
        div { class: "app-shell",
            NavHeader { current: section, can_back, can_forward }
            main { class: "page", Outlet::<Route> {} }
            RecordModal {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_routes_map_to_app_routes() {
        assert_eq!(Route::from(&guide_core::Route::overview()), Route::Overview {});
        assert_eq!(
            Route::from(&guide_core::Route::section(Section::Threats)),
            Route::SectionPage {
                section: "threats".to_string()
            }
        );
        assert_eq!(
            Route::from(&guide_core::Route::record(Section::Npcs, "wren").unwrap()),
            Route::RecordPage {
                section: "npcs".to_string(),
                record: "wren".to_string()
            }
        );
    }

    #[test]
    fn app_paths_match_core_hashes() {
        let core = guide_core::Route::record(Section::Settlements, "gullhaven").unwrap();
        let path = Route::from(&core).to_string();
        assert_eq!(format!("#{}", path), core.to_hash());
    }
}
