//! Context accessors for the Campaign Guide.
//!
//! The store and config are provided once at launch; the modal, the secrets
//! toggle, and the navigation dispatcher are provided by the app shell.
//!
//! ## Usage
//!
//! ```ignore
//! let store = use_store();
//! let dispatch = use_dispatch();
//!
//! dispatch.call(NavIntent::ShowSection(Section::Npcs));
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use guide_core::{DataStore, GuideConfig, ModalController, NavIntent};

/// Hook to access the campaign data store.
pub fn use_store() -> Arc<DataStore> {
    use_context::<Arc<DataStore>>()
}

/// Hook to access the application config.
pub fn use_config() -> GuideConfig {
    use_context::<GuideConfig>()
}

/// Hook to send navigation intents to the coordinator.
///
/// Components never push routes directly.
pub fn use_dispatch() -> Callback<NavIntent> {
    use_context::<Callback<NavIntent>>()
}

/// Hook to access the modal controller.
pub fn use_modal() -> Signal<ModalController> {
    use_context::<Signal<ModalController>>()
}

/// Hook to access the GM secrets toggle.
pub fn use_show_secrets() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
