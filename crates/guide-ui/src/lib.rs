//! Campaign Guide UI Components
//!
//! Dioxus components shared by the guide's pages: buttons, the section
//! pills, the typeahead search box, record cards, and the modal frame.
//!
//! Components are stateless. They take values and event handlers as props
//! and leave routing and data access to the application.

pub mod components;

pub use components::*;
