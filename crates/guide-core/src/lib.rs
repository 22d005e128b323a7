//! Campaign Guide Core Library
//!
//! Records, search, and display units for a tabletop campaign guide.
//!
//! ## Overview
//!
//! A campaign is a static set of settlements, NPCs, threats, events, and
//! locations. This crate loads it into a read-only [`DataStore`], ranks
//! records for typeahead search with [`filter_records`], and renders them
//! through [`DisplayUnit`]s that accept data at any time and render once
//! their host attaches them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use guide_core::{DataStore, DisplayUnit, RecordKind, RecordPayload, RecordView};
//!
//! let store = DataStore::embedded()?;
//!
//! let mut unit = DisplayUnit::new(RecordView::default());
//! unit.set_data(RecordPayload::resolve(&store, RecordKind::Npc, "maren-holt"));
//! unit.attach(); // builds the tree, renders the buffered payload
//!
//! println!("{}", unit.html().unwrap_or_default());
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod html;
pub mod lifecycle;
pub mod logging;
pub mod modal;
pub mod navigation;
pub mod routing;
pub mod store;
pub mod types;
pub mod views;

// Re-exports
pub use config::GuideConfig;
pub use error::{GuideError, GuideResult};
pub use filter::{filter_records, filter_records_with, FilterConfig, FilterWeights, ScoredMatch};
pub use html::{Node, RenderTree};
pub use lifecycle::{DisplayUnit, View};
pub use logging::LoggingBuilder;
pub use modal::{ModalContent, ModalController};
pub use navigation::{NavIntent, Navigator};
pub use routing::{route_title, Route, Section};
pub use store::{DataStore, SearchHit};
pub use types::*;
pub use views::{NpcCardView, NpcList, NpcListView, RecordPayload, RecordView};
