//! Application components that need the store or the navigation context.
//!
//! Context-free building blocks live in `guide-ui`.

mod nav_header;
mod npc_list_panel;
mod record_modal;
mod record_panel;

pub use nav_header::NavHeader;
pub use npc_list_panel::NpcListPanel;
pub use record_modal::RecordModal;
pub use record_panel::RecordPanel;
