//! Reusable UI components

mod button;
mod modal_frame;
mod record_card;
mod search_input;
mod section_pills;

pub use button::*;
pub use modal_frame::*;
pub use record_card::*;
pub use search_input::*;
pub use section_pills::*;
