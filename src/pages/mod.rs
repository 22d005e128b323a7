//! Page components for the Campaign Guide.

mod overview;
mod record;
mod section;

pub use overview::Overview;
pub use record::RecordPage;
pub use section::SectionPage;
