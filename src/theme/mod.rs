//! Visual theme for the Campaign Guide.

mod styles;

pub use styles::GLOBAL_STYLES;
