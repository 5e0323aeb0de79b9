//! Display formatting functions and result types.
//!
//! Presentation logic for the planner lives here, separated from the domain
//! models: `Display` implementations that render models as markdown, a
//! [`Timeline`] wrapper for whole day views, and [`OperationStatus`] for
//! command feedback. All formatters produce markdown for rich terminal
//! display; plain-text fallback is the renderer's concern.
//!
//! Category-to-icon and category-to-color mapping is deliberately absent:
//! the core emits the category tag and nothing else.

pub mod datetime;
pub mod models;
pub mod status;
pub mod timeline;

// Re-export commonly used types for convenience
pub use datetime::ClockTime;
pub use status::OperationStatus;
pub use timeline::Timeline;
