//! Data models for drawdash services and commands
//!
//! This module organizes the data records flowing through the pipeline:
//! price points and the all-time-high reference, range selections, derived
//! statistics, and the declarative chart drawing description.

pub mod chart;
pub mod price;
pub mod range;
pub mod stats;

// Re-export commonly used types for convenience
pub use chart::{ChartPrimitive, Drawing, LabelKind, TextAnchor};
pub use price::{AthReference, PricePoint};
pub use range::{RangeSelection, DEFAULT_RANGE};
pub use stats::Stats;
