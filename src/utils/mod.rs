pub mod errors;
pub mod format;
pub mod svg;

pub use errors::DashboardError;
pub use format::{format_currency, format_percent};
pub use svg::render_svg;
