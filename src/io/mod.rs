//! Reading load files and rendering routes.

mod format;
mod reader;

pub use format::{format_routes, RoutePlan};
pub use reader::{parse_loads, read_loads};
