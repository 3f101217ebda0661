//! Output formatting for subnet details.
//!
//! - [`terminal`] - aligned `label: value` lines
//! - [`json`] - JSON output

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{format_line, render_info};
