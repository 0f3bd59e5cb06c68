pub mod formatter;

pub use formatter::{format_breakdown, format_json, format_report, should_use_colors, Report};
