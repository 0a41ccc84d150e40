pub mod render;
pub mod writer;

pub use render::{format_score, render_json, render_text, Layout, RULE};
pub use writer::write_report;
