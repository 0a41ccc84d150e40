use std::fs;
use std::path::Path;

use tracing::info;

use sim_compare::Report;

use crate::render::{render_text, Layout};

/// Write the file layout of `report` to `path`, replacing any previous
/// report there.
pub fn write_report(report: &Report, path: &Path) -> sim_core::Result<()> {
    let text = render_text(report, Layout::File);
    fs::write(path, text)?;
    info!(path = %path.display(), pairs = report.pairs.len(), "report written");
    Ok(())
}
