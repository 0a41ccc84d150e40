//! Loads documents from disk for the engine.
//!
//! Decoding happens here, so the engine only ever sees valid text.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use sim_core::{Document, Result, SimError};

/// Read every regular file in `folder` whose name ends in `.<extension>`.
///
/// Files are returned sorted by name so pair order is stable across runs.
/// A file named `exclude` (the report from an earlier run) is skipped.
pub fn load_folder(folder: &Path, extension: &str, exclude: Option<&str>) -> Result<Vec<Document>> {
    if !folder.is_dir() {
        return Err(SimError::NotADirectory(folder.to_path_buf()));
    }

    let suffix = format!(".{}", extension);
    let mut candidates: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(&suffix) {
            continue;
        }
        if exclude == Some(name.as_str()) {
            debug!(file = %name, "skipping previous report");
            continue;
        }
        candidates.push((name, path));
    }
    candidates.sort();

    if candidates.is_empty() {
        return Err(SimError::NoDocuments {
            folder: folder.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    let documents = candidates
        .into_iter()
        .map(|(name, path)| read_text(&path).map(|content| Document::new(name, content)))
        .collect::<Result<Vec<_>>>()?;

    info!(folder = %folder.display(), documents = documents.len(), "documents loaded");
    Ok(documents)
}

/// Read one file as a document named after its file name.
pub fn load_file(path: &Path) -> Result<Document> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(name, read_text(path)?))
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SimError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })
}
