//! Content validation and static shell export.
//!
//! The exported `index.html` carries the empty section grids and controls
//! that the WASM client fills and wires at page-ready; `loader.js` boots
//! the wasm-bindgen output expected under `pkg/`.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::fs;
use std::path::{Path, PathBuf};

use client::content::{ContentError, Portfolio};
use client::page;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("{path}: {source}")]
    Content { path: PathBuf, source: ContentError },
}

/// Per-section record counts, for `check` output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub education: usize,
    pub experiences: usize,
    pub projects: usize,
    pub skills: usize,
    pub stats: usize,
}

impl Summary {
    pub fn of(portfolio: &Portfolio) -> Self {
        Self {
            education: portfolio.education.len(),
            experiences: portfolio.experiences.len(),
            projects: portfolio.projects.len(),
            skills: portfolio.skills.len(),
            stats: portfolio.stats.len(),
        }
    }
}
/// Read and validate a content file. Unlike the page, any bad record fails.
/// Read and validate a content file.
pub fn load(path: &Path) -> Result<Portfolio, ExportError> {
    let raw = fs::read_to_string(path).map_err(|source| ExportError::Read { path: path.to_owned(), source })?;
    Portfolio::from_json(&raw).map_err(|source| ExportError::Content { path: path.to_owned(), source })
}

/// Write `index.html` and `loader.js` into `out`, creating it if needed.
/// Returns the written paths.
pub fn write_site(portfolio: &Portfolio, out: &Path) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(out).map_err(|source| ExportError::Write { path: out.to_owned(), source })?;

    let files = [
        (out.join("index.html"), page::to_html(&portfolio.site)),
        (out.join(page::LOADER_SCRIPT), page::LOADER_SOURCE.to_owned()),
    ];
    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        fs::write(&path, contents).map_err(|source| ExportError::Write { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), "wrote");
        written.push(path);
    }
    Ok(written)
}
