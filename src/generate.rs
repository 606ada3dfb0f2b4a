//! Render-then-write loop over the catalogue.
//!
//! Failures are collected per descriptor; one bad page never stops the rest.
//! Every write has completed by the time [`generate`] returns.

use crate::catalogue::Catalogue;
use crate::model::ApiDescriptor;
use crate::render::{error_chain, RenderError, Renderer};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("{}", error_chain(.0))]
    Render(#[from] RenderError),

    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PageError {
    pub fn kind(&self) -> &'static str {
        match self {
            PageError::Render(_) => "render",
            PageError::Persist { .. } => "persist",
        }
    }
}

/// One descriptor whose page was not produced.
#[derive(Debug)]
pub struct Failure {
    pub endpoint_path: String,
    pub error: PageError,
}

/// Outcome of a batch.
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Output file name for a descriptor: "holidays" + "html" → "holidays.html".
pub fn output_name(descriptor: &ApiDescriptor, ext: &str) -> String {
    format!("{}.{}", descriptor.endpoint_path, ext)
}

/// Render and write each descriptor into `out_dir`, in order.
pub fn generate<'a>(
    descriptors: impl IntoIterator<Item = &'a ApiDescriptor>,
    renderer: &dyn Renderer,
    out_dir: &Path,
) -> Report {
    let ext = renderer.file_extension();
    let mut report = Report::default();

    for descriptor in descriptors {
        let out_path = out_dir.join(output_name(descriptor, ext));
        match write_page(descriptor, renderer, &out_path) {
            Ok(()) => {
                tracing::debug!(path = %out_path.display(), "page written");
                report.written.push(out_path);
            }
            Err(error) => {
                tracing::warn!(
                    endpoint_path = descriptor.endpoint_path,
                    kind = error.kind(),
                    "{}",
                    error
                );
                report.failures.push(Failure {
                    endpoint_path: descriptor.endpoint_path.to_string(),
                    error,
                });
            }
        }
    }

    report
}

fn write_page(
    descriptor: &ApiDescriptor,
    renderer: &dyn Renderer,
    out_path: &Path,
) -> Result<(), PageError> {
    let page = renderer.render(descriptor)?;
    fs::write(out_path, page).map_err(|source| PageError::Persist {
        path: out_path.to_path_buf(),
        source,
    })
}

/// Delete `*.<ext>` files in `out_dir` that no catalogue entry would produce.
/// Returns the removed paths.
pub fn prune(catalogue: &Catalogue, ext: &str, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let known: HashSet<String> = catalogue.iter().map(|d| output_name(d, ext)).collect();
    let dir = glob::Pattern::escape(&out_dir.to_string_lossy());
    let pattern = format!("{}/*.{}", dir, glob::Pattern::escape(ext));

    let mut removed = Vec::new();
    for path in glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
    {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if known.contains(&name) {
            continue;
        }
        fs::remove_file(&path)
            .with_context(|| format!("failed to remove stale page {}", path.display()))?;
        tracing::info!(path = %path.display(), "removed stale page");
        removed.push(path);
    }
    removed.sort();
    Ok(removed)
}
