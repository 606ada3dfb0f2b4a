//! Renderer module: trait-based format dispatch.

pub mod html;
pub mod json;

use crate::model::ApiDescriptor;
use anyhow::{anyhow, bail, Result};
use std::path::Path;
use thiserror::Error;

/// A page could not be produced for one descriptor.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] tera::Error),

    #[error("failed to serialize descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for rendering one descriptor into a specific output format.
pub trait Renderer {
    fn render(&self, descriptor: &ApiDescriptor) -> Result<String, RenderError>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name, optionally from a custom template file.
pub fn create_renderer(format: &str, template: Option<&Path>) -> Result<Box<dyn Renderer>> {
    match (format, template) {
        ("html", None) => Ok(Box::new(html::TemplateRenderer::builtin()?)),
        ("html", Some(path)) => Ok(Box::new(html::TemplateRenderer::from_file(path)?)),
        ("json", None) => Ok(Box::new(json::JsonRenderer)),
        ("json", Some(_)) => bail!("--template only applies to the html format"),
        _ => Err(anyhow!("unknown format: {}. Use html or json", format)),
    }
}

/// Flatten an error and its sources into one line, e.g.
/// "Failed to render 'page.html': Variable `x` not found in context".
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
