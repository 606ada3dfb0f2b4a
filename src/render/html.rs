//! Template renderer: one page per descriptor through Tera.
//!
//! The descriptor's serialized form is the whole template context, so a
//! template sees `endpointPath`, `endpoints`, `structure`, `projections`,
//! `links` and friends as top-level variables. Templates whose name ends in
//! `.html` are auto-escaped; prose that carries markup is piped through
//! `safe` inside the template.

use crate::model::ApiDescriptor;
use crate::render::{RenderError, Renderer};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tera::Tera;

const BUILTIN_NAME: &str = "api_page.html";
const BUILTIN_SOURCE: &str = include_str!("../../templates/api_page.html");

pub struct TemplateRenderer {
    tera: Tera,
    name: String,
    extension: String,
}

impl TemplateRenderer {
    /// The page template compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_source(BUILTIN_NAME, BUILTIN_SOURCE)
    }

    /// Load a template from disk. The output extension comes from its file
    /// name with any trailing `.tera` removed: "page.md.tera" → "md".
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read template: {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("invalid template path: {}", path.display()))?;
        Self::from_source(file_name, &source)
    }

    fn from_source(file_name: &str, source: &str) -> Result<Self> {
        let name = file_name.strip_suffix(".tera").unwrap_or(file_name);
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .with_context(|| {
                format!("cannot derive an output extension from template name: {}", file_name)
            })?
            .to_string();

        let mut tera = Tera::default();
        tera.add_raw_template(name, source)
            .with_context(|| format!("failed to parse template: {}", file_name))?;

        Ok(Self {
            tera,
            name: name.to_string(),
            extension,
        })
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, descriptor: &ApiDescriptor) -> Result<String, RenderError> {
        let context = tera::Context::from_serialize(descriptor)?;
        Ok(self.tera.render(&self.name, &context)?)
    }

    fn file_extension(&self) -> &str {
        &self.extension
    }
}
