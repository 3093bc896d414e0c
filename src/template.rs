//! In-memory templates and their placeholders.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A delimited token found in template content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The exact matched text, delimiters included (e.g. `%%CHARTNAME%%`)
    pub pattern: String,
    /// The captured variable name (e.g. `CHARTNAME`)
    pub name: String,
    /// Resolved value, empty until resolution completes
    pub value: String,
}

impl Placeholder {
    pub fn new<S: Into<String>>(pattern: S, name: S) -> Self {
        Self { pattern: pattern.into(), name: name.into(), value: String::new() }
    }
}

/// One template loaded from the catalog.
///
/// The content is read once when the template is created and never changes.
/// Placeholders are assigned by the resolver.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    content: String,
    placeholders: Vec<Placeholder>,
}

impl Template {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        Self { path: path.into(), content: content.into(), placeholders: Vec::new() }
    }

    /// Loads the template at `path` eagerly.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the file cannot be read or is not UTF-8
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::TemplateError(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Ok(Self::new(path, content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn set_placeholders(&mut self, placeholders: Vec<Placeholder>) {
        self.placeholders = placeholders;
    }

    /// Base file name of the template, used as the destination file name.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Replaces every occurrence of each placeholder's pattern with its value.
    ///
    /// Patterns are disjoint literal substrings, so the order in which they
    /// are applied does not change the result.
    pub fn render(&self) -> String {
        self.placeholders.iter().fold(self.content.clone(), |rendered, placeholder| {
            rendered.replace(&placeholder.pattern, &placeholder.value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        let template = Template::new("/library/web/service.yaml", "");
        assert_eq!(template.file_name(), "service.yaml");
    }

    #[test]
    fn test_render_without_placeholders() {
        let template = Template::new("plain.yaml", "kind: Service\n");
        assert_eq!(template.render(), "kind: Service\n");
    }
}
