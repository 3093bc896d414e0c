//! Template discovery and selection.

use crate::constants::{CANCEL_LABEL, TEMPLATE_EXTENSIONS};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::template::Template;
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SELECT_PROMPT: &str = "Choose Template to add, press Enter to finish";

/// Path of a template relative to the catalog root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateDescriptor(PathBuf);

impl TemplateDescriptor {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}

/// Walks `root` recursively and returns every template file below it.
///
/// Only regular files with an allowed extension are kept. Entries are
/// visited in file-name order so the result is stable between runs.
///
/// # Errors
/// * `Error::DiscoveryError` if the root is not a readable directory, or any
///   directory below it cannot be read
pub fn discover<P: AsRef<Path>>(root: P) -> Result<Vec<TemplateDescriptor>> {
    let root = root.as_ref();
    let discovery_error =
        |reason: String| Error::DiscoveryError { root: root.display().to_string(), reason };

    let metadata = fs::metadata(root).map_err(|e| discovery_error(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(discovery_error("not a directory".to_string()));
    }

    let mut descriptors = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| discovery_error(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_template_file(entry.path()) {
            warn!("Skipping non-template file: {}", entry.path().display());
            continue;
        }
        let relative =
            entry.path().strip_prefix(root).map_err(|e| discovery_error(e.to_string()))?;
        debug!("Discovered template: {}", relative.display());
        descriptors.push(TemplateDescriptor::new(relative));
    }

    Ok(descriptors)
}

/// The templates available under one root directory.
///
/// The descriptor list is fixed at discovery time. Multi-select works on
/// its own copy, so every selection starts from the full list.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
    templates: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Discovers the templates under `root`.
    pub fn from_directory<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let templates = discover(root)?;
        Ok(Self { root: root.to_path_buf(), templates })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    /// Loads the template behind `descriptor`.
    pub fn load(&self, descriptor: &TemplateDescriptor) -> Result<Template> {
        Template::from_file(self.root.join(descriptor.path()))
    }

    /// Offers every template once and loads the one picked.
    ///
    /// Returns `None` for an empty catalog.
    pub fn select_one(&self, prompt: &dyn Prompter) -> Result<Option<Template>> {
        if self.templates.is_empty() {
            return Ok(None);
        }
        let items: Vec<String> = self.templates.iter().map(ToString::to_string).collect();
        let index = prompt.choose_one(SELECT_PROMPT, &items)?;
        let descriptor = self.templates.get(index).ok_or_else(|| {
            Error::PromptError(format!("selection {index} is out of range"))
        })?;
        debug!("Selected template: {}", descriptor);
        self.load(descriptor).map(Some)
    }

    /// Keeps offering the remaining templates until the user picks
    /// "Cancel" or nothing is left, returning the picks in order.
    pub fn select_multiple(&self, prompt: &dyn Prompter) -> Result<Vec<Template>> {
        let mut available = self.templates.clone();
        let mut selected = Vec::new();

        while !available.is_empty() {
            let mut items = vec![CANCEL_LABEL.to_string()];
            items.extend(available.iter().map(ToString::to_string));

            let index = prompt.choose_one(SELECT_PROMPT, &items)?;
            if index == 0 {
                debug!("Template selection cancelled");
                break;
            }
            let descriptor = available.get(index - 1).cloned().ok_or_else(|| {
                Error::PromptError(format!("selection {index} is out of range"))
            })?;

            debug!("Selected template: {}", descriptor);
            selected.push(self.load(&descriptor)?);
            available.retain(|candidate| candidate != &descriptor);
        }

        Ok(selected)
    }
}
