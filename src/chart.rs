//! Adds resources to a Helm chart.
//! Combines component selection, variable resolution and writing into one run.

use crate::constants::{
    CHARTNAME_KEY, CHART_FILE, CHART_TEMPLATES_DIR, COMPONENT_NAME_KEY, USE_ROOT_LABEL,
};
use crate::error::{Error, Result};
use crate::prompt::{Choice, Prompter};
use crate::resolver::{Defaults, VariableResolver};
use crate::template::Template;
use crate::writer::ResourceWriter;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const COMPONENT_PROMPT: &str = "In which component would you like to add the resource(s)?";

/// The parts of `Chart.yaml` the scaffolder needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartMetadata {
    pub name: String,
}

impl ChartMetadata {
    /// Reads `Chart.yaml` from the chart directory.
    ///
    /// # Errors
    /// * `Error::ChartError` if the file is missing or not valid chart metadata
    pub fn load<P: AsRef<Path>>(chart_dir: P) -> Result<Self> {
        let chart_file = chart_dir.as_ref().join(CHART_FILE);
        let content = fs::read_to_string(&chart_file).map_err(|e| {
            Error::ChartError(format!("failed to load chart '{}': {}", chart_file.display(), e))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            Error::ChartError(format!("invalid chart '{}': {}", chart_file.display(), e))
        })
    }
}

/// Lists the component directories of a chart, sorted by name.
///
/// A chart without a templates directory has no components.
pub fn get_components<P: AsRef<Path>>(chart_dir: P) -> Result<Vec<String>> {
    let templates_dir = chart_dir.as_ref().join(CHART_TEMPLATES_DIR);
    let discovery_error = |e: io::Error| Error::DiscoveryError {
        root: templates_dir.display().to_string(),
        reason: e.to_string(),
    };

    let entries = match fs::read_dir(&templates_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(discovery_error(e)),
    };

    let mut components = Vec::new();
    for entry in entries {
        let entry = entry.map_err(discovery_error)?;
        if entry.file_type().map_err(discovery_error)?.is_dir() {
            components.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    components.sort();
    Ok(components)
}

/// Drives one scaffolding run against a chart.
///
/// The component is settled once, before the first resource is resolved,
/// and reused for every resource added afterwards.
pub struct ChartManager<'a> {
    root: PathBuf,
    metadata: ChartMetadata,
    prompt: &'a dyn Prompter,
    resolver: VariableResolver,
    extra_defaults: IndexMap<String, String>,
    component: Option<String>,
}

impl<'a> ChartManager<'a> {
    /// Opens the chart located in `root`.
    ///
    /// `component` is the explicitly requested component, if any. It is
    /// used as given, even when no such directory exists yet. An empty name
    /// counts as not given.
    pub fn new<P: AsRef<Path>>(
        root: P,
        component: Option<String>,
        resolver: VariableResolver,
        prompt: &'a dyn Prompter,
    ) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let metadata = ChartMetadata::load(&root)?;
        debug!("Loaded chart '{}' from {}", metadata.name, root.display());

        Ok(Self {
            root,
            metadata,
            prompt,
            resolver,
            extra_defaults: IndexMap::new(),
            component: component.filter(|name| !name.is_empty()),
        })
    }

    /// Adds defaults on top of the chart's built-in ones. Built-in keys win.
    pub fn with_defaults(mut self, defaults: IndexMap<String, String>) -> Self {
        self.extra_defaults = defaults;
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(CHART_TEMPLATES_DIR)
    }

    pub fn components(&self) -> Result<Vec<String>> {
        get_components(&self.root)
    }

    /// Returns the component for this run, asking the user the first time
    /// when none was given and the chart already has components.
    pub fn component(&mut self) -> Result<String> {
        if let Some(component) = &self.component {
            return Ok(component.clone());
        }

        let components = self.components()?;
        let component = if components.is_empty() {
            String::new()
        } else {
            self.choose_component(components)?
        };

        debug!("Using component '{}'", component);
        self.component = Some(component.clone());
        Ok(component)
    }

    /// Offers the existing components plus a trailing "use root" entry.
    /// The root entry is recognized by its position, never by its label.
    fn choose_component(&self, components: Vec<String>) -> Result<String> {
        let root_index = components.len();
        let mut choices = components;
        choices.push(USE_ROOT_LABEL.to_string());

        match self.prompt.choose_or_create(COMPONENT_PROMPT, &choices)? {
            Choice::Existing(index) if index == root_index => Ok(String::new()),
            Choice::Existing(index) => choices.get(index).cloned().ok_or_else(|| {
                Error::PromptError(format!("selection {index} is out of range"))
            }),
            Choice::Created(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(Error::PromptError(
                        "component name must not be empty".to_string(),
                    ));
                }
                Ok(name.to_string())
            }
            Choice::Cancelled => {
                Err(Error::PromptError("component selection cancelled".to_string()))
            }
        }
    }

    /// Builds the default table for a run scoped to `component`.
    pub fn defaults(&self, component: &str) -> Defaults {
        let mut values = IndexMap::new();
        values.insert(CHARTNAME_KEY.to_string(), self.metadata.name.clone());
        values.insert(COMPONENT_NAME_KEY.to_string(), component.to_string());
        for (key, value) in &self.extra_defaults {
            values.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Defaults::new(values)
    }

    /// Resolves and writes a single resource.
    pub fn add_resource(&mut self, template: Template) -> Result<PathBuf> {
        let mut written = self.add_resources(vec![template])?;
        written
            .pop()
            .ok_or_else(|| Error::TemplateError("no resource was written".to_string()))
    }

    /// Resolves and writes `templates` in order.
    ///
    /// The first failure stops the run. Resources written before it stay on disk.
    pub fn add_resources(&mut self, templates: Vec<Template>) -> Result<Vec<PathBuf>> {
        if templates.is_empty() {
            return Ok(Vec::new());
        }

        let component = self.component()?;
        let defaults = self.defaults(&component);
        let writer = ResourceWriter::new(self.templates_dir());

        let mut written = Vec::with_capacity(templates.len());
        for mut template in templates {
            self.resolver.resolve_all(&mut template, &defaults, self.prompt)?;
            written.push(writer.write(&template, &component)?);
        }
        Ok(written)
    }
}
