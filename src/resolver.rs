//! Placeholder extraction and value resolution.
//! Values come from a fixed default table first and from the user second,
//! so a template only interrupts the user for the variables nobody knows.

use crate::constants::DEFAULT_PATTERN;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::template::{Placeholder, Template};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;

/// Immutable table of known variable values, built once per run.
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct Defaults(IndexMap<String, String>);

impl Defaults {
    pub fn new(values: IndexMap<String, String>) -> Self {
        Self(values)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Defaults {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Turns raw template content into a fully resolved placeholder sequence.
#[derive(Debug, Clone)]
pub struct VariableResolver {
    pattern: Regex,
}

impl VariableResolver {
    /// Creates a resolver for the given placeholder grammar.
    ///
    /// The whole match is the placeholder's pattern and the first capture
    /// group is its name.
    ///
    /// # Errors
    /// * `Error::PatternError` if the expression is invalid or has no capture group
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::PatternError(e.to_string()))?;
        if pattern.captures_len() < 2 {
            return Err(Error::PatternError(format!(
                "'{}' must capture the variable name",
                pattern.as_str()
            )));
        }
        Ok(Self { pattern })
    }

    /// Creates a resolver for the `%%NAME%%` grammar.
    pub fn with_default_pattern() -> Result<Self> {
        Self::new(DEFAULT_PATTERN)
    }

    /// Scans `content` for placeholders, keeping the first occurrence of
    /// each distinct pattern in content order. Values are left empty.
    pub fn extract(&self, content: &str) -> Vec<Placeholder> {
        let mut placeholders: Vec<Placeholder> = Vec::new();

        for captures in self.pattern.captures_iter(content) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if placeholders.iter().any(|p| p.pattern == whole.as_str()) {
                continue;
            }
            placeholders.push(Placeholder::new(whole.as_str(), name.as_str()));
        }

        placeholders
    }

    /// Returns the value for `placeholder`: the default when one exists,
    /// otherwise whatever the user answers for the variable name.
    ///
    /// # Errors
    /// * `Error::ResolutionError` if the prompt fails
    pub fn resolve(
        &self,
        placeholder: &Placeholder,
        defaults: &Defaults,
        prompt: &dyn Prompter,
    ) -> Result<String> {
        if let Some(value) = defaults.get(&placeholder.name) {
            debug!("Using default value for '{}'", placeholder.name);
            return Ok(value.to_string());
        }

        prompt.ask(&placeholder.name).map_err(|e| Error::ResolutionError {
            name: placeholder.name.clone(),
            reason: match e {
                Error::PromptError(reason) => reason,
                other => other.to_string(),
            },
        })
    }

    /// Extracts and resolves every placeholder of `template` and assigns the
    /// result back onto it.
    ///
    /// The first variable that needs user input triggers a single header
    /// naming the template. Calling this again re-derives everything from
    /// the raw content.
    pub fn resolve_all(
        &self,
        template: &mut Template,
        defaults: &Defaults,
        prompt: &dyn Prompter,
    ) -> Result<()> {
        let mut placeholders = self.extract(template.content());
        debug!(
            "Found {} variable(s) in template '{}'",
            placeholders.len(),
            template.file_name()
        );

        let mut header_shown = false;
        for placeholder in placeholders.iter_mut() {
            if !header_shown && defaults.get(&placeholder.name).is_none() {
                prompt.announce(&format!(
                    "Supply missing values for variables found in template: {}",
                    template.file_name()
                ));
                header_shown = true;
            }
            placeholder.value = self.resolve(placeholder, defaults, prompt)?;
        }

        template.set_placeholders(placeholders);
        Ok(())
    }
}
