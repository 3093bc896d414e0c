//! User input and interaction handling.
//! Every interactive step of a run goes through the [`Prompter`] trait so the
//! pipeline can be driven by a scripted implementation in tests.

use crate::constants::NEW_LABEL;
use crate::error::{Error, Result};
use dialoguer::{FuzzySelect, Input, Select};

/// Outcome of a "choose an existing entry or type a new one" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The offered item at this index was picked
    Existing(usize),
    /// The user typed a name that was not in the list
    Created(String),
    /// The user dismissed the prompt
    Cancelled,
}

/// Blocking interactive input.
///
/// Each call waits until the user answers. Interrupted sessions and
/// unreadable input are reported as [`Error::PromptError`].
pub trait Prompter {
    /// Asks for a free-form value labeled with `label`.
    fn ask(&self, label: &str) -> Result<String>;

    /// Lets the user pick one of `items` and returns its index.
    fn choose_one(&self, label: &str, items: &[String]) -> Result<usize>;

    /// Lets the user pick one of `items` or type a new entry.
    fn choose_or_create(&self, label: &str, items: &[String]) -> Result<Choice>;

    /// Shows an informational message to the user.
    fn announce(&self, message: &str) {
        println!("{message}");
    }
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, label: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn choose_one(&self, label: &str, items: &[String]) -> Result<usize> {
        FuzzySelect::new()
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn choose_or_create(&self, label: &str, items: &[String]) -> Result<Choice> {
        let mut entries = items.to_vec();
        entries.push(NEW_LABEL.to_string());

        let selection = Select::new()
            .with_prompt(label)
            .items(&entries)
            .default(0)
            .interact_opt()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        match selection {
            None => Ok(Choice::Cancelled),
            Some(index) if index == items.len() => {
                let name = Input::<String>::new()
                    .with_prompt("Name")
                    .validate_with(|input: &String| -> std::result::Result<(), &str> {
                        if input.trim().is_empty() {
                            Err("name must not be empty")
                        } else {
                            Ok(())
                        }
                    })
                    .interact_text()
                    .map_err(|e| Error::PromptError(e.to_string()))?;
                Ok(Choice::Created(name.trim().to_string()))
            }
            Some(index) => Ok(Choice::Existing(index)),
        }
    }
}
