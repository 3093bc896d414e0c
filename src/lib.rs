//! helm-scaffold adds boilerplate resource files to a Helm chart.
//! It discovers templates in a template library, resolves their `%%NAME%%`
//! placeholders from known defaults or interactive input and writes the
//! rendered result into the chart without overwriting existing files.

/// Template discovery and single/multiple selection
pub mod catalog;

/// Chart metadata, component discovery and run orchestration
pub mod chart;

/// Command-line interface module
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (.helm-scaffold.json, .helm-scaffold.yml, .helm-scaffold.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Logger initialization
pub mod logger;

/// User input and interaction handling
pub mod prompt;

/// Placeholder extraction and value resolution
pub mod resolver;

/// In-memory templates and rendering
pub mod template;

/// Collision-safe resource writing
pub mod writer;
