//! Common constants used throughout helm-scaffold.

/// Supported configuration file names, looked up in the chart directory
pub const CONFIG_FILES: [&str; 3] =
    [".helm-scaffold.json", ".helm-scaffold.yml", ".helm-scaffold.yaml"];

/// Extensions of files the catalog treats as templates
pub const TEMPLATE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "tpl"];

/// Default placeholder grammar: `%%NAME%%`
pub const DEFAULT_PATTERN: &str = r"%%(\w+)%%";

/// Chart metadata file
pub const CHART_FILE: &str = "Chart.yaml";

/// Directory inside a chart holding its resource templates
pub const CHART_TEMPLATES_DIR: &str = "templates";

/// Default-table key for the chart name
pub const CHARTNAME_KEY: &str = "CHARTNAME";

/// Default-table key for the active component
pub const COMPONENT_NAME_KEY: &str = "COMPONENT_NAME";

pub const CANCEL_LABEL: &str = "⬅️ Cancel";
pub const USE_ROOT_LABEL: &str = "None (use root)";
pub const NEW_LABEL: &str = "➕ New";
