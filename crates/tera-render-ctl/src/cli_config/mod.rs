//! CLI configuration: default rendering options and the log filter.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use serde::Deserialize;

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Contents of `.tera-render.toml`. Every rendering option is optional; an unset option
/// is left to the function's own default.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Glob of template files; enables file mode.
    pub template_path: Option<String>,

    pub autoescape: Option<bool>,

    /// Template name suffixes that are escaped in file mode.
    pub autoescape_extensions: Option<Vec<String>>,

    /// `tracing` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            template_path: None,
            autoescape: None,
            autoescape_extensions: None,
            log_filter: default_log_filter(),
        }
    }
}
