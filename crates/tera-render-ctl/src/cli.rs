//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output;

/// Render Tera templates against JSON context, the way `tera_render` does in a query
#[derive(Parser, Debug)]
#[command(name = "tera-render-ctl", version, about, long_about = None, styles = output::clap_styles())]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of discovering `.tera-render.toml`
    #[arg(long, global = true, env = "TERA_RENDER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Render one template
    Render(RenderArgs),

    /// Render every template in a newline-delimited JSON file
    Batch(BatchArgs),

    /// Show the registered function and its overloads
    Info,
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Template text, or a template name when --template-path is set
    pub template: String,

    /// JSON context; its top-level keys become template variables
    #[arg(long, short)]
    pub context: Option<String>,

    #[command(flatten)]
    pub options: RenderOptionArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// File with one `{"template": ...}` object per line
    pub file: PathBuf,

    /// JSON context shared by every row
    #[arg(long, short)]
    pub context: Option<String>,

    #[command(flatten)]
    pub options: RenderOptionArgs,
}

/// Rendering options. Each one given here overrides the config file.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct RenderOptionArgs {
    /// Glob of template files to load (file mode)
    #[arg(long, value_name = "GLOB")]
    pub template_path: Option<String>,

    /// Escape interpolated values
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub autoescape: Option<bool>,

    /// Template name suffix to escape in file mode (repeatable)
    #[arg(long = "autoescape-extension", value_name = "EXT")]
    pub autoescape_extensions: Vec<String>,
}
