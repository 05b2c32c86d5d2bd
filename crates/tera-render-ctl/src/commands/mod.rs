//! Command handlers for the tera-render CLI.
//!
//! Each command builds a call site the way a query would spell it and runs it through a
//! registry with the extension loaded.

pub(crate) mod batch;
pub(crate) mod info;
pub(crate) mod render;

pub(crate) use batch::handle_batch_command;
pub(crate) use info::handle_info_command;
pub(crate) use render::handle_render_command;

use tera_render::extension;
use tera_render::host::{ArgumentExpr, CallArgument, FunctionRegistry, Value};

use crate::cli::RenderOptionArgs;
use crate::cli_config::CliConfig;

pub(crate) fn registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    extension::load(&mut registry);
    registry
}

/// Named option arguments for a call site. Flags win over config values; options set in
/// neither place are left out so the function's defaults apply.
pub(crate) fn option_arguments(flags: &RenderOptionArgs, config: &CliConfig) -> Vec<CallArgument> {
    let mut arguments = Vec::new();

    if let Some(autoescape) = flags.autoescape.or(config.autoescape) {
        arguments.push(CallArgument::constant(Value::Boolean(autoescape)).named("autoescape"));
    }

    if let Some(path) = flags.template_path.as_ref().or(config.template_path.as_ref()) {
        arguments.push(CallArgument::constant(Value::varchar(path.as_str())).named("template_path"));
    }

    let extensions = if flags.autoescape_extensions.is_empty() {
        config.autoescape_extensions.as_deref()
    } else {
        Some(flags.autoescape_extensions.as_slice())
    };
    if let Some(extensions) = extensions {
        let items = extensions
            .iter()
            .map(|ext| ArgumentExpr::Constant(Value::varchar(ext.as_str())))
            .collect();
        arguments.push(CallArgument::list(items).named("autoescape_extensions"));
    }

    arguments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(arguments: &[CallArgument]) -> Vec<&str> {
        arguments.iter().filter_map(CallArgument::alias).collect()
    }

    #[test]
    fn test_nothing_set_adds_no_options() {
        let arguments = option_arguments(&RenderOptionArgs::default(), &CliConfig::default());
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_config_values_become_options() {
        let config = CliConfig {
            autoescape: Some(false),
            template_path: Some("t/*".into()),
            autoescape_extensions: Some(vec![".html".into()]),
            ..CliConfig::default()
        };
        let arguments = option_arguments(&RenderOptionArgs::default(), &config);
        assert_eq!(
            names(&arguments),
            vec!["autoescape", "template_path", "autoescape_extensions"]
        );
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            autoescape: Some(false),
            autoescape_extensions: Some(vec![".html".into()]),
            ..CliConfig::default()
        };
        let flags = RenderOptionArgs {
            autoescape: Some(true),
            autoescape_extensions: vec![".xml".into()],
            ..RenderOptionArgs::default()
        };
        let arguments = option_arguments(&flags, &config);
        assert_eq!(
            arguments[0].evaluate_constant(),
            Some(Value::Boolean(true))
        );
        assert_eq!(
            arguments[1].evaluate_constant(),
            Some(Value::list(vec![Value::varchar(".xml")]))
        );
    }
}
