//! Bind-time resolution of `tera_render` call sites.
//!
//! Runs once per call site while the statement is compiled. The first argument (the
//! template or template name) is left alone; every later argument is checked in
//! order and the recognized named options are folded into [`TeraRenderBindData`].

use tracing::debug;

use crate::bind_data::TeraRenderBindData;
use crate::error::BindError;
use crate::host::CallArgument;
use crate::options::NamedOption;

/// Resolve the call site's arguments into bind data.
///
/// Per argument after the first:
/// - an unresolved placeholder defers binding ([`BindError::ParameterNotResolved`])
/// - a non-constant expression is rejected
/// - an unnamed argument is skipped
/// - a recognized name is type-checked, evaluated and counted
/// - any other name is rejected
///
/// Deterministic: binding the same arguments again yields equal bind data.
pub fn bind(arguments: &[CallArgument]) -> Result<TeraRenderBindData, BindError> {
    if arguments.is_empty() {
        return Err(BindError::NoArguments);
    }

    let mut bind_data = TeraRenderBindData::default();

    for (position, argument) in arguments.iter().enumerate().skip(1) {
        if argument.has_parameter() {
            return Err(BindError::ParameterNotResolved);
        }
        if !argument.is_foldable() {
            return Err(BindError::NonConstantArgument { position });
        }
        let Some(name) = argument.alias() else {
            // Unnamed trailing arguments are accepted and unused.
            continue;
        };

        let option: NamedOption = name.parse()?;
        option.check_type(&argument.return_type)?;
        let value = argument
            .evaluate_constant()
            .ok_or(BindError::NonConstantArgument { position })?;
        bind_data.apply(option.convert(value)?);
    }

    debug!(
        template_path = bind_data.template_path(),
        autoescape = bind_data.autoescape(),
        autoescape_on = ?bind_data.autoescape_on(),
        optional_args = bind_data.optional_args(),
        "Bound tera_render call site"
    );

    Ok(bind_data)
}
