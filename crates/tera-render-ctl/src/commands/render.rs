//! `render`: one template, one row.

use tera_render::extension::{self, FUNCTION_NAME};
use tera_render::host::{CallArgument, DataChunk, Value};

use super::{option_arguments, registry};
use crate::cli::RenderArgs;
use crate::cli_config::CliConfig;
use crate::error::CtlResult;
use crate::output;

pub(crate) fn handle_render_command(args: RenderArgs, config: &CliConfig) -> CtlResult<()> {
    let mut arguments = vec![CallArgument::constant(Value::varchar(args.template))];
    if let Some(context) = args.context {
        arguments.push(CallArgument::constant(Value::varchar(context)));
    }
    arguments.extend(option_arguments(&args.options, config));

    let chunk = DataChunk::from_call_site(&arguments, 1, |_| None)?;
    let result = extension::invoke(&registry(), FUNCTION_NAME, &arguments, &chunk)?;

    output::row(result.get(0));
    Ok(())
}
