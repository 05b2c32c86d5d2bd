//! `batch`: a column of templates read from newline-delimited JSON.

use std::path::Path;

use serde::Deserialize;
use tera_render::extension::{self, FUNCTION_NAME};
use tera_render::host::{CallArgument, DataChunk, LogicalType, StringVector, Value};

use super::{option_arguments, registry};
use crate::cli::BatchArgs;
use crate::cli_config::CliConfig;
use crate::error::{CtlError, CtlResult};
use crate::output;

const TEMPLATE_COLUMN: &str = "template";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchRow {
    template: Option<String>,
}

pub(crate) fn handle_batch_command(args: BatchArgs, config: &CliConfig) -> CtlResult<()> {
    let templates = read_templates(&args.file)?;
    tracing::debug!(path = ?args.file, rows = templates.len(), "Read batch");
    if templates.is_empty() {
        output::warning(format!("{} has no rows", args.file.display()));
        return Ok(());
    }

    let mut arguments = vec![CallArgument::column(TEMPLATE_COLUMN, LogicalType::Varchar)];
    if let Some(context) = args.context {
        arguments.push(CallArgument::constant(Value::varchar(context)));
    }
    arguments.extend(option_arguments(&args.options, config));

    let chunk = DataChunk::from_call_site(&arguments, templates.len(), |name| {
        (name == TEMPLATE_COLUMN).then_some(&templates)
    })?;
    let results = extension::invoke(&registry(), FUNCTION_NAME, &arguments, &chunk)?;

    for value in results.iter() {
        output::row(value);
    }
    Ok(())
}

fn read_templates(path: &Path) -> CtlResult<StringVector> {
    let contents = std::fs::read_to_string(path).map_err(|source| CtlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(&contents).map_err(|(line, source)| CtlError::BatchLine {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Parse one row per non-blank line. Errors carry the 1-based line number.
fn parse_rows(contents: &str) -> Result<StringVector, (usize, serde_json::Error)> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<BatchRow>(line)
                .map(|row| row.template)
                .map_err(|e| (index + 1, e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(StringVector::from)
}
