//! `info`: what the extension registers.

use tera_render::extension::{EXTENSION_NAME, EXTENSION_VERSION, FUNCTION_NAME};
use tera_render::host::ScalarFunction;
use tera_render::options::NamedOption;

use super::registry;
use crate::error::{CtlError, CtlResult};
use crate::output;

pub(crate) fn handle_info_command() -> CtlResult<()> {
    let registry = registry();
    let set = registry.get(FUNCTION_NAME).ok_or(CtlError::NotRegistered)?;

    output::header(FUNCTION_NAME);
    output::label("Extension", EXTENSION_NAME);
    output::label("Version", EXTENSION_VERSION);
    output::label("Overloads", set.overloads.len());
    for signature in set.overloads.iter().map(ScalarFunction::signature) {
        output::item(signature);
    }
    output::dim("  named options:");
    for option in NamedOption::ALL {
        output::item(format!("{option} := {}", option.expected_type()));
    }
    Ok(())
}
