//! Registration of `tera_render` with a host.

use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::engine::{RenderEngine, TeraEngine};
use crate::error::Result;
use crate::function::TeraRenderFunction;
use crate::host::{
    CallArgument, DataChunk, FunctionRegistry, LogicalType, NullHandling, ScalarFunction,
    ScalarFunctionSet, Stability, StringVector,
};

pub const FUNCTION_NAME: &str = "tera_render";
pub const EXTENSION_NAME: &str = "tera";
pub const EXTENSION_VERSION: &str = "2025101901";

/// Process-wide record that the extension has been loaded.
#[derive(Debug)]
pub struct ExtensionHandle {
    name: &'static str,
    version: &'static str,
}

impl ExtensionHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> &'static str {
        self.version
    }
}

static HANDLE: OnceLock<ExtensionHandle> = OnceLock::new();

/// Build the `tera_render` function set over `engine`.
///
/// Both overloads take trailing `ANY` varargs so named options can follow the
/// positional arguments.
pub fn function_set(engine: Arc<dyn RenderEngine>) -> ScalarFunctionSet {
    let kernel = Arc::new(TeraRenderFunction::new(engine));
    let overload = |arguments: Vec<LogicalType>| ScalarFunction {
        name: FUNCTION_NAME.to_string(),
        arguments,
        varargs: Some(LogicalType::Any),
        return_type: LogicalType::Varchar,
        null_handling: NullHandling::Special,
        stability: Stability::Volatile,
        kernel: kernel.clone(),
    };

    let mut set = ScalarFunctionSet::new(FUNCTION_NAME);
    set.add_function(overload(vec![LogicalType::Varchar, LogicalType::Json]));
    set.add_function(overload(vec![LogicalType::Varchar]));
    set
}

/// Register `tera_render` with the Tera engine. Loading into a registry that already
/// has it does nothing.
pub fn load(registry: &mut FunctionRegistry) -> &'static ExtensionHandle {
    load_with_engine(registry, Arc::new(TeraEngine))
}

pub fn load_with_engine(
    registry: &mut FunctionRegistry,
    engine: Arc<dyn RenderEngine>,
) -> &'static ExtensionHandle {
    let handle = HANDLE.get_or_init(|| {
        info!(
            extension = EXTENSION_NAME,
            version = EXTENSION_VERSION,
            "Loading extension"
        );
        ExtensionHandle {
            name: EXTENSION_NAME,
            version: EXTENSION_VERSION,
        }
    });

    if registry.contains(FUNCTION_NAME) {
        debug!(function = FUNCTION_NAME, "Already registered, skipping");
    } else {
        registry.register(function_set(engine));
    }
    handle
}

/// The handle of a loaded extension, if any registry has loaded it in this process.
pub fn loaded() -> Option<&'static ExtensionHandle> {
    HANDLE.get()
}

/// Bind `name` against `arguments` and execute it over `chunk`, as a host does for one
/// statement.
pub fn invoke(
    registry: &FunctionRegistry,
    name: &str,
    arguments: &[CallArgument],
    chunk: &DataChunk,
) -> Result<StringVector> {
    let bound = registry.bind(name, arguments)?;
    Ok(bound.execute(chunk)?)
}
