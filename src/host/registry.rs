//! Function catalog: registration, overload selection and binding.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::argument::CallArgument;
use super::function::{BoundFunction, ScalarFunctionSet};
use crate::error::BindError;

/// Scalar functions known to a host, keyed by name.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, ScalarFunctionSet>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function set. A set already registered under the same name is replaced.
    pub fn register(&mut self, set: ScalarFunctionSet) {
        if self.functions.contains_key(&set.name) {
            warn!(function = %set.name, "Replacing previously registered function set");
        }
        debug!(function = %set.name, overloads = set.overloads.len(), "Registered function set");
        self.functions.insert(set.name.clone(), set);
    }

    pub fn get(&self, name: &str) -> Option<&ScalarFunctionSet> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Resolve an overload for the call site and run its bind callback.
    ///
    /// Overloads are chosen by the number of unnamed arguments; named arguments are
    /// left for the bind callback.
    pub fn bind(&self, name: &str, arguments: &[CallArgument]) -> Result<BoundFunction, BindError> {
        let set = self
            .functions
            .get(name)
            .ok_or_else(|| BindError::UnknownFunction(name.to_string()))?;

        let positional = arguments.iter().filter(|a| a.alias().is_none()).count();
        let function = set
            .select(positional)
            .ok_or_else(|| BindError::UnknownFunction(name.to_string()))?;

        let bind_data = function.kernel.bind(arguments)?;
        Ok(BoundFunction {
            function: function.clone(),
            bind_data,
        })
    }
}
