//! The slice of a host query engine that a scalar function is written against.
//!
//! Covers what `tera_render` needs from its host: argument expressions at bind time,
//! string columns at execution time, null-propagating executors, and the function
//! registration contract.

mod argument;
mod executor;
mod function;
mod registry;
mod types;
mod vector;

pub use argument::{ArgumentExpr, CallArgument};
pub use executor::{BinaryExecutor, UnaryExecutor};
pub use function::{
    BoundFunction, FunctionData, NullHandling, ScalarFunction, ScalarFunctionSet, ScalarKernel,
    Stability,
};
pub use registry::FunctionRegistry;
pub use types::{LogicalType, Value};
pub use vector::{DataChunk, StringVector};
