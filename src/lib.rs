//! # tera-render
//!
//! The `tera_render` scalar function: renders a Tera template per row against a JSON
//! context, with rendering options fixed once per call site.
//!
//! ```text
//! tera_render(template [, context] [, autoescape := BOOLEAN]
//!             [, template_path := VARCHAR] [, autoescape_extensions := VARCHAR[]])
//! ```
//!
//! - [`binder`] resolves named options into [`TeraRenderBindData`] at bind time.
//! - [`function::TeraRenderFunction`] dispatches a batch by positional arity.
//! - [`outcome`] copies engine results out and releases every buffer exactly once.
//! - [`extension`] registers the function set with a [`host::FunctionRegistry`].
//!
//! ## Example
//!
//! ```
//! use tera_render::host::{CallArgument, DataChunk, FunctionRegistry, LogicalType, Value};
//! use tera_render::extension::{self, FUNCTION_NAME};
//!
//! let mut registry = FunctionRegistry::new();
//! extension::load(&mut registry);
//!
//! let arguments = [
//!     CallArgument::constant(Value::varchar("Hello, {{ name }}!")),
//!     CallArgument::constant(Value::varchar(r#"{"name": "World"}"#)),
//! ];
//! let chunk = DataChunk::from_call_site(&arguments, 1, |_| None).unwrap();
//! let out = extension::invoke(&registry, FUNCTION_NAME, &arguments, &chunk).unwrap();
//! assert_eq!(out.get(0), Some("Hello, World!"));
//! ```

pub mod bind_data;
pub mod binder;
pub mod engine;
pub mod error;
pub mod extension;
pub mod function;
pub mod host;
pub mod options;
pub mod outcome;

pub use bind_data::TeraRenderBindData;
pub use engine::{RenderEngine, TeraEngine};
pub use error::{BindError, Error, ExecutionError, Result};
pub use extension::{EXTENSION_NAME, EXTENSION_VERSION, FUNCTION_NAME};
pub use function::TeraRenderFunction;
