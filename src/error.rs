//! Error types for binding and executing `tera_render`.

use crate::host::LogicalType;
use crate::options::ExpectedType;

/// Failures while resolving a call site. All of them abort compilation of the statement,
/// except [`BindError::ParameterNotResolved`], which asks the host to bind again once
/// placeholders have values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("tera_render takes at least one argument")]
    NoArguments,

    #[error("tera_render: parameter not resolved, bind again once it has a value")]
    ParameterNotResolved,

    #[error("tera_render: arguments must be constant (argument {position})")]
    NonConstantArgument { position: usize },

    #[error("tera_render: Unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("tera_render: '{argument}' argument must be a {expected} it is {actual}")]
    TypeMismatch {
        argument: &'static str,
        expected: ExpectedType,
        actual: LogicalType,
    },

    #[error("tera_render: '{argument}' child must be a string it is {actual} value is {value}")]
    ListElementTypeMismatch {
        argument: &'static str,
        actual: LogicalType,
        value: String,
    },

    #[error("tera_render: '{argument}' must not contain a NUL byte")]
    NulByte { argument: &'static str },

    #[error("Function '{0}' does not exist")]
    UnknownFunction(String),
}

impl BindError {
    /// Whether binding should be retried later rather than reported to the user.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::ParameterNotResolved)
    }
}

/// Failures while processing a batch. Any of them fails the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error(
        "Invalid number of arguments to tera_render: {columns} columns with {optional_args} named options"
    )]
    InvalidArity { columns: usize, optional_args: usize },

    #[error("Error rendering template: {0}")]
    Render(String),

    #[error("column {column} has {actual} rows, expected {expected}")]
    RaggedChunk {
        column: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("argument {position} has no value at execution time")]
    UnresolvedArgument { position: usize },

    #[error("tera_render: '{option}' contains a NUL byte")]
    InvalidOption { option: &'static str },

    #[error("tera_render executed with bind data of another function")]
    BindDataMismatch,
}

/// Any error raised by the `tera_render` function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

pub type Result<T> = std::result::Result<T, Error>;
