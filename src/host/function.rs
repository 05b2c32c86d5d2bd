//! Scalar function contract between the host and a function implementation.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::argument::CallArgument;
use super::types::LogicalType;
use super::vector::{DataChunk, StringVector};
use crate::error::{BindError, ExecutionError};

/// Per-call-site state produced at bind time and read at execution time.
///
/// Implementations are immutable after bind; the host may share them across threads
/// and compare them to deduplicate plans.
pub trait FunctionData: Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// An independent duplicate.
    fn copy(&self) -> Box<dyn FunctionData>;

    /// Structural equality; data of another concrete type is never equal.
    fn equals(&self, other: &dyn FunctionData) -> bool;
}

/// How the host treats absent inputs. Honoured by [`BoundFunction::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullHandling {
    /// Any absent input yields an absent output without calling the function.
    Default,
    /// The function receives every row and propagates absence itself.
    Special,
}

/// Whether results may be cached or folded across calls with equal inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Consistent,
    Volatile,
}

/// Bind and execute callbacks for one scalar function.
pub trait ScalarKernel: Send + Sync + fmt::Debug {
    fn bind(&self, arguments: &[CallArgument]) -> Result<Box<dyn FunctionData>, BindError>;

    fn execute(
        &self,
        chunk: &DataChunk,
        bind_data: &dyn FunctionData,
    ) -> Result<StringVector, ExecutionError>;
}

/// One overload of a scalar function.
#[derive(Debug, Clone)]
pub struct ScalarFunction {
    pub name: String,
    pub arguments: Vec<LogicalType>,
    pub varargs: Option<LogicalType>,
    pub return_type: LogicalType,
    pub null_handling: NullHandling,
    pub stability: Stability,
    pub kernel: Arc<dyn ScalarKernel>,
}

impl ScalarFunction {
    /// Whether this overload can take `positional` unnamed arguments.
    pub fn accepts(&self, positional: usize) -> bool {
        positional == self.arguments.len()
            || (self.varargs.is_some() && positional > self.arguments.len())
    }

    /// Human-readable signature, e.g. `tera_render(VARCHAR, JSON, ANY...) -> VARCHAR`.
    pub fn signature(&self) -> String {
        let mut params: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
        if let Some(varargs) = &self.varargs {
            params.push(format!("{varargs}..."));
        }
        format!("{}({}) -> {}", self.name, params.join(", "), self.return_type)
    }
}

/// Overloads registered under one name.
#[derive(Debug, Clone)]
pub struct ScalarFunctionSet {
    pub name: String,
    pub overloads: Vec<ScalarFunction>,
}

impl ScalarFunctionSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overloads: Vec::new(),
        }
    }

    pub fn add_function(&mut self, function: ScalarFunction) {
        self.overloads.push(function);
    }

    /// Pick the overload with the most fixed arguments that accepts `positional`.
    ///
    /// When none accepts it the first overload is returned so its bind callback can
    /// report the arity problem in its own terms.
    pub fn select(&self, positional: usize) -> Option<&ScalarFunction> {
        self.overloads
            .iter()
            .filter(|f| f.accepts(positional))
            .max_by_key(|f| f.arguments.len())
            .or_else(|| self.overloads.first())
    }
}

/// A function resolved and bound for one call site.
#[derive(Debug)]
pub struct BoundFunction {
    pub function: ScalarFunction,
    pub bind_data: Box<dyn FunctionData>,
}

impl BoundFunction {
    /// Run the kernel over `chunk`.
    ///
    /// Under [`NullHandling::Default`] the kernel only sees rows where every input is
    /// present; the other rows come back absent. Under [`NullHandling::Special`] it
    /// sees the whole chunk.
    pub fn execute(&self, chunk: &DataChunk) -> Result<StringVector, ExecutionError> {
        let kernel = &self.function.kernel;
        let bind_data = self.bind_data.as_ref();

        if self.function.null_handling == NullHandling::Special {
            return kernel.execute(chunk, bind_data);
        }

        let complete: Vec<usize> = (0..chunk.size())
            .filter(|&row| chunk.row_is_complete(row))
            .collect();
        if complete.len() == chunk.size() {
            return kernel.execute(chunk, bind_data);
        }

        let mut computed = kernel
            .execute(&chunk.select(&complete), bind_data)?
            .into_inner()
            .into_iter();
        let mut complete = complete.into_iter().peekable();
        let mut result = StringVector::with_capacity(chunk.size());
        for row in 0..chunk.size() {
            let value = if complete.next_if_eq(&row).is_some() {
                computed.next().flatten()
            } else {
                None
            };
            result.push(value);
        }
        Ok(result)
    }
}

impl Clone for BoundFunction {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            bind_data: self.bind_data.copy(),
        }
    }
}

impl PartialEq for BoundFunction {
    fn eq(&self, other: &Self) -> bool {
        self.function.name == other.function.name
            && self.function.arguments == other.function.arguments
            && self.bind_data.equals(other.bind_data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NoopKernel;

    impl ScalarKernel for NoopKernel {
        fn bind(&self, _: &[CallArgument]) -> Result<Box<dyn FunctionData>, BindError> {
            Err(BindError::NoArguments)
        }

        fn execute(&self, chunk: &DataChunk, _: &dyn FunctionData) -> Result<StringVector, ExecutionError> {
            Ok(StringVector::from(vec![None; chunk.size()]))
        }
    }

    fn overload(arguments: Vec<LogicalType>) -> ScalarFunction {
        ScalarFunction {
            name: "f".to_string(),
            arguments,
            varargs: Some(LogicalType::Any),
            return_type: LogicalType::Varchar,
            null_handling: NullHandling::Special,
            stability: Stability::Volatile,
            kernel: Arc::new(NoopKernel),
        }
    }

    /// Marks each row it sees, showing absent inputs as `null`.
    #[derive(Debug)]
    struct MarkingKernel;

    impl ScalarKernel for MarkingKernel {
        fn bind(&self, _: &[CallArgument]) -> Result<Box<dyn FunctionData>, BindError> {
            Err(BindError::NoArguments)
        }

        fn execute(&self, chunk: &DataChunk, _: &dyn FunctionData) -> Result<StringVector, ExecutionError> {
            let input = chunk.column(0).ok_or(ExecutionError::BindDataMismatch)?;
            Ok(input
                .iter()
                .map(|value| Some(format!("seen:{}", value.unwrap_or("null"))))
                .collect::<Vec<_>>()
                .into())
        }
    }

    #[derive(Debug)]
    struct NoData;

    impl FunctionData for NoData {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn copy(&self) -> Box<dyn FunctionData> {
            Box::new(NoData)
        }
        fn equals(&self, other: &dyn FunctionData) -> bool {
            other.as_any().is::<NoData>()
        }
    }

    fn bound(null_handling: NullHandling) -> BoundFunction {
        BoundFunction {
            function: ScalarFunction {
                null_handling,
                kernel: Arc::new(MarkingKernel),
                ..overload(vec![LogicalType::Varchar])
            },
            bind_data: Box::new(NoData),
        }
    }

    fn sample_chunk() -> DataChunk {
        DataChunk::new(vec![
            [Some("a"), None, Some("c")].into_iter().collect(),
            [Some("x"), Some("y"), None].into_iter().collect(),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_null_handling_skips_incomplete_rows() {
        let out = bound(NullHandling::Default).execute(&sample_chunk()).unwrap();
        assert_eq!(out.into_inner(), vec![Some("seen:a".to_string()), None, None]);
    }

    #[test]
    fn test_special_null_handling_passes_every_row() {
        let out = bound(NullHandling::Special).execute(&sample_chunk()).unwrap();
        assert_eq!(
            out.into_inner(),
            vec![
                Some("seen:a".to_string()),
                Some("seen:null".to_string()),
                Some("seen:c".to_string()),
            ]
        );
    }

    /// Compile-time proof that the contracts are object-safe
    fn _assert_object_safe(_: &dyn FunctionData, _: &dyn ScalarKernel) {}

    #[test]
    fn test_select_prefers_most_fixed_arguments() {
        let mut set = ScalarFunctionSet::new("f");
        set.add_function(overload(vec![LogicalType::Varchar, LogicalType::Json]));
        set.add_function(overload(vec![LogicalType::Varchar]));

        assert_eq!(set.select(1).unwrap().arguments.len(), 1);
        assert_eq!(set.select(2).unwrap().arguments.len(), 2);
        // Varargs absorb the third positional argument.
        assert_eq!(set.select(3).unwrap().arguments.len(), 2);
        // Nothing fits zero arguments; fall back to the first overload.
        assert_eq!(set.select(0).unwrap().arguments.len(), 2);
    }

    #[test]
    fn test_signature_display() {
        let f = overload(vec![LogicalType::Varchar, LogicalType::Json]);
        assert_eq!(f.signature(), "f(VARCHAR, JSON, ANY...) -> VARCHAR");
    }
}
