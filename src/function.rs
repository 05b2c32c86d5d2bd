//! Runtime dispatch of `tera_render` over a batch.

use std::sync::Arc;

use tracing::trace;

use crate::bind_data::TeraRenderBindData;
use crate::binder;
use crate::engine::{PreparedOptions, RenderEngine, RenderRequest, TeraEngine, EMPTY_CONTEXT};
use crate::error::{BindError, ExecutionError};
use crate::host::{
    BinaryExecutor, CallArgument, DataChunk, FunctionData, ScalarKernel, StringVector,
    UnaryExecutor,
};
use crate::outcome::translate;

/// Bind and execute callbacks for `tera_render`, backed by a rendering engine.
#[derive(Debug, Clone)]
pub struct TeraRenderFunction {
    engine: Arc<dyn RenderEngine>,
}

impl Default for TeraRenderFunction {
    fn default() -> Self {
        Self::new(Arc::new(TeraEngine))
    }
}

impl TeraRenderFunction {
    pub fn new(engine: Arc<dyn RenderEngine>) -> Self {
        Self { engine }
    }

    /// Render every row of `chunk`.
    ///
    /// Positional arity is the column count minus the named options counted at bind
    /// time: 2 pairs column 0 (template) with column 1 (context) row by row, 1 renders
    /// column 0 against an empty context. Rows with an absent template or context yield
    /// an absent output without reaching the engine. The first render error fails the
    /// batch.
    pub fn evaluate(
        &self,
        chunk: &DataChunk,
        bind_data: &TeraRenderBindData,
    ) -> Result<StringVector, ExecutionError> {
        let columns = chunk.column_count();
        let arity = columns.checked_sub(bind_data.optional_args());
        let invalid_arity = || ExecutionError::InvalidArity {
            columns,
            optional_args: bind_data.optional_args(),
        };

        trace!(rows = chunk.size(), columns, ?arity, "Evaluating tera_render batch");

        let (templates, contexts) = match arity {
            Some(2) => chunk
                .column(0)
                .zip(chunk.column(1))
                .map(|(templates, contexts)| (templates, Some(contexts))),
            Some(1) => chunk.column(0).map(|templates| (templates, None)),
            _ => None,
        }
        .ok_or_else(invalid_arity)?;

        if chunk.size() == 0 {
            return Ok(StringVector::default());
        }

        let options = PreparedOptions::new(bind_data)?;
        let engine = self.engine.as_ref();
        let render_row = |template: &str, context: &str| {
            let request = RenderRequest {
                template,
                context,
                options: &options,
            };
            translate(engine, engine.render(&request))
        };

        match contexts {
            Some(contexts) => BinaryExecutor::execute(templates, contexts, render_row),
            None => UnaryExecutor::execute(templates, |template| render_row(template, EMPTY_CONTEXT)),
        }
    }
}

impl ScalarKernel for TeraRenderFunction {
    fn bind(&self, arguments: &[CallArgument]) -> Result<Box<dyn FunctionData>, BindError> {
        Ok(Box::new(binder::bind(arguments)?))
    }

    fn execute(
        &self,
        chunk: &DataChunk,
        bind_data: &dyn FunctionData,
    ) -> Result<StringVector, ExecutionError> {
        let bind_data = bind_data
            .as_any()
            .downcast_ref::<TeraRenderBindData>()
            .ok_or(ExecutionError::BindDataMismatch)?;
        self.evaluate(chunk, bind_data)
    }
}
