//! Translation of engine outcomes into row values and errors.

use crate::engine::{RenderEngine, RenderOutcome};
use crate::error::ExecutionError;

/// Holds an engine outcome and returns it to the engine when dropped.
///
/// Release happens exactly once, whichever way the scope is left: normal return,
/// early `?` return or unwinding.
#[derive(Debug)]
pub struct ScopedOutcome<'e, E: RenderEngine + ?Sized> {
    engine: &'e E,
    outcome: Option<RenderOutcome>,
}

impl<'e, E: RenderEngine + ?Sized> ScopedOutcome<'e, E> {
    pub fn new(engine: &'e E, outcome: RenderOutcome) -> Self {
        Self {
            engine,
            outcome: Some(outcome),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.as_ref().is_some_and(RenderOutcome::is_ok)
    }

    /// Copy the buffer out. Invalid UTF-8 is replaced rather than rejected.
    pub fn to_owned_text(&self) -> String {
        match &self.outcome {
            // SAFETY: the outcome is held until drop, so its buffer is still owned here.
            Some(outcome) => unsafe { outcome.as_c_str() }.to_string_lossy().into_owned(),
            None => String::new(),
        }
    }
}

impl<E: RenderEngine + ?Sized> Drop for ScopedOutcome<'_, E> {
    fn drop(&mut self) {
        if let Some(outcome) = self.outcome.take() {
            // SAFETY: the outcome came from `engine.render` and `take` ensures this is
            // the only release.
            unsafe { self.engine.release(outcome) };
        }
    }
}

/// Turn an outcome into the row's output, or the batch's error.
///
/// The text is copied before the engine buffer is released, on both branches.
pub fn translate<E: RenderEngine + ?Sized>(
    engine: &E,
    outcome: RenderOutcome,
) -> Result<String, ExecutionError> {
    let scoped = ScopedOutcome::new(engine, outcome);
    let text = scoped.to_owned_text();
    if scoped.is_ok() {
        Ok(text)
    } else {
        Err(ExecutionError::Render(text))
    }
}
