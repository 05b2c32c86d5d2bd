//! The seam between `tera_render` and the rendering engine.
//!
//! Engines hand back a [`RenderOutcome`] whose buffer they own until it is passed back
//! through [`RenderEngine::release`]. Callers never release by hand: wrap the outcome
//! in [`crate::outcome::ScopedOutcome`] as soon as it is returned.

use std::ffi::{c_char, CString};
use std::fmt;
use std::ptr;

use tera_render_engine::{tera_free_outcome, tera_render_template};

pub use tera_render_engine::{RenderOutcome, EMPTY_CONTEXT};

use crate::bind_data::TeraRenderBindData;
use crate::error::ExecutionError;

/// Bind data converted once per batch into the form the engine call takes.
#[derive(Debug)]
pub struct PreparedOptions {
    template_path: CString,
    autoescape: bool,
    autoescape_on: Vec<CString>,
}

impl PreparedOptions {
    pub fn new(bind_data: &TeraRenderBindData) -> Result<Self, ExecutionError> {
        let template_path = c_string("template_path", bind_data.template_path())?;
        let autoescape_on = bind_data
            .autoescape_on()
            .iter()
            .map(|ext| c_string("autoescape_extensions", ext))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            template_path,
            autoescape: bind_data.autoescape(),
            autoescape_on,
        })
    }
}

/// Only hand-built bind data can hold a NUL; the binder rejects it.
fn c_string(option: &'static str, value: &str) -> Result<CString, ExecutionError> {
    CString::new(value).map_err(|_| ExecutionError::InvalidOption { option })
}

/// One row's input to the engine.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Template text, or a template name in file mode.
    pub template: &'a str,
    /// Serialized JSON context.
    pub context: &'a str,
    pub options: &'a PreparedOptions,
}

/// A template renderer that returns engine-owned results.
pub trait RenderEngine: Send + Sync + fmt::Debug {
    fn render(&self, request: &RenderRequest<'_>) -> RenderOutcome;

    /// Return an outcome's buffer to the engine.
    ///
    /// # Safety
    ///
    /// `outcome` must come from this engine's [`RenderEngine::render`] and must not
    /// have been released already.
    unsafe fn release(&self, outcome: RenderOutcome);
}

/// The Tera engine, called through its C ABI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeraEngine;

impl RenderEngine for TeraEngine {
    fn render(&self, request: &RenderRequest<'_>) -> RenderOutcome {
        let options = request.options;
        let path = if options.template_path.is_empty() {
            ptr::null()
        } else {
            options.template_path.as_ptr()
        };
        let suffixes: Vec<*const c_char> = options.autoescape_on.iter().map(|s| s.as_ptr()).collect();

        // SAFETY: every pointer borrows `request` or `suffixes`, both alive for the call,
        // and the lengths match the borrowed strings.
        unsafe {
            tera_render_template(
                request.template.as_ptr().cast(),
                request.template.len(),
                request.context.as_ptr().cast(),
                request.context.len(),
                path,
                options.autoescape,
                suffixes.as_ptr(),
                suffixes.len(),
            )
        }
    }

    unsafe fn release(&self, outcome: RenderOutcome) {
        // SAFETY: forwarded from this method's contract.
        unsafe { tera_free_outcome(outcome) }
    }
}
