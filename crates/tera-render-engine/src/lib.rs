//! Tera rendering engine used by the `tera_render` scalar function.
//!
//! The engine renders one template per call against a JSON context. It is exposed
//! two ways:
//!
//! - [`render`]: the safe Rust entry point, returning `Result<String, RenderFailure>`
//! - [`ffi`]: a C ABI (`tera_render_template` / `tera_free_outcome`) that hands back a
//!   tagged [`RenderOutcome`] whose buffer the caller owns and must release exactly once
//!
//! # Modes
//!
//! - **Inline**: an empty template path means the template argument is template text.
//! - **File**: a non-empty template path is a glob; the template argument names one of
//!   the matched files.

mod autoescape;
pub mod ffi;
mod filters;
mod render;

pub use ffi::{tera_free_outcome, tera_render_template, RenderOutcome};
pub use render::{render, RenderFailure, RenderOptions, EMPTY_CONTEXT, INLINE_TEMPLATE_NAME};
