//! Template rendering against a JSON context.

use std::error::Error as _;

use serde_json::Value;
use tera::{Context, Tera};
use tracing::debug;

use crate::autoescape::intern_suffixes;
use crate::filters;

/// Name under which inline template text is compiled.
pub const INLINE_TEMPLATE_NAME: &str = "__tera_render_inline";

/// Serialized context used when a call supplies no context argument.
pub const EMPTY_CONTEXT: &str = "{}";

/// Options fixed for a call site and applied to every render.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Glob selecting template files. Empty means the template is inline text.
    pub template_path: &'a str,
    /// Escape interpolated values as HTML entities.
    pub autoescape: bool,
    /// File mode only: suffixes of template names that get escaped.
    pub autoescape_on: &'a [&'a str],
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            template_path: "",
            autoescape: true,
            autoescape_on: &[],
        }
    }
}

impl RenderOptions<'_> {
    pub fn is_file_mode(&self) -> bool {
        !self.template_path.is_empty()
    }
}

/// Why a render produced no output.
#[derive(Debug, thiserror::Error)]
pub enum RenderFailure {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Template loading error: {0}")]
    TemplateLoad(#[source] tera::Error),

    #[error("Tera render error: {0}")]
    Render(#[source] tera::Error),

    #[error("{what} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        what: &'static str,
        source: std::str::Utf8Error,
    },

    #[error("rendered output contains a NUL byte at offset {0}")]
    InteriorNul(usize),
}

impl RenderFailure {
    /// The error message followed by one `Caused by:` line per nested tera error.
    ///
    /// Tera keeps the useful detail (missing variable names, parse locations) in the
    /// source chain rather than in the top-level message.
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        if let Self::TemplateLoad(error) | Self::Render(error) = self {
            let mut source = error.source();
            while let Some(cause) = source {
                message.push_str("\nCaused by: ");
                message.push_str(&cause.to_string());
                source = cause.source();
            }
        }
        message
    }
}

/// Render `template_source` with variables taken from `context_json`.
///
/// Keys of a JSON object become template variables. Any other JSON value renders
/// against an empty context.
pub fn render(
    template_source: &str,
    context_json: &str,
    options: &RenderOptions<'_>,
) -> Result<String, RenderFailure> {
    let context = parse_context(context_json)?;

    if options.is_file_mode() {
        render_file(template_source, &context, options)
    } else {
        render_inline(template_source, &context, options.autoescape)
    }
}

fn parse_context(context_json: &str) -> Result<Context, RenderFailure> {
    let value: Value = serde_json::from_str(context_json).map_err(RenderFailure::InvalidJson)?;

    let mut context = Context::new();
    if let Value::Object(map) = value {
        for (key, value) in map {
            context.insert(key, &value);
        }
    }
    Ok(context)
}

fn render_inline(source: &str, context: &Context, autoescape: bool) -> Result<String, RenderFailure> {
    let mut tera = Tera::default();
    filters::register(&mut tera);
    tera.add_raw_template(INLINE_TEMPLATE_NAME, source)
        .map_err(RenderFailure::Render)?;
    tera.autoescape_on(if autoescape {
        vec![INLINE_TEMPLATE_NAME]
    } else {
        vec![]
    });

    tera.render(INLINE_TEMPLATE_NAME, context)
        .map_err(RenderFailure::Render)
}

fn render_file(
    template_name: &str,
    context: &Context,
    options: &RenderOptions<'_>,
) -> Result<String, RenderFailure> {
    // Reloaded on every call: the matched files may change between rows.
    let mut tera = Tera::new(options.template_path).map_err(RenderFailure::TemplateLoad)?;
    filters::register(&mut tera);

    if options.autoescape && !options.autoescape_on.is_empty() {
        tera.autoescape_on(intern_suffixes(options.autoescape_on));
    } else {
        tera.autoescape_on(vec![]);
    }

    debug!(
        template = template_name,
        glob = options.template_path,
        loaded = tera.get_template_names().count(),
        "Rendering template from files"
    );

    tera.render(template_name, context)
        .map_err(RenderFailure::Render)
}
