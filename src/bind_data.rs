//! Bind data for one `tera_render` call site.

use std::any::Any;

use crate::host::FunctionData;
use crate::options::OptionValue;

/// Options resolved at bind time. Immutable once built.
///
/// Equality is structural over every field, and `autoescape_on` compares in order
/// even though it behaves as a set when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeraRenderBindData {
    template_path: String,
    autoescape: bool,
    autoescape_on: Vec<String>,
    optional_args: usize,
}

impl Default for TeraRenderBindData {
    fn default() -> Self {
        Self {
            template_path: String::new(),
            autoescape: true,
            autoescape_on: Vec::new(),
            optional_args: 0,
        }
    }
}

impl TeraRenderBindData {
    pub fn new(
        template_path: impl Into<String>,
        autoescape: bool,
        autoescape_on: Vec<String>,
        optional_args: usize,
    ) -> Self {
        Self {
            template_path: template_path.into(),
            autoescape,
            autoescape_on,
            optional_args,
        }
    }

    /// Glob for file mode; empty for inline templates.
    pub fn template_path(&self) -> &str {
        &self.template_path
    }

    pub fn autoescape(&self) -> bool {
        self.autoescape
    }

    pub fn autoescape_on(&self) -> &[String] {
        &self.autoescape_on
    }

    /// Named arguments recognized at bind time. They still occupy columns at execution.
    pub fn optional_args(&self) -> usize {
        self.optional_args
    }

    pub fn is_file_mode(&self) -> bool {
        !self.template_path.is_empty()
    }

    /// Fold one validated option in. Later values for the same option win.
    pub(crate) fn apply(&mut self, value: OptionValue) {
        match value {
            OptionValue::Autoescape(autoescape) => self.autoescape = autoescape,
            OptionValue::TemplatePath(path) => self.template_path = path,
            OptionValue::AutoescapeExtensions(extensions) => self.autoescape_on = extensions,
        }
        self.optional_args += 1;
    }
}

impl FunctionData for TeraRenderBindData {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn copy(&self) -> Box<dyn FunctionData> {
        Box::new(self.clone())
    }

    fn equals(&self, other: &dyn FunctionData) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}
