//! Styled terminal output for `tera-render-ctl`.
//!
//! Rendered text goes to the raw stdout, byte for byte, so escape sequences a template
//! produces survive piping. Everything else goes through `anstream`, which strips the
//! styling when the stream is not a terminal; diagnostics go to stderr.

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{DIM, ERROR, HEADER, LABEL, NULL, WARNING};

/// Print rendered text exactly, followed by a newline.
pub(crate) fn rendered(text: &str) {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}").ok();
}

/// Print one batch row: the text, or a styled `NULL` for an absent value.
pub(crate) fn row(value: Option<&str>) {
    match value {
        Some(text) => rendered(text),
        None => {
            let mut out = anstream::stdout().lock();
            writeln!(out, "{NULL}NULL{NULL:#}").ok();
        }
    }
}

/// Print an error message to stderr (red X prefix).
pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

pub(crate) fn warning(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

pub(crate) fn header(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADER}{msg}{HEADER:#}").ok();
}

/// Print a labeled value ("  Label: value" with the label bolded).
pub(crate) fn label(name: impl std::fmt::Display, value: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {LABEL}{name}:{LABEL:#} {value}").ok();
}

pub(crate) fn item(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  • {msg}").ok();
}

pub(crate) fn dim(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{DIM}{msg}{DIM:#}").ok();
}
