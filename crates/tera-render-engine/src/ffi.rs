//! C ABI for the rendering engine.
//!
//! Every call to [`tera_render_template`] returns a [`RenderOutcome`] owning a
//! nul-terminated buffer allocated by this crate. The caller must pass that outcome to
//! [`tera_free_outcome`] exactly once, on both the `Ok` and `Err` paths. Panics never
//! cross this boundary: invalid input and unrepresentable output come back as `Err`.

use std::ffi::{c_char, CStr, CString};
use std::{slice, str};

use tracing::warn;

use crate::render::{render, RenderFailure, RenderOptions};

/// Tagged result of a render: the rendered text or an error message.
///
/// Both variants own their buffer. Release it with [`tera_free_outcome`].
#[repr(C)]
#[derive(Debug)]
pub enum RenderOutcome {
    Ok(*mut c_char),
    Err(*mut c_char),
}

impl RenderOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Borrow the buffer behind either variant.
    ///
    /// # Safety
    ///
    /// The outcome must come from [`tera_render_template`] (or hold a pointer obtained
    /// from `CString::into_raw`) and must not have been released yet. The returned
    /// reference must not outlive the release.
    pub unsafe fn as_c_str(&self) -> &CStr {
        let (Self::Ok(ptr) | Self::Err(ptr)) = self;
        if ptr.is_null() {
            return c"";
        }
        // SAFETY: non-null, nul-terminated and still owned per this function's contract.
        unsafe { CStr::from_ptr(*ptr) }
    }

    fn from_result(result: Result<String, RenderFailure>) -> Self {
        let result = result.and_then(|text| {
            CString::new(text).map_err(|e| RenderFailure::InteriorNul(e.nul_position()))
        });

        match result {
            Ok(text) => Self::Ok(text.into_raw()),
            Err(failure) => {
                let message = failure.detailed_message();
                warn!(error = %message, "Template render failed");
                Self::Err(error_buffer(&message).into_raw())
            }
        }
    }
}

/// Error messages may quote user input; NUL bytes are escaped so the message survives
/// the trip through a C string.
fn error_buffer(message: &str) -> CString {
    CString::new(message.replace('\0', "\\0")).unwrap_or_default()
}

/// Render a template and return a tagged, caller-owned result.
///
/// `template_path` selects file mode when non-null and non-empty. Null entries in
/// `autoescape_on` are skipped.
///
/// # Safety
///
/// - `template_source` / `json_context` must each point to at least `*_len` readable
///   bytes, or be null with a length of 0.
/// - `template_path` must be null or point to a nul-terminated string.
/// - `autoescape_on` must be null with a count of 0, or point to `autoescape_on_count`
///   pointers, each null or pointing to a nul-terminated string.
/// - All pointed-to memory must stay valid for the duration of the call.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn tera_render_template(
    template_source: *const c_char,
    template_source_len: usize,
    json_context: *const c_char,
    json_context_len: usize,
    template_path: *const c_char,
    autoescape: bool,
    autoescape_on: *const *const c_char,
    autoescape_on_count: usize,
) -> RenderOutcome {
    // SAFETY: each pointer/length pair is forwarded from this function's contract.
    let result = unsafe {
        render_raw(
            template_source,
            template_source_len,
            json_context,
            json_context_len,
            template_path,
            autoescape,
            autoescape_on,
            autoescape_on_count,
        )
    };

    RenderOutcome::from_result(result)
}

/// Release the buffer owned by a [`RenderOutcome`].
///
/// # Safety
///
/// `outcome` must come from [`tera_render_template`] and must not have been released
/// before. No reference obtained through [`RenderOutcome::as_c_str`] may be used after.
#[no_mangle]
pub unsafe extern "C" fn tera_free_outcome(outcome: RenderOutcome) {
    let (RenderOutcome::Ok(ptr) | RenderOutcome::Err(ptr)) = outcome;
    if !ptr.is_null() {
        // SAFETY: the pointer came from `CString::into_raw` and ownership returns here once.
        drop(unsafe { CString::from_raw(ptr) });
    }
}

#[allow(clippy::too_many_arguments)]
unsafe fn render_raw(
    template_source: *const c_char,
    template_source_len: usize,
    json_context: *const c_char,
    json_context_len: usize,
    template_path: *const c_char,
    autoescape: bool,
    autoescape_on: *const *const c_char,
    autoescape_on_count: usize,
) -> Result<String, RenderFailure> {
    // SAFETY: the caller upholds the contract of `tera_render_template`.
    let (template, context, path, suffixes) = unsafe {
        (
            read_str(template_source, template_source_len, "template")?,
            read_str(json_context, json_context_len, "context")?,
            read_c_str(template_path, "template path")?.unwrap_or_default(),
            read_c_str_array(autoescape_on, autoescape_on_count)?,
        )
    };

    let options = RenderOptions {
        template_path: path,
        autoescape,
        autoescape_on: &suffixes,
    };
    render(template, context, &options)
}

unsafe fn read_str<'a>(
    ptr: *const c_char,
    len: usize,
    what: &'static str,
) -> Result<&'a str, RenderFailure> {
    if ptr.is_null() || len == 0 {
        return Ok("");
    }
    // SAFETY: caller guarantees `len` readable bytes at `ptr`.
    let bytes = unsafe { slice::from_raw_parts(ptr.cast::<u8>(), len) };
    str::from_utf8(bytes).map_err(|source| RenderFailure::InvalidUtf8 { what, source })
}

unsafe fn read_c_str<'a>(
    ptr: *const c_char,
    what: &'static str,
) -> Result<Option<&'a str>, RenderFailure> {
    if ptr.is_null() {
        return Ok(None);
    }
    // SAFETY: caller guarantees a nul-terminated string at `ptr`.
    let c_str = unsafe { CStr::from_ptr(ptr) };
    c_str
        .to_str()
        .map(Some)
        .map_err(|source| RenderFailure::InvalidUtf8 { what, source })
}

unsafe fn read_c_str_array<'a>(
    ptr: *const *const c_char,
    count: usize,
) -> Result<Vec<&'a str>, RenderFailure> {
    if ptr.is_null() || count == 0 {
        return Ok(Vec::new());
    }
    // SAFETY: caller guarantees `count` pointers at `ptr`.
    let entries = unsafe { slice::from_raw_parts(ptr, count) };

    let mut suffixes = Vec::with_capacity(count);
    for &entry in entries {
        // SAFETY: each entry is null or nul-terminated per the caller's contract.
        if let Some(suffix) = unsafe { read_c_str(entry, "autoescape extension") }? {
            suffixes.push(suffix);
        }
    }
    Ok(suffixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(template: &str, context: &str, path: Option<&CStr>, suffixes: &[&CStr]) -> RenderOutcome {
        let suffix_ptrs: Vec<*const c_char> = suffixes.iter().map(|s| s.as_ptr()).collect();
        // SAFETY: all pointers borrow locals that outlive the call.
        unsafe {
            tera_render_template(
                template.as_ptr().cast(),
                template.len(),
                context.as_ptr().cast(),
                context.len(),
                path.map_or(std::ptr::null(), CStr::as_ptr),
                true,
                suffix_ptrs.as_ptr(),
                suffix_ptrs.len(),
            )
        }
    }

    fn take(outcome: RenderOutcome) -> (bool, String) {
        let ok = outcome.is_ok();
        // SAFETY: fresh outcome, released right after reading.
        let text = unsafe { outcome.as_c_str() }.to_string_lossy().into_owned();
        // SAFETY: released exactly once.
        unsafe { tera_free_outcome(outcome) };
        (ok, text)
    }

    #[test]
    fn test_ok_outcome_carries_text() {
        let (ok, text) = take(call("Hello {{ who }}", r#"{"who": "FFI"}"#, None, &[]));
        assert!(ok);
        assert_eq!(text, "Hello FFI");
    }

    #[test]
    fn test_err_outcome_carries_message() {
        let (ok, text) = take(call("{{ missing }}", "{}", None, &[]));
        assert!(!ok);
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_template_source_is_length_delimited() {
        // Only the first five bytes belong to the template.
        let buffer = "Hello, trailing bytes";
        // SAFETY: pointers borrow locals that outlive the call.
        let outcome = unsafe {
            tera_render_template(
                buffer.as_ptr().cast(),
                5,
                "{}".as_ptr().cast(),
                2,
                std::ptr::null(),
                true,
                std::ptr::null(),
                0,
            )
        };
        assert_eq!(take(outcome), (true, "Hello".to_string()));
    }

    #[test]
    fn test_empty_template_path_is_inline() {
        let (ok, text) = take(call("inline {{ 1 + 1 }}", "{}", Some(c""), &[]));
        assert!(ok);
        assert_eq!(text, "inline 2");
    }

    #[test]
    fn test_invalid_utf8_template_is_error() {
        let bytes = [0xffu8, 0xfe];
        // SAFETY: pointers borrow locals that outlive the call.
        let outcome = unsafe {
            tera_render_template(
                bytes.as_ptr().cast(),
                bytes.len(),
                "{}".as_ptr().cast(),
                2,
                std::ptr::null(),
                true,
                std::ptr::null(),
                0,
            )
        };
        let (ok, text) = take(outcome);
        assert!(!ok);
        assert!(text.contains("template is not valid UTF-8"));
    }

    #[test]
    fn test_interior_nul_in_output_is_error() {
        let (ok, text) = take(call("a{{ v }}b", r#"{"v": "\u0000"}"#, None, &[]));
        assert!(!ok);
        assert!(text.contains("NUL byte at offset 1"));
    }

    #[test]
    fn test_free_null_outcome_is_noop() {
        // SAFETY: a null buffer owns nothing.
        unsafe { tera_free_outcome(RenderOutcome::Err(std::ptr::null_mut())) };
    }

    #[test]
    fn test_file_mode_through_abi() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("row.html"), "<p>{{ v }}</p>").unwrap();
        let glob = CString::new(dir.path().join("*.html").to_string_lossy().as_bytes()).unwrap();

        let (ok, text) = take(call("row.html", r#"{"v": "a&b"}"#, Some(&glob), &[c".html"]));
        assert!(ok);
        assert_eq!(text, "<p>a&amp;b</p>");
    }
}
