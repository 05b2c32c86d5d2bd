//! Interned autoescape suffixes.
//!
//! `Tera::autoescape_on` only accepts `&'static str`. Suffixes arrive per call, so each
//! distinct suffix is leaked once and reused afterwards; memory is bounded by the number
//! of distinct suffixes a process ever sees.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

static SUFFIXES: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();

/// Map each suffix to its process-wide `'static` copy.
pub(crate) fn intern_suffixes(suffixes: &[&str]) -> Vec<&'static str> {
    let mut table = SUFFIXES
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    suffixes
        .iter()
        .map(|suffix| match table.get(*suffix).copied() {
            Some(interned) => interned,
            None => {
                let interned: &'static str = Box::leak(suffix.to_string().into_boxed_str());
                table.insert(interned);
                interned
            }
        })
        .collect()
}
