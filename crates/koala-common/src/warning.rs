//! Diagnostics with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used to report rejected values and unknown property names.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Warn about a rejected input (prints once per unique message).
///
/// Returns `true` the first time a given `component`/`message` pair is seen.
///
/// # Example
/// ```
/// use koala_common::warning::warn_once;
///
/// assert!(warn_once("CSS", "invalid value for 'margin-top': 'abc'"));
/// assert!(!warn_once("CSS", "invalid value for 'margin-top': 'abc'"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Koala {component}] ⚠ {message}").yellow());
    }
    first
}

/// Suppress (or re-enable) printing of warnings.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Clear all recorded warnings.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
