//! Scoping warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Front ends route parse diagnostics from the engine through here.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format a warning line exactly as [`warn_once`] prints it, minus colors.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[cssscope {component}] warning: {message}")
}

/// Record a warning key, returning `true` the first time it is seen.
///
/// A poisoned lock is recovered.
fn first_occurrence(key: String) -> bool {
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.get_or_insert_with(HashSet::new).insert(key)
}

/// Warn about a stylesheet problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("parse", "<parse-error> at style.css:1:4");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let line = format_warning(component, message);
    if first_occurrence(line.clone()) {
        eprintln!("{}", line.yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_warning() {
        assert_eq!(
            format_warning("parse", "bad rule"),
            "[cssscope parse] warning: bad rule"
        );
    }

    #[test]
    fn test_first_occurrence_deduplicates() {
        let key = "test_first_occurrence_deduplicates".to_string();
        assert!(first_occurrence(key.clone()));
        assert!(!first_occurrence(key));
    }
}
