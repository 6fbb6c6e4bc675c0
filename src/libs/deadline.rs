//! Due-date derivation: the pending-day counter and its display label.
//!
//! `pending_days` is computed when a task is written (insert, or due-date
//! update) and stored as-is. Reads never refresh it, so a label rendered
//! from a stored value reflects the gap at last write, not "now".

use chrono::NaiveDate;

/// Signed day count between `due` and `reference`. Negative means overdue.
pub fn pending_days(due: NaiveDate, reference: NaiveDate) -> i64 {
    (due - reference).num_days()
}

/// Human-readable rendering of a pending-day count.
pub fn deadline_label(pending_days: i64) -> String {
    if pending_days < 0 {
        format!("Overdue, {} days ago", pending_days.abs())
    } else if pending_days == 0 {
        "Due Today".to_string()
    } else {
        format!("{} days left", pending_days)
    }
}
