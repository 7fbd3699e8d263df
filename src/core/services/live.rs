//! Live field feedback
//!
//! While the user types, the present field is flagged when it exceeds the
//! total. Anything that does not parse yet is left alone.

use serde::Serialize;

use super::validator::parse_count;

/// Per-field highlighting state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldFeedback {
    /// The present field holds more classes than the total field
    pub present_exceeds_total: bool,
}

/// Compute highlighting for partially entered input
#[must_use]
pub fn validate_live(present: &str, total: &str) -> FieldFeedback {
    let present_exceeds_total = matches!(
        (parse_count(present), parse_count(total)),
        (Some(p), Some(t)) if p > t
    );
    FieldFeedback {
        present_exceeds_total,
    }
}
