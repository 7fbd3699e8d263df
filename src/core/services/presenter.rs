//! Message rendering
//!
//! Pure mapping from an [`Assessment`] (or a validation failure) to a
//! [`Report`]: a display status plus the lines to show. Percentages are
//! rounded to two decimals here and nowhere else.

use serde::Serialize;

use crate::core::error::ValidationError;
use crate::core::models::{Assessment, AttendanceResult, Status};

/// A rendered status block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// How the block should be styled
    pub status: Status,
    /// Lines of text, in display order
    pub lines: Vec<String>,
}

impl Report {
    /// All lines joined with newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Render a classification
#[must_use]
pub fn present(assessment: &Assessment) -> Report {
    let request = &assessment.request;
    let required = request.required();
    let current =
        current_line(request.present(), request.total(), assessment.current_percentage());

    match assessment.result {
        AttendanceResult::CanBunk { days } => {
            let projected = assessment.projected_percentage().unwrap_or_default();
            Report {
                status: Status::Success,
                lines: vec![
                    format!("You can bunk for {days} more days."),
                    current,
                    format!(
                        "Attendance Then: {}/{} → {projected:.2}%",
                        request.present(),
                        u64::from(request.total()) + 1
                    ),
                ],
            }
        },
        AttendanceResult::AtMinimum => Report {
            status: Status::Info,
            lines: vec![
                format!(
                    "You are at the minimum attendance requirement ({required}%). \
                     You cannot bunk any more classes."
                ),
                current,
            ],
        },
        AttendanceResult::MustAttend { days } => Report {
            status: Status::Error,
            lines: vec![
                format!("You need to attend {days} more classes to reach {required}%."),
                current,
            ],
        },
        AttendanceResult::Unreachable => Report {
            status: Status::Error,
            lines: vec![
                format!(
                    "It's not possible to reach {required}% attendance with the current total \
                     classes."
                ),
                current,
            ],
        },
    }
}

/// Render a validation failure
#[must_use]
pub fn present_error(error: &ValidationError) -> Report {
    Report {
        status: Status::Error,
        lines: vec![error.to_string()],
    }
}

fn current_line(present: u32, total: u32, percentage: f64) -> String {
    format!("Current Attendance: {present}/{total} → {percentage:.2}%")
}
