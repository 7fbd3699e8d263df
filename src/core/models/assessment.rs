//! Classification results

use serde::Serialize;

use super::request::AttendanceRequest;

/// Where a student stands against the required percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceResult {
    /// This many further absences still satisfy the threshold
    CanBunk {
        /// Absences still allowed, always positive
        days: u32,
    },
    /// Exactly at the threshold, no slack left
    AtMinimum,
    /// This many more classes must be attended
    MustAttend {
        /// Classes to attend, always positive
        days: u32,
    },
    /// The threshold cannot be met within the current total
    Unreachable,
}

/// A request together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    /// The validated input
    pub request: AttendanceRequest,
    /// The classification
    pub result: AttendanceResult,
}

impl Assessment {
    /// Current attendance percentage, unrounded
    #[must_use]
    pub fn current_percentage(&self) -> f64 {
        self.request.current_percentage()
    }

    /// Attendance after one more class held and missed, only for `CanBunk`
    #[must_use]
    pub fn projected_percentage(&self) -> Option<f64> {
        match self.result {
            AttendanceResult::CanBunk { .. } => Some(
                f64::from(self.request.present()) * 100.0
                    / (f64::from(self.request.total()) + 1.0),
            ),
            _ => None,
        }
    }

    /// Whether the student currently meets the threshold
    #[must_use]
    pub fn meets_requirement(&self) -> bool {
        self.current_percentage() >= f64::from(self.request.required().get())
    }
}
