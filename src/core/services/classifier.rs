//! Attendance classification
//!
//! This is the core algorithm. Rounding is always conservative: allowed
//! absences round down, required presences round up. Both quantities are
//! computed in integer arithmetic so floating point error cannot move them;
//! percentages stay unrounded `f64` until they are rendered.

use crate::core::models::{Assessment, AttendanceRequest, AttendanceResult};

/// Classify a validated request
#[must_use]
pub fn classify(request: &AttendanceRequest) -> Assessment {
    let result = if request.current_percentage() >= f64::from(request.required().get()) {
        classify_meeting(request)
    } else {
        classify_short(request)
    };

    Assessment {
        request: *request,
        result,
    }
}

/// The student meets the bar; work out the slack.
fn classify_meeting(request: &AttendanceRequest) -> AttendanceResult {
    let total = i64::from(request.total());
    let required = i64::from(request.required().get());

    // floor(total * (1 - required/100))
    let max_absent = total * (100 - required) / 100;
    let can_bunk = max_absent - i64::from(request.absent());

    match can_bunk {
        n if n > 0 => AttendanceResult::CanBunk { days: to_days(n) },
        0 => AttendanceResult::AtMinimum,
        // Unreachable: with exact integer floors, meeting the bar implies
        // absent <= max_absent.
        n => AttendanceResult::MustAttend {
            days: to_days(n.abs()),
        },
    }
}

/// The student is below the bar; work out the deficit.
fn classify_short(request: &AttendanceRequest) -> AttendanceResult {
    let total = u64::from(request.total());
    let required = u64::from(request.required().get());

    // ceil(total * required/100)
    let required_present = (total * required).div_ceil(100);
    let need_to_attend = required_present.saturating_sub(u64::from(request.present()));

    if need_to_attend <= u64::from(request.absent()) {
        AttendanceResult::MustAttend {
            days: to_days(need_to_attend),
        }
    } else {
        AttendanceResult::Unreachable
    }
}

fn to_days<T>(n: T) -> u32
where
    u32: TryFrom<T>,
{
    // Bounded by total, which is a u32.
    u32::try_from(n).unwrap_or(u32::MAX)
}
