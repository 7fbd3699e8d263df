//! Domain models for bunkcalc
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AttendanceRequest`] - Validated present/total counts plus a threshold
//! - [`RequiredPercentage`] - The institutional minimum, in (0, 100]
//! - [`AttendanceResult`] - Where the student stands against the threshold
//! - [`Assessment`] - A request paired with its result and derived percentages
//! - [`Status`] - Display class of a rendered result

mod assessment;
mod request;
mod status;

pub use assessment::{Assessment, AttendanceResult};
pub use request::{AttendanceRequest, RequiredPercentage};
pub use status::Status;
