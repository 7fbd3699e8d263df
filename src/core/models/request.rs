//! Validated attendance input

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;

/// Required attendance percentage, always in (0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RequiredPercentage(u8);

impl RequiredPercentage {
    /// Create a percentage, rejecting values outside (0, 100]
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(v @ 1..=100) => Ok(Self(v)),
            _ => Err(ValidationError::InvalidPercentage(value)),
        }
    }

    /// The percentage as an integer
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RequiredPercentage {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequiredPercentage> for u8 {
    fn from(value: RequiredPercentage) -> Self {
        value.0
    }
}

impl std::str::FromStr for RequiredPercentage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        let value: i64 = trimmed.parse().map_err(|_| ValidationError::InvalidNumber)?;
        Self::new(value)
    }
}

impl std::fmt::Display for RequiredPercentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Present/total counts that passed validation
///
/// Invariant: `present <= total` and `total > 0`. Only the validator
/// constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AttendanceRequest {
    present: u32,
    total: u32,
    required: RequiredPercentage,
}

impl AttendanceRequest {
    pub(crate) const fn new(present: u32, total: u32, required: RequiredPercentage) -> Self {
        Self {
            present,
            total,
            required,
        }
    }

    /// Classes attended
    #[must_use]
    pub const fn present(&self) -> u32 {
        self.present
    }

    /// Classes held so far
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Classes missed so far
    #[must_use]
    pub const fn absent(&self) -> u32 {
        self.total - self.present
    }

    /// Threshold to meet
    #[must_use]
    pub const fn required(&self) -> RequiredPercentage {
        self.required
    }

    /// Current attendance as a percentage, unrounded
    #[must_use]
    pub fn current_percentage(&self) -> f64 {
        f64::from(self.present) * 100.0 / f64::from(self.total)
    }
}
