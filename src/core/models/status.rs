//! Display status of a rendered result

use serde::{Deserialize, Serialize};

/// How a rendered block should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Good news: the student has slack
    Success,
    /// Neutral: exactly at the threshold
    Info,
    /// Bad news, or invalid input
    Error,
}

impl Status {
    /// CSS class / wire name of this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
