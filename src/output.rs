//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. The same structures are
//! returned by the HTTP API, so every surface shows identical text.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Assessment, AttendanceResult, Status};
use crate::core::services::{Report, present};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of evaluating one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Display class: success, info or error
    pub status: Status,
    /// Rendered message lines
    pub lines: Vec<String>,
    /// Machine-readable classification
    pub classification: AttendanceResult,
    /// Classes attended
    pub present: u32,
    /// Classes held
    pub total: u32,
    /// Threshold evaluated against
    pub required: u8,
    /// Whether current attendance is at or above the threshold
    pub meets_requirement: bool,
    /// Current attendance, unrounded
    pub current_percentage: f64,
    /// Attendance after one more missed class, only when bunking is possible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_percentage: Option<f64>,
}

impl From<&Assessment> for EvaluationResult {
    fn from(assessment: &Assessment) -> Self {
        let Report { status, lines } = present(assessment);
        Self {
            status,
            lines,
            classification: assessment.result,
            present: assessment.request.present(),
            total: assessment.request.total(),
            required: assessment.request.required().get(),
            meets_requirement: assessment.meets_requirement(),
            current_percentage: assessment.current_percentage(),
            projected_percentage: assessment.projected_percentage(),
        }
    }
}

/// Offered percentage options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsResult {
    /// Percentages offered
    pub options: Vec<u8>,
    /// Percentage used when none is given
    pub default: u8,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl EvaluationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let mut lines = self.lines.iter();
        if let Some(headline) = lines.next() {
            println!("{}", paint(headline, self.status));
        }
        for line in lines {
            println!("  {line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OptionsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Required percentage options:");
                for option in &self.options {
                    let marker = if *option == self.default { " (default)" } else { "" };
                    println!("  {option}%{marker}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Create a failed operation result
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Create a successful operation result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    ///
    /// Failures go to stderr in human mode.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human if self.success => println!("{}", self.message),
            OutputMode::Human => eprintln!("{}", paint(&self.message, Status::Error)),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

fn paint(text: &str, status: Status) -> colored::ColoredString {
    match status {
        Status::Success => text.green().bold(),
        Status::Info => text.cyan().bold(),
        Status::Error => text.red().bold(),
    }
}
