//! Core domain logic for bunkcalc
//!
//! This module contains pure business logic with no I/O dependencies.
//! Callers read raw input, hand it to the services, and render what comes back.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`AttendanceRequest`, `AttendanceResult`, `Assessment`, `Status`)
//! - `services/` - The validate -> classify -> present pipeline
//! - `error` - Input validation failures

pub mod error;
pub mod models;
pub mod services;

pub use error::ValidationError;
