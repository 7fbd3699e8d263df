//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer, plus the embedded form page.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight blocking HTTP server for CLI use

pub mod assets;
pub mod tiny_http;

pub use self::tiny_http::{Reply, route, serve};
