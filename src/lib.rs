//! bunkcalc - attendance calculator
//!
//! Given how many classes a student attended, how many were held, and the
//! required attendance percentage, works out how many more classes can be
//! skipped or must be attended.
//!
//! The library holds the pure validate -> classify -> present pipeline in
//! [`core`], an HTTP-agnostic [`api`] layer, terminal [`output`], and the
//! optional form [`server`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
#[cfg(feature = "ui")]
pub mod server;
