//! Core module for the prerequisite logic engine

pub mod config;
pub mod ingest;
pub mod models;
pub mod parser;
pub mod report;
pub mod suggest;
pub mod validator;

/// Returns the current version of the `NuPrereqs` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
