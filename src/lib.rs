//! Shared library for `NuPrereqs`
//! Prerequisite parsing, transcript validation and catalog graph queries used by the CLI.

pub mod core;
pub mod logger;

pub use core::{config, get_version};
