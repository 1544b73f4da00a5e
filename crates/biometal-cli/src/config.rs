//! Layered configuration for the CLI.
//!
//! Every setting is resolved in the same order: an explicit command-line
//! argument, then a `-S key=value` override, then the TOML config file, then
//! the built-in default.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
