//! Command-line support for the `vgen` binary.

pub mod args;
pub mod config;
pub mod driver;
