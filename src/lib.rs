//! vgen: render-function code generator for compiled template IR.
//!
//! The library crates do the work:
//! - [`ir`] (`vgen-ir`): the codegen tree, helper ids, and the helper registry
//! - [`codegen`] (`vgen-codegen`): context, preamble, node printer, and `generate`
//!
//! This crate adds tracing setup and the `vgen` command-line driver.

pub use vgen_codegen as codegen;
pub use vgen_ir as ir;

pub use vgen_codegen::{
    CodegenError, CodegenMode, CodegenOptions, CodegenResult, generate, generate_with_registry,
};
pub use vgen_ir::{HelperId, HelperRegistry, IRNode, RootNode};

pub mod tracing_config;

#[cfg(feature = "cli")]
pub mod cli;
