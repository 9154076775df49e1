//! Codegen IR for the vgen render-function generator.
//!
//! This crate provides the data model consumed by `vgen-codegen`:
//! - Source locations (`Position`, `SourceLocation`), preserved but opaque
//! - Runtime helper symbols (`HelperId`) and their name table (`HelperRegistry`)
//! - The codegen tree (`IRNode`, `Fragment`, `Property`, `RootNode`)
//! - JSON decoding of trees handed over by an external transform stage

// Source locations carried by every node
pub mod location;
pub use location::{Position, SourceLocation};

// Runtime helper symbols and the id -> name registry
pub mod helpers;
pub use helpers::{HelperId, HelperRegistry};

// Codegen tree
pub mod node;
pub use node::{Callee, Fragment, IRNode, ImportItem, Property, RootNode};

// Builder helpers for IR construction
mod builders;

// JSON decoding of IR trees
pub mod json;
pub use json::IrError;
