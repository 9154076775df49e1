//! Render-function code generator.
//!
//! Turns a finalized codegen IR tree (`vgen_ir::RootNode`) into JavaScript
//! source for a render function:
//! - `context`: output buffer, indentation, helper-name resolution
//! - `preamble`: helper imports/bindings, hoists, asset and temp declarations
//! - `printer`: exhaustive per-node printing with the layout rules
//! - `generate`: mode-dependent signature and final assembly
//!
//! Generation is deterministic and single-threaded; independent units can be
//! generated in parallel by independent callers.

pub mod context;
pub mod error;
pub mod options;
pub mod preamble;
pub mod printer;

mod generate;

pub use context::CodegenContext;
pub use error::CodegenError;
pub use generate::{CodegenResult, generate, generate_with_registry};
pub use options::{CodegenMode, CodegenOptions};
pub use preamble::AssetKind;
pub use printer::{is_simple_identifier, print_node, to_valid_asset_id};
