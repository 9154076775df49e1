use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use vgen_codegen::CodegenMode;

/// CLI arguments for the vgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "vgen",
    version,
    about = "Generate render functions from compiled template IR"
)]
pub struct CliArgs {
    /// IR JSON files to generate from.
    #[arg(required_unless_present = "list_helpers")]
    pub inputs: Vec<PathBuf>,

    /// Output format of the generated code.
    #[arg(short = 'm', long, value_enum, ignore_case = true)]
    pub mode: Option<Mode>,

    /// Expressions are already prefixed with `_ctx.`; skip the `with` wrapper.
    #[arg(
        long = "prefix-identifiers",
        alias = "prefixIdentifiers",
        overrides_with = "no_prefix_identifiers"
    )]
    pub prefix_identifiers: bool,

    /// Turn off `prefixIdentifiers` set in the config file.
    #[arg(long = "no-prefix-identifiers", overrides_with = "prefix_identifiers")]
    pub no_prefix_identifiers: bool,

    /// Import bare helper names and rebind them locally (module mode only).
    #[arg(
        long = "optimize-bindings",
        alias = "optimizeBindings",
        overrides_with = "no_optimize_bindings"
    )]
    pub optimize_bindings: bool,

    /// Turn off `optimizeBindings` set in the config file.
    #[arg(long = "no-optimize-bindings", overrides_with = "optimize_bindings")]
    pub no_optimize_bindings: bool,

    /// Generate a server-side render function.
    #[arg(long, overrides_with = "no_ssr")]
    pub ssr: bool,

    /// Turn off `ssr` set in the config file.
    #[arg(long = "no-ssr", overrides_with = "ssr")]
    pub no_ssr: bool,

    /// Scope id for scoped styles (module mode only).
    #[arg(long = "scope-id", alias = "scopeId")]
    pub scope_id: Option<String>,

    /// Path to a vgen.json config file. Defaults to ./vgen.json when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write `<stem>.js` per input into this directory instead of stdout.
    #[arg(short = 'o', long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    /// Print the runtime helper table and exit.
    #[arg(long = "list-helpers", alias = "listHelpers")]
    pub list_helpers: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Module,
    Function,
}

impl Mode {
    pub const fn to_codegen_mode(self) -> CodegenMode {
        match self {
            Self::Module => CodegenMode::Module,
            Self::Function => CodegenMode::Function,
        }
    }
}
