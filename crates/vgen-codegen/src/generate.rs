//! Top-level driver.
//!
//! Runs the preamble for the selected mode, opens the render function,
//! writes the context prologue and declarations, prints the body, and closes
//! the function.

use tracing::{debug, debug_span};
use vgen_ir::{HelperId, HelperRegistry, RootNode};

use crate::context::CodegenContext;
use crate::error::Result;
use crate::options::{CodegenMode, CodegenOptions};
use crate::preamble::AssetKind;

/// Output of one generation pass.
#[derive(Debug, Clone)]
pub struct CodegenResult<'r> {
    /// Complete generated unit.
    pub code: String,
    /// Prefix of `code` written before the render function signature.
    pub preamble: String,
    /// Helpers resolved during generation, declared helpers first.
    pub helpers: Vec<HelperId>,
    /// The root the code was generated from.
    pub ast: &'r RootNode,
}

/// Generate render-function source for `root` using the default helper
/// registry.
pub fn generate<'r>(root: &'r RootNode, options: &CodegenOptions) -> Result<CodegenResult<'r>> {
    let registry = HelperRegistry::new();
    generate_with_registry(root, options, &registry)
}

/// Generate render-function source for `root`, resolving helper names
/// through `registry`.
pub fn generate_with_registry<'r>(
    root: &'r RootNode,
    options: &CodegenOptions,
    registry: &HelperRegistry,
) -> Result<CodegenResult<'r>> {
    let span = debug_span!(
        "generate",
        mode = %options.mode,
        ssr = options.ssr,
        prefix_identifiers = options.prefix_identifiers
    );
    let _enter = span.enter();

    let mut ctx = CodegenContext::for_root(root, options, registry);
    let use_with_block = options.use_with_block();
    let wrap_with_scope_id = options.module_scope_id().is_some() && !options.ssr;

    match options.mode {
        CodegenMode::Module => ctx.gen_module_preamble(root)?,
        CodegenMode::Function => ctx.gen_function_preamble(root)?,
    }
    let preamble = ctx.code().to_string();

    // Signature
    ctx.push(match options.mode {
        CodegenMode::Module => "export ",
        CodegenMode::Function => "return ",
    });
    if wrap_with_scope_id {
        ctx.push("const render = /*#__PURE__*/_withId(");
    }
    if options.ssr {
        ctx.push("function ssrRender(_ctx, _push, _parent) {");
    } else {
        ctx.push("function render() {");
    }
    ctx.indent();

    // Context prologue
    if use_with_block {
        ctx.push("with (this) {");
        ctx.indent();
        if root.has_helpers() {
            let aliases = ctx.alias_helpers(&root.helpers)?;
            ctx.push(&format!("const {{ {aliases} }} = _Vue"));
            ctx.push("\n");
            ctx.newline();
        }
    } else if !options.ssr {
        ctx.push("const _ctx = this");
        if root.cached > 0 {
            ctx.newline();
            ctx.push("const _cache = _ctx.$cache");
        }
        ctx.newline();
    }

    // Declarations
    if !root.components.is_empty() {
        ctx.gen_assets(&root.components, AssetKind::Component)?;
        if !root.directives.is_empty() || root.temps > 0 {
            ctx.newline();
        }
    }
    if !root.directives.is_empty() {
        ctx.gen_assets(&root.directives, AssetKind::Directive)?;
        if root.temps > 0 {
            ctx.newline();
        }
    }
    ctx.gen_temps(root.temps);
    if !root.components.is_empty() || !root.directives.is_empty() || root.temps > 0 {
        ctx.push("\n");
        ctx.newline();
    }

    // Body
    if !options.ssr {
        ctx.push("return ");
    }
    match &root.codegen_node {
        Some(node) if options.ssr => ctx.gen_block_body(node)?,
        Some(node) => ctx.gen_node(node)?,
        None => ctx.push("null"),
    }

    if use_with_block {
        ctx.deindent(false);
        ctx.push("}");
    }
    ctx.deindent(false);
    ctx.push("}");
    if wrap_with_scope_id {
        ctx.push(")");
    }

    let (code, helpers) = ctx.into_parts();
    debug!(
        helpers = helpers.len(),
        hoists = root.hoists.len(),
        bytes = code.len(),
        "generated render function"
    );

    Ok(CodegenResult {
        code,
        preamble,
        helpers,
        ast: root,
    })
}
