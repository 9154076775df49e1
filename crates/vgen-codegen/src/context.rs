//! Codegen context.
//!
//! Mutable state for one generation pass: the output buffer, the current
//! indentation depth, and helper-name resolution. Every emission step
//! (preamble, signature, node printer) appends to the same buffer through
//! this type.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use tracing::debug;
use vgen_ir::{HelperId, HelperRegistry, RootNode};

use crate::error::{CodegenError, Result};
use crate::options::CodegenOptions;

const INDENT: &str = "  ";

pub struct CodegenContext<'a> {
    options: &'a CodegenOptions,
    registry: &'a HelperRegistry,
    code: String,
    pub(crate) indent_level: usize,
    /// Helpers the root declared (`helpers` + `ssrHelpers`)
    declared_helpers: FxHashSet<HelperId>,
    /// Helpers resolved so far, in first-use order
    used_helpers: IndexSet<HelperId>,
}

impl<'a> CodegenContext<'a> {
    pub fn new(options: &'a CodegenOptions, registry: &'a HelperRegistry) -> Self {
        Self {
            options,
            registry,
            code: String::new(),
            indent_level: 0,
            declared_helpers: FxHashSet::default(),
            used_helpers: IndexSet::new(),
        }
    }

    /// Context for generating `root`. The root's helper list is authoritative
    /// and seeds the used-helper list in declaration order.
    pub fn for_root(
        root: &RootNode,
        options: &'a CodegenOptions,
        registry: &'a HelperRegistry,
    ) -> Self {
        let mut ctx = Self::new(options, registry);
        ctx.declared_helpers
            .extend(root.helpers.iter().chain(&root.ssr_helpers).copied());
        ctx.used_helpers.extend(root.helpers.iter().copied());
        ctx
    }

    pub const fn options(&self) -> &'a CodegenOptions {
        self.options
    }

    // =========================================================================
    // Output
    // =========================================================================

    pub fn push(&mut self, text: &str) {
        self.code.push_str(text);
    }

    /// Increase the depth and start a new line at it.
    pub fn indent(&mut self) {
        self.indent_level += 1;
        self.newline();
    }

    /// Decrease the depth, starting a new line at it unless `without_newline`.
    pub fn deindent(&mut self, without_newline: bool) {
        self.indent_level = self.indent_level.saturating_sub(1);
        if !without_newline {
            self.newline();
        }
    }

    /// `\n` followed by two spaces per indentation level.
    pub fn newline(&mut self) {
        self.code.push('\n');
        for _ in 0..self.indent_level {
            self.code.push_str(INDENT);
        }
    }

    pub const fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    // =========================================================================
    // Helper resolution
    // =========================================================================

    /// Canonical runtime name of `id`. Marks the helper as used.
    pub fn helper_name(&mut self, id: HelperId) -> Result<&'a str> {
        let registry = self.registry;
        let name = registry.name(id).ok_or(CodegenError::UnknownHelper(id))?;
        if !self.declared_helpers.contains(&id) {
            debug!(
                helper = %id,
                name,
                ssr = id.is_ssr(),
                "resolving helper the root did not declare"
            );
        }
        self.used_helpers.insert(id);
        Ok(name)
    }

    /// Local call name of `id` (`_<name>`). Marks the helper as used.
    pub fn helper(&mut self, id: HelperId) -> Result<String> {
        Ok(format!("_{}", self.helper_name(id)?))
    }

    /// Append the local call name of `id`.
    pub fn push_helper(&mut self, id: HelperId) -> Result<()> {
        let name = self.helper_name(id)?;
        self.code.push('_');
        self.code.push_str(name);
        Ok(())
    }

    pub fn into_parts(self) -> (String, Vec<HelperId>) {
        (self.code, self.used_helpers.into_iter().collect())
    }
}
