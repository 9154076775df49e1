//! Preamble emission.
//!
//! Everything written before the render function signature (helper imports
//! or bindings, module imports, the scope-id binding, hoisted constants),
//! plus the declarations written at the top of the function body (resolved
//! assets and temporaries). Driven entirely by `RootNode` fields and options.

use vgen_ir::{HelperId, IRNode, ImportItem, RootNode};

use crate::context::CodegenContext;
use crate::error::Result;
use crate::printer::{helpers::quote, to_valid_asset_id};

const PURE_ANNOTATION: &str = "/*#__PURE__*/";

/// Helpers hoisted static vnodes are created with.
const STATIC_VNODE_HELPERS: [HelperId; 4] = [
    HelperId::CREATE_VNODE,
    HelperId::CREATE_COMMENT,
    HelperId::CREATE_TEXT,
    HelperId::CREATE_STATIC,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Component,
    Directive,
}

impl AssetKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Directive => "directive",
        }
    }

    const fn resolver(self) -> HelperId {
        match self {
            Self::Component => HelperId::RESOLVE_COMPONENT,
            Self::Directive => HelperId::RESOLVE_DIRECTIVE,
        }
    }
}

impl CodegenContext<'_> {
    /// `name: _name` pairs for a destructuring binding.
    pub(crate) fn alias_helpers(&mut self, helpers: &[HelperId]) -> Result<String> {
        let mut aliases = Vec::with_capacity(helpers.len());
        for &id in helpers {
            let name = self.helper_name(id)?;
            aliases.push(format!("{name}: _{name}"));
        }
        Ok(aliases.join(", "))
    }

    fn import_specifiers(&mut self, helpers: &[HelperId]) -> Result<String> {
        let mut specifiers = Vec::with_capacity(helpers.len());
        for &id in helpers {
            let name = self.helper_name(id)?;
            specifiers.push(format!("{name} as _{name}"));
        }
        Ok(specifiers.join(", "))
    }

    /// Function mode: bind helpers off the runtime global (or `require`d
    /// module under SSR), then hoists.
    pub fn gen_function_preamble(&mut self, root: &RootNode) -> Result<()> {
        let options = self.options();
        let vue_binding = if options.ssr {
            format!("require({})", quote(&options.runtime_module_name)?)
        } else {
            options.runtime_global_name.clone()
        };

        if root.has_helpers() {
            if options.use_with_block() {
                // Helpers are destructured inside `with`; only the static
                // vnode helpers the hoists need are bound up front.
                self.push(&format!("const _Vue = {vue_binding}\n"));
                let static_helpers: Vec<_> = STATIC_VNODE_HELPERS
                    .into_iter()
                    .filter(|&id| root.requires_helper(id))
                    .collect();
                if !root.hoists.is_empty() && !static_helpers.is_empty() {
                    let aliases = self.alias_helpers(&static_helpers)?;
                    self.push(&format!("const {{ {aliases} }} = _Vue\n"));
                }
            } else {
                let aliases = self.alias_helpers(&root.helpers)?;
                self.push(&format!("const {{ {aliases} }} = {vue_binding}\n"));
            }
        }

        if !root.ssr_helpers.is_empty() {
            let aliases = self.alias_helpers(&root.ssr_helpers)?;
            let module = quote(&options.ssr_runtime_module_name)?;
            self.push(&format!("const {{ {aliases} }} = require({module})\n"));
        }

        self.gen_hoists(&root.hoists, None)?;
        self.newline();
        Ok(())
    }

    /// Module mode: helper imports, server-renderer imports, module imports,
    /// scope-id binding, then hoists.
    pub fn gen_module_preamble(&mut self, root: &RootNode) -> Result<()> {
        let options = self.options();
        let scope_id = options.module_scope_id();

        if root.has_helpers() {
            let module = quote(&options.runtime_module_name)?;
            if options.optimizes_bindings() {
                // Bare imports, rebound to their local aliases
                let mut names = Vec::with_capacity(root.helpers.len());
                for &id in &root.helpers {
                    names.push(self.helper_name(id)?);
                }
                let rebinds: Vec<_> = names.iter().map(|name| format!("_{name} = {name}")).collect();
                self.push(&format!("import {{ {} }} from {module}\n", names.join(", ")));
                self.push(&format!(
                    "\n// Binding optimization for webpack code-split\nconst {}\n",
                    rebinds.join(", ")
                ));
            } else {
                let specifiers = self.import_specifiers(&root.helpers)?;
                self.push(&format!("import {{ {specifiers} }} from {module}\n"));
            }
        }

        if !root.ssr_helpers.is_empty() {
            let specifiers = self.import_specifiers(&root.ssr_helpers)?;
            let module = quote(&options.ssr_runtime_module_name)?;
            self.push(&format!("import {{ {specifiers} }} from {module}\n"));
        }

        if !root.imports.is_empty() {
            self.gen_imports(&root.imports)?;
            self.newline();
        }

        if let Some(scope_id) = scope_id {
            self.push("const _withId = ");
            self.push(PURE_ANNOTATION);
            self.push_helper(HelperId::WITH_SCOPE_ID)?;
            self.push(&format!("({})", quote(scope_id)?));
            self.newline();
        }

        self.gen_hoists(&root.hoists, scope_id)?;
        self.newline();
        Ok(())
    }

    fn gen_imports(&mut self, imports: &[ImportItem]) -> Result<()> {
        for import in imports {
            self.push("import ");
            self.gen_node(&import.exp)?;
            self.push(&format!(" from '{}'", import.path));
            self.newline();
        }
        Ok(())
    }

    /// `const _hoisted_<n> = <expr>` per hoist, 1-based. With a scope id the
    /// block is bracketed by push/pop scope-id calls.
    pub fn gen_hoists(&mut self, hoists: &[IRNode], scope_id: Option<&str>) -> Result<()> {
        if hoists.is_empty() {
            return Ok(());
        }
        self.newline();

        if let Some(scope_id) = scope_id {
            self.push_helper(HelperId::PUSH_SCOPE_ID)?;
            self.push(&format!("({})", quote(scope_id)?));
            self.newline();
        }

        for (i, hoist) in hoists.iter().enumerate() {
            self.push(&format!("const _hoisted_{} = ", i + 1));
            self.gen_node(hoist)?;
            self.newline();
        }

        if scope_id.is_some() {
            self.push_helper(HelperId::POP_SCOPE_ID)?;
            self.push("()");
            self.newline();
        }
        Ok(())
    }

    /// One `const _<kind>_<id> = _resolve<Kind>("<name>")` per asset,
    /// newline-separated.
    pub fn gen_assets(&mut self, assets: &[String], kind: AssetKind) -> Result<()> {
        for (i, name) in assets.iter().enumerate() {
            let id = to_valid_asset_id(name, kind.label());
            self.push(&format!("const {id} = "));
            self.push_helper(kind.resolver())?;
            self.push(&format!("({})", quote(name)?));
            if i + 1 < assets.len() {
                self.newline();
            }
        }
        Ok(())
    }

    /// `let _temp0, _temp1, ...`
    pub fn gen_temps(&mut self, count: u32) {
        if count == 0 {
            return;
        }
        let temps: Vec<_> = (0..count).map(|i| format!("_temp{i}")).collect();
        self.push(&format!("let {}", temps.join(", ")));
    }
}
