//! Generation options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output module format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodegenMode {
    /// ES module: helpers are imported, the render function is exported.
    Module,
    /// Function body: helpers are read off the runtime global, the render
    /// function is returned.
    #[default]
    Function,
}

impl fmt::Display for CodegenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => f.write_str("module"),
            Self::Function => f.write_str("function"),
        }
    }
}

/// Options controlling the shape of the generated code.
///
/// Deserializes from the same camelCase keys the config file uses; missing
/// keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenOptions {
    pub mode: CodegenMode,
    /// Identifiers in expressions are already resolved against `_ctx`.
    /// When false (and not SSR), function-mode output wraps the render body
    /// in `with (this) { ... }`.
    pub prefix_identifiers: bool,
    /// Module mode only: import bare helper names and rebind them locally.
    pub optimize_bindings: bool,
    /// Emit a server-side `ssrRender(_ctx, _push, _parent)` function.
    pub ssr: bool,
    /// Module mode only: scope id attached to hoists and the render function.
    pub scope_id: Option<String>,
    pub runtime_module_name: String,
    pub runtime_global_name: String,
    pub ssr_runtime_module_name: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            mode: CodegenMode::default(),
            prefix_identifiers: false,
            optimize_bindings: false,
            ssr: false,
            scope_id: None,
            runtime_module_name: "vue".to_string(),
            runtime_global_name: "Vue".to_string(),
            ssr_runtime_module_name: "@vue/server-renderer".to_string(),
        }
    }
}

impl CodegenOptions {
    pub fn module() -> Self {
        Self {
            mode: CodegenMode::Module,
            ..Self::default()
        }
    }

    pub fn function() -> Self {
        Self::default()
    }

    /// Whether the render body runs inside `with (this) { ... }`.
    ///
    /// ES modules are strict code, so module mode never uses it.
    pub const fn use_with_block(&self) -> bool {
        !self.prefix_identifiers && !self.ssr && matches!(self.mode, CodegenMode::Function)
    }

    /// Scope id to apply, if any. Ignored outside module mode.
    pub fn module_scope_id(&self) -> Option<&str> {
        match self.mode {
            CodegenMode::Module => self.scope_id.as_deref(),
            CodegenMode::Function => None,
        }
    }

    pub(crate) const fn optimizes_bindings(&self) -> bool {
        self.optimize_bindings && matches!(self.mode, CodegenMode::Module)
    }
}
