//! Runtime helper symbols.
//!
//! The transform stage refers to runtime functions (vnode creation, asset
//! resolution, display-string conversion, ...) by `HelperId`. The registry
//! maps each id to the canonical export name of the runtime module; the
//! generator prints it under the local alias `_<name>`.
//!
//! Core helpers occupy ids `0..100`, server-renderer helpers `100..200`.
//! Platform compilers register their own helpers above that range.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque runtime helper symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HelperId(pub u32);

impl HelperId {
    // =========================================================================
    // Core runtime helpers
    // =========================================================================
    pub const FRAGMENT: Self = Self(0);
    pub const TELEPORT: Self = Self(1);
    pub const SUSPENSE: Self = Self(2);
    pub const KEEP_ALIVE: Self = Self(3);
    pub const BASE_TRANSITION: Self = Self(4);
    pub const OPEN_BLOCK: Self = Self(5);
    pub const CREATE_BLOCK: Self = Self(6);
    pub const CREATE_VNODE: Self = Self(7);
    pub const CREATE_COMMENT: Self = Self(8);
    pub const CREATE_TEXT: Self = Self(9);
    pub const CREATE_STATIC: Self = Self(10);
    pub const RESOLVE_COMPONENT: Self = Self(11);
    pub const RESOLVE_DYNAMIC_COMPONENT: Self = Self(12);
    pub const RESOLVE_DIRECTIVE: Self = Self(13);
    pub const WITH_DIRECTIVES: Self = Self(14);
    pub const RENDER_LIST: Self = Self(15);
    pub const RENDER_SLOT: Self = Self(16);
    pub const CREATE_SLOTS: Self = Self(17);
    pub const TO_DISPLAY_STRING: Self = Self(18);
    pub const MERGE_PROPS: Self = Self(19);
    pub const TO_HANDLERS: Self = Self(20);
    pub const CAMELIZE: Self = Self(21);
    pub const CAPITALIZE: Self = Self(22);
    pub const SET_BLOCK_TRACKING: Self = Self(23);
    pub const PUSH_SCOPE_ID: Self = Self(24);
    pub const POP_SCOPE_ID: Self = Self(25);
    pub const WITH_SCOPE_ID: Self = Self(26);
    pub const WITH_CTX: Self = Self(27);

    // =========================================================================
    // Server-renderer helpers
    // =========================================================================
    pub const SSR_INTERPOLATE: Self = Self(100);
    pub const SSR_RENDER_VNODE: Self = Self(101);
    pub const SSR_RENDER_COMPONENT: Self = Self(102);
    pub const SSR_RENDER_SLOT: Self = Self(103);
    pub const SSR_RENDER_CLASS: Self = Self(104);
    pub const SSR_RENDER_STYLE: Self = Self(105);
    pub const SSR_RENDER_ATTRS: Self = Self(106);
    pub const SSR_RENDER_ATTR: Self = Self(107);
    pub const SSR_RENDER_DYNAMIC_ATTR: Self = Self(108);
    pub const SSR_RENDER_LIST: Self = Self(109);
    pub const SSR_LOOSE_EQUAL: Self = Self(110);
    pub const SSR_LOOSE_CONTAIN: Self = Self(111);
    pub const SSR_RENDER_DYNAMIC_MODEL: Self = Self(112);
    pub const SSR_GET_DYNAMIC_MODEL_PROPS: Self = Self(113);
    pub const SSR_RENDER_TELEPORT: Self = Self(114);
    pub const SSR_RENDER_SUSPENSE: Self = Self(115);

    /// Whether this id lies in the server-renderer range.
    pub const fn is_ssr(self) -> bool {
        self.0 >= 100 && self.0 < 200
    }
}

impl fmt::Display for HelperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "helper#{}", self.0)
    }
}

/// Helpers exported by the runtime module.
pub const CORE_HELPERS: &[(HelperId, &str)] = &[
    (HelperId::FRAGMENT, "Fragment"),
    (HelperId::TELEPORT, "Teleport"),
    (HelperId::SUSPENSE, "Suspense"),
    (HelperId::KEEP_ALIVE, "KeepAlive"),
    (HelperId::BASE_TRANSITION, "BaseTransition"),
    (HelperId::OPEN_BLOCK, "openBlock"),
    (HelperId::CREATE_BLOCK, "createBlock"),
    (HelperId::CREATE_VNODE, "createVNode"),
    (HelperId::CREATE_COMMENT, "createCommentVNode"),
    (HelperId::CREATE_TEXT, "createTextVNode"),
    (HelperId::CREATE_STATIC, "createStaticVNode"),
    (HelperId::RESOLVE_COMPONENT, "resolveComponent"),
    (HelperId::RESOLVE_DYNAMIC_COMPONENT, "resolveDynamicComponent"),
    (HelperId::RESOLVE_DIRECTIVE, "resolveDirective"),
    (HelperId::WITH_DIRECTIVES, "withDirectives"),
    (HelperId::RENDER_LIST, "renderList"),
    (HelperId::RENDER_SLOT, "renderSlot"),
    (HelperId::CREATE_SLOTS, "createSlots"),
    (HelperId::TO_DISPLAY_STRING, "toDisplayString"),
    (HelperId::MERGE_PROPS, "mergeProps"),
    (HelperId::TO_HANDLERS, "toHandlers"),
    (HelperId::CAMELIZE, "camelize"),
    (HelperId::CAPITALIZE, "capitalize"),
    (HelperId::SET_BLOCK_TRACKING, "setBlockTracking"),
    (HelperId::PUSH_SCOPE_ID, "pushScopeId"),
    (HelperId::POP_SCOPE_ID, "popScopeId"),
    (HelperId::WITH_SCOPE_ID, "withScopeId"),
    (HelperId::WITH_CTX, "withCtx"),
];

/// Helpers exported by the server-renderer module.
pub const SSR_HELPERS: &[(HelperId, &str)] = &[
    (HelperId::SSR_INTERPOLATE, "ssrInterpolate"),
    (HelperId::SSR_RENDER_VNODE, "ssrRenderVNode"),
    (HelperId::SSR_RENDER_COMPONENT, "ssrRenderComponent"),
    (HelperId::SSR_RENDER_SLOT, "ssrRenderSlot"),
    (HelperId::SSR_RENDER_CLASS, "ssrRenderClass"),
    (HelperId::SSR_RENDER_STYLE, "ssrRenderStyle"),
    (HelperId::SSR_RENDER_ATTRS, "ssrRenderAttrs"),
    (HelperId::SSR_RENDER_ATTR, "ssrRenderAttr"),
    (HelperId::SSR_RENDER_DYNAMIC_ATTR, "ssrRenderDynamicAttr"),
    (HelperId::SSR_RENDER_LIST, "ssrRenderList"),
    (HelperId::SSR_LOOSE_EQUAL, "ssrLooseEqual"),
    (HelperId::SSR_LOOSE_CONTAIN, "ssrLooseContain"),
    (HelperId::SSR_RENDER_DYNAMIC_MODEL, "ssrRenderDynamicModel"),
    (HelperId::SSR_GET_DYNAMIC_MODEL_PROPS, "ssrGetDynamicModelProps"),
    (HelperId::SSR_RENDER_TELEPORT, "ssrRenderTeleport"),
    (HelperId::SSR_RENDER_SUSPENSE, "ssrRenderSuspense"),
];

/// Table from helper id to canonical runtime export name.
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
    names: FxHashMap<HelperId, String>,
}

impl HelperRegistry {
    /// An empty registry. Every lookup fails until helpers are registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the core and server-renderer helpers.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_all(CORE_HELPERS);
        registry.register_all(SSR_HELPERS);
        registry
    }

    /// Register (or rename) a helper.
    pub fn register(&mut self, id: HelperId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn register_all(&mut self, helpers: &[(HelperId, &str)]) {
        for &(id, name) in helpers {
            self.register(id, name);
        }
    }

    /// Canonical runtime name of `id`.
    pub fn name(&self, id: HelperId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// All registered helpers ordered by id.
    pub fn entries(&self) -> Vec<(HelperId, &str)> {
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(&id, name)| (id, name.as_str()))
            .collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        entries
    }
}
