//! Codegen tree
//!
//! The transform stage hands the generator a `RootNode` whose `codegen_node`
//! is a tree of `IRNode`s. Every node corresponds to one printable construct
//! of the emitted JavaScript: literals and raw expressions, helper calls,
//! object/array literals, conditionals, cache slots, and the statement forms
//! used by server-side rendering. Structural template nodes (elements,
//! `v-if`, `v-for`, text calls) appear only as wrappers around their resolved
//! codegen expression.
//!
//! The tree is immutable once built; the generator only reads it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::helpers::HelperId;
use crate::location::SourceLocation;

/// Codegen IR node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum IRNode {
    // =========================================================================
    // Template leaves
    // =========================================================================
    /// Static text, printed as a string literal: `"hello"`
    Text {
        content: String,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Template comment: `_createCommentVNode("text")`
    Comment {
        content: String,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Expression text. Static content prints as a string literal, dynamic
    /// content prints verbatim (identifier prefixing already applied).
    SimpleExpression {
        content: String,
        #[serde(default)]
        is_static: bool,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Concatenation of raw text and nested nodes: `_ctx.foo + bar`
    CompoundExpression {
        children: Vec<Fragment>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Mustache interpolation: `_toDisplayString(expr)`
    Interpolation {
        content: Box<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    // =========================================================================
    // Structural wrappers (print their resolved codegen node)
    // =========================================================================
    /// Element with its vnode-creation call
    Element {
        #[serde(default)]
        tag: String,
        codegen_node: Box<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// `v-if` chain resolved to a conditional or sequence expression
    If {
        codegen_node: Box<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// `v-for` resolved to a sequence or call expression
    For {
        codegen_node: Box<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Text child resolved to a `createTextVNode` call
    TextCall {
        codegen_node: Box<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    // =========================================================================
    // JavaScript expressions
    // =========================================================================
    /// Call expression: `callee(args)`
    CallExpression {
        callee: Callee,
        #[serde(default)]
        arguments: Vec<Fragment>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Object literal: `{ key: value, ... }`
    ObjectExpression {
        #[serde(default)]
        properties: Vec<Property>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Array literal: `[a, b, c]`
    ArrayExpression {
        #[serde(default)]
        elements: Vec<Fragment>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Arrow function (slot functions): `(params) => returns`
    FunctionExpression {
        #[serde(default)]
        params: Option<Fragment>,
        #[serde(default)]
        returns: Option<Fragment>,
        #[serde(default)]
        body: Option<Box<Self>>,
        /// Force a braced body even when only `returns` is present
        #[serde(default)]
        newline: bool,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Comma expression: `(a, b, c)`
    SequenceExpression {
        expressions: Vec<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Conditional expression, printed as a multi-line ternary
    ConditionalExpression {
        test: Box<Self>,
        consequent: Box<Self>,
        alternate: Box<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Memoized value: `_cache[i] || (_cache[i] = value)`
    CacheExpression {
        index: u32,
        value: Box<Self>,
        /// Suspend block tracking while the cached vnode is created
        #[serde(default, rename = "isVNode")]
        is_vnode: bool,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Template literal: `` `foo${bar}` ``
    TemplateLiteral {
        elements: Vec<Fragment>,
        #[serde(default)]
        loc: SourceLocation,
    },

    // =========================================================================
    // JavaScript statements (server-side rendering)
    // =========================================================================
    /// Statement list: `{ stmts }`
    BlockStatement {
        body: Vec<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// If statement. `consequent` is a block; `alternate` is a block or
    /// another if statement (else-if chain).
    IfStatement {
        test: Box<Self>,
        consequent: Box<Self>,
        #[serde(default)]
        alternate: Option<Box<Self>>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Assignment: `left = right`
    AssignmentExpression {
        left: Box<Self>,
        right: Box<Self>,
        #[serde(default)]
        loc: SourceLocation,
    },

    /// Return statement: `return expr`
    ReturnStatement {
        returns: Fragment,
        #[serde(default)]
        loc: SourceLocation,
    },
}

/// Piece of a compound expression, call argument list, array, or template
/// literal.
///
/// In JSON a raw fragment is a plain string, a helper is `{"helper": id}`,
/// a list is an array, and a node is a tagged object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fragment {
    /// Raw source text spliced verbatim
    Raw(String),
    /// Runtime helper reference, printed as its local alias
    Helper { helper: HelperId },
    /// Nested node list, printed as an array literal
    List(Vec<Fragment>),
    /// Nested IR node
    Node(Box<IRNode>),
}

/// Callee of a call expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Callee {
    /// Runtime helper, printed as `_<name>`
    Helper(HelperId),
    /// Name printed verbatim
    Name(String),
}

/// Key/value pair of an object expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Simple expression (static name or computed key) or compound
    /// expression (computed key)
    pub key: IRNode,
    pub value: IRNode,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// Module-level import: `import <exp> from '<path>'`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportItem {
    pub exp: IRNode,
    pub path: String,
}

/// Root of one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RootNode {
    /// Template children. Never printed.
    pub children: Vec<IRNode>,
    /// Runtime helpers required by the unit, in import order
    pub helpers: Vec<HelperId>,
    /// Server-renderer helpers required by the unit
    pub ssr_helpers: Vec<HelperId>,
    /// Component names to resolve at render time
    pub components: Vec<String>,
    /// Directive names to resolve at render time
    pub directives: Vec<String>,
    pub imports: Vec<ImportItem>,
    /// Hoisted constant expressions, bound to `_hoisted_<n>` (1-based)
    pub hoists: Vec<IRNode>,
    /// Number of cache slots used by cache expressions
    pub cached: u32,
    /// Number of `_temp<n>` variables to declare
    pub temps: u32,
    /// Render body. `None` renders `null`.
    pub codegen_node: Option<IRNode>,
    pub loc: SourceLocation,
}

impl IRNode {
    /// Variant name, used in diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "Text",
            Self::Comment { .. } => "Comment",
            Self::SimpleExpression { .. } => "SimpleExpression",
            Self::CompoundExpression { .. } => "CompoundExpression",
            Self::Interpolation { .. } => "Interpolation",
            Self::Element { .. } => "Element",
            Self::If { .. } => "If",
            Self::For { .. } => "For",
            Self::TextCall { .. } => "TextCall",
            Self::CallExpression { .. } => "CallExpression",
            Self::ObjectExpression { .. } => "ObjectExpression",
            Self::ArrayExpression { .. } => "ArrayExpression",
            Self::FunctionExpression { .. } => "FunctionExpression",
            Self::SequenceExpression { .. } => "SequenceExpression",
            Self::ConditionalExpression { .. } => "ConditionalExpression",
            Self::CacheExpression { .. } => "CacheExpression",
            Self::TemplateLiteral { .. } => "TemplateLiteral",
            Self::BlockStatement { .. } => "BlockStatement",
            Self::IfStatement { .. } => "IfStatement",
            Self::AssignmentExpression { .. } => "AssignmentExpression",
            Self::ReturnStatement { .. } => "ReturnStatement",
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Text { loc, .. }
            | Self::Comment { loc, .. }
            | Self::SimpleExpression { loc, .. }
            | Self::CompoundExpression { loc, .. }
            | Self::Interpolation { loc, .. }
            | Self::Element { loc, .. }
            | Self::If { loc, .. }
            | Self::For { loc, .. }
            | Self::TextCall { loc, .. }
            | Self::CallExpression { loc, .. }
            | Self::ObjectExpression { loc, .. }
            | Self::ArrayExpression { loc, .. }
            | Self::FunctionExpression { loc, .. }
            | Self::SequenceExpression { loc, .. }
            | Self::ConditionalExpression { loc, .. }
            | Self::CacheExpression { loc, .. }
            | Self::TemplateLiteral { loc, .. }
            | Self::BlockStatement { loc, .. }
            | Self::IfStatement { loc, .. }
            | Self::AssignmentExpression { loc, .. }
            | Self::ReturnStatement { loc, .. } => loc,
        }
    }

    /// Leaf-like expressions that never force their parent list onto
    /// multiple lines.
    pub const fn is_text_like(&self) -> bool {
        matches!(
            self,
            Self::SimpleExpression { .. }
                | Self::Text { .. }
                | Self::Interpolation { .. }
                | Self::CompoundExpression { .. }
        )
    }
}

impl Fragment {
    pub fn is_text_like(&self) -> bool {
        match self {
            Self::Raw(_) => true,
            Self::Helper { .. } | Self::List(_) => false,
            Self::Node(node) => node.is_text_like(),
        }
    }
}

// The variant is picked from the JSON shape so a bad nested node reports its
// own decode error instead of a generic untagged-enum mismatch.
impl<'de> Deserialize<'de> for Fragment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_value(Value::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl Fragment {
    fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::String(raw) => Ok(Self::Raw(raw)),
            Value::Array(items) => items
                .into_iter()
                .map(Self::from_value)
                .collect::<serde_json::Result<_>>()
                .map(Self::List),
            Value::Object(mut map) if map.contains_key("helper") && !map.contains_key("type") => {
                let helper = map.remove("helper").unwrap_or_default();
                Ok(Self::Helper {
                    helper: HelperId::deserialize(helper)?,
                })
            }
            other => IRNode::deserialize(other).map(|node| Self::Node(Box::new(node))),
        }
    }
}

impl From<IRNode> for Fragment {
    fn from(node: IRNode) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<&str> for Fragment {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for Fragment {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<HelperId> for Fragment {
    fn from(helper: HelperId) -> Self {
        Self::Helper { helper }
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(items: Vec<Fragment>) -> Self {
        Self::List(items)
    }
}

impl From<&str> for Callee {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<HelperId> for Callee {
    fn from(helper: HelperId) -> Self {
        Self::Helper(helper)
    }
}
