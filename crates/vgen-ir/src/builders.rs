//! Builder helpers for IR construction.
//!
//! Synthesized nodes get a stub location.

use crate::helpers::HelperId;
use crate::location::SourceLocation;
use crate::node::{Callee, Fragment, IRNode, ImportItem, Property, RootNode};

impl IRNode {
    /// Create a simple expression
    pub fn simple(content: impl Into<String>, is_static: bool) -> Self {
        Self::SimpleExpression {
            content: content.into(),
            is_static,
            loc: SourceLocation::stub(),
        }
    }

    /// Create a static text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            loc: SourceLocation::stub(),
        }
    }

    /// Create a comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment {
            content: content.into(),
            loc: SourceLocation::stub(),
        }
    }

    /// Create an interpolation of a dynamic expression
    pub fn interpolation(content: impl Into<String>) -> Self {
        Self::interpolation_of(Self::simple(content, false))
    }

    /// Create an interpolation of an arbitrary node
    pub fn interpolation_of(content: Self) -> Self {
        Self::Interpolation {
            content: Box::new(content),
            loc: SourceLocation::stub(),
        }
    }

    /// Create a compound expression
    pub fn compound(children: Vec<Fragment>) -> Self {
        Self::CompoundExpression {
            children,
            loc: SourceLocation::stub(),
        }
    }

    /// Create a call expression
    pub fn call(callee: impl Into<Callee>, arguments: Vec<Fragment>) -> Self {
        Self::CallExpression {
            callee: callee.into(),
            arguments,
            loc: SourceLocation::stub(),
        }
    }

    /// Create an object expression
    pub fn object(properties: Vec<Property>) -> Self {
        Self::ObjectExpression {
            properties,
            loc: SourceLocation::stub(),
        }
    }

    /// Create an array expression
    pub fn array(elements: Vec<Fragment>) -> Self {
        Self::ArrayExpression {
            elements,
            loc: SourceLocation::stub(),
        }
    }

    /// Create a sequence expression
    pub fn sequence(expressions: Vec<Self>) -> Self {
        Self::SequenceExpression {
            expressions,
            loc: SourceLocation::stub(),
        }
    }

    /// Create a conditional expression
    pub fn conditional(test: Self, consequent: Self, alternate: Self) -> Self {
        Self::ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            loc: SourceLocation::stub(),
        }
    }

    /// Create a cache expression
    pub fn cache(index: u32, value: Self, is_vnode: bool) -> Self {
        Self::CacheExpression {
            index,
            value: Box::new(value),
            is_vnode,
            loc: SourceLocation::stub(),
        }
    }

    /// Create a template literal
    pub fn template_literal(elements: Vec<Fragment>) -> Self {
        Self::TemplateLiteral {
            elements,
            loc: SourceLocation::stub(),
        }
    }

    /// Create an arrow function expression
    pub fn function(
        params: Option<Fragment>,
        returns: Option<Fragment>,
        body: Option<Self>,
        newline: bool,
    ) -> Self {
        Self::FunctionExpression {
            params,
            returns,
            body: body.map(Box::new),
            newline,
            loc: SourceLocation::stub(),
        }
    }

    /// Create a block statement
    pub fn block(body: Vec<Self>) -> Self {
        Self::BlockStatement {
            body,
            loc: SourceLocation::stub(),
        }
    }

    /// Create an if statement
    pub fn if_statement(test: Self, consequent: Self, alternate: Option<Self>) -> Self {
        Self::IfStatement {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
            loc: SourceLocation::stub(),
        }
    }

    /// Create an assignment expression
    pub fn assign(left: Self, right: Self) -> Self {
        Self::AssignmentExpression {
            left: Box::new(left),
            right: Box::new(right),
            loc: SourceLocation::stub(),
        }
    }

    /// Create a return statement
    pub fn ret(returns: impl Into<Fragment>) -> Self {
        Self::ReturnStatement {
            returns: returns.into(),
            loc: SourceLocation::stub(),
        }
    }

    /// Wrap a vnode call in an element node
    pub fn element(tag: impl Into<String>, codegen_node: Self) -> Self {
        Self::Element {
            tag: tag.into(),
            codegen_node: Box::new(codegen_node),
            loc: SourceLocation::stub(),
        }
    }

    /// Wrap a resolved expression in a `v-if` node
    pub fn if_node(codegen_node: Self) -> Self {
        Self::If {
            codegen_node: Box::new(codegen_node),
            loc: SourceLocation::stub(),
        }
    }

    /// Wrap a resolved expression in a `v-for` node
    pub fn for_node(codegen_node: Self) -> Self {
        Self::For {
            codegen_node: Box::new(codegen_node),
            loc: SourceLocation::stub(),
        }
    }

    /// Wrap a `createTextVNode` call in a text-call node
    pub fn text_call(codegen_node: Self) -> Self {
        Self::TextCall {
            codegen_node: Box::new(codegen_node),
            loc: SourceLocation::stub(),
        }
    }
}

impl Property {
    /// Create a property from arbitrary key and value nodes
    pub fn new(key: IRNode, value: IRNode) -> Self {
        Self {
            key,
            value,
            loc: SourceLocation::stub(),
        }
    }

    /// Create a property with a static key: `{ key: value }`
    pub fn init(key: impl Into<String>, value: IRNode) -> Self {
        Self::new(IRNode::simple(key, true), value)
    }
}

impl ImportItem {
    pub fn new(exp: IRNode, path: impl Into<String>) -> Self {
        Self {
            exp,
            path: path.into(),
        }
    }
}

impl RootNode {
    /// Root with the given render body and no preamble requirements
    pub fn with_codegen(codegen_node: IRNode) -> Self {
        Self {
            codegen_node: Some(codegen_node),
            loc: SourceLocation::stub(),
            ..Self::default()
        }
    }

    pub fn has_helpers(&self) -> bool {
        !self.helpers.is_empty()
    }

    pub fn requires_helper(&self, helper: HelperId) -> bool {
        self.helpers.contains(&helper)
    }
}
