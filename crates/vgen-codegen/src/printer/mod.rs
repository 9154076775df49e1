//! Node printer.
//!
//! Recursive dispatch from `IRNode` to appended text. The match in
//! `gen_node` is exhaustive over the IR, so a new node kind cannot be added
//! without teaching the printer how to print it.
//!
//! Layout decisions (single- vs multi-line) are made by the parent at each
//! call site, per node kind:
//! - objects break when they have more than one property or any non-simple value
//! - arrays break when they have more than three elements or any element
//!   that is not text-like
//! - calls and sequences never break on their own

mod expressions;
pub(crate) mod helpers;
mod statements;

pub use helpers::{is_simple_identifier, to_valid_asset_id};

use vgen_ir::{Fragment, HelperRegistry, IRNode};

use crate::context::CodegenContext;
use crate::error::Result;
use crate::options::CodegenOptions;

impl CodegenContext<'_> {
    pub fn gen_node(&mut self, node: &IRNode) -> Result<()> {
        match node {
            IRNode::Text { content, .. } => self.gen_text(content),
            IRNode::Comment { content, .. } => self.gen_comment(content),
            IRNode::SimpleExpression {
                content, is_static, ..
            } => self.gen_expression(content, *is_static),
            IRNode::CompoundExpression { children, .. } => {
                self.gen_compound_expression(children)
            }
            IRNode::Interpolation { content, .. } => self.gen_interpolation(content),

            IRNode::Element { codegen_node, .. }
            | IRNode::If { codegen_node, .. }
            | IRNode::For { codegen_node, .. }
            | IRNode::TextCall { codegen_node, .. } => self.gen_node(codegen_node),

            IRNode::CallExpression {
                callee, arguments, ..
            } => self.gen_call_expression(callee, arguments),
            IRNode::ObjectExpression { properties, .. } => {
                self.gen_object_expression(properties)
            }
            IRNode::ArrayExpression { elements, .. } => self.gen_node_list_as_array(elements),
            IRNode::FunctionExpression {
                params,
                returns,
                body,
                newline,
                ..
            } => self.gen_function_expression(
                params.as_ref(),
                returns.as_ref(),
                body.as_deref(),
                *newline,
            ),
            IRNode::SequenceExpression { expressions, .. } => {
                self.gen_sequence_expression(expressions)
            }
            IRNode::ConditionalExpression {
                test,
                consequent,
                alternate,
                ..
            } => self.gen_conditional_expression(test, consequent, alternate),
            IRNode::CacheExpression {
                index,
                value,
                is_vnode,
                ..
            } => self.gen_cache_expression(*index, value, *is_vnode),
            IRNode::TemplateLiteral { elements, .. } => self.gen_template_literal(elements),

            IRNode::BlockStatement { body, .. } => self.gen_block_statement(body),
            IRNode::IfStatement {
                test,
                consequent,
                alternate,
                ..
            } => self.gen_if_statement(test, consequent, alternate.as_deref()),
            IRNode::AssignmentExpression { left, right, .. } => {
                self.gen_assignment_expression(left, right)
            }
            IRNode::ReturnStatement { returns, .. } => self.gen_return_statement(returns),
        }
    }

    /// Print one fragment: raw text verbatim, a helper as its local alias,
    /// a nested list as an array literal, a node recursively.
    pub fn gen_fragment(&mut self, fragment: &Fragment) -> Result<()> {
        match fragment {
            Fragment::Raw(text) => {
                self.push(text);
                Ok(())
            }
            Fragment::Helper { helper } => self.push_helper(*helper),
            Fragment::List(items) => self.gen_node_list_as_array(items),
            Fragment::Node(node) => self.gen_node(node),
        }
    }
}

/// Print a single node with default options and the default registry.
pub fn print_node(node: &IRNode) -> Result<String> {
    let options = CodegenOptions::default();
    let registry = HelperRegistry::new();
    let mut ctx = CodegenContext::new(&options, &registry);
    ctx.gen_node(node)?;
    Ok(ctx.into_parts().0)
}
