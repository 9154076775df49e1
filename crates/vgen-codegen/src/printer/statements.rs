//! Statement printing (server-side render bodies and slot functions).
//!
//! Blocks print their own braces only when they stand alone. Where the
//! parent supplies the braces (if branches, function bodies, the render
//! body) only the statements are printed.

use vgen_ir::{Fragment, IRNode};

use crate::context::CodegenContext;
use crate::error::{CodegenError, Result};

impl CodegenContext<'_> {
    pub(super) fn gen_block_statement(&mut self, body: &[IRNode]) -> Result<()> {
        if body.is_empty() {
            self.push("{}");
            return Ok(());
        }
        self.push("{");
        self.indent();
        self.gen_statements(body)?;
        self.deindent(false);
        self.push("}");
        Ok(())
    }

    /// Body of a construct whose braces are already open.
    pub(crate) fn gen_block_body(&mut self, node: &IRNode) -> Result<()> {
        match node {
            IRNode::BlockStatement { body, .. } => self.gen_statements(body),
            other => self.gen_node(other),
        }
    }

    pub(super) fn gen_if_statement(
        &mut self,
        test: &IRNode,
        consequent: &IRNode,
        alternate: Option<&IRNode>,
    ) -> Result<()> {
        let IRNode::BlockStatement { body, .. } = consequent else {
            return Err(CodegenError::unexpected(consequent, "block statement"));
        };

        self.push("if (");
        self.gen_node(test)?;
        self.push(") {");
        self.indent();
        self.gen_statements(body)?;
        self.deindent(false);
        self.push("}");

        let Some(alternate) = alternate else {
            return Ok(());
        };
        self.push(" else ");
        match alternate {
            IRNode::IfStatement {
                test,
                consequent,
                alternate,
                ..
            } => self.gen_if_statement(test, consequent, alternate.as_deref()),
            IRNode::BlockStatement { body, .. } => {
                self.push("{");
                self.indent();
                self.gen_statements(body)?;
                self.deindent(false);
                self.push("}");
                Ok(())
            }
            other => Err(CodegenError::unexpected(
                other,
                "block statement or if statement",
            )),
        }
    }

    pub(super) fn gen_return_statement(&mut self, returns: &Fragment) -> Result<()> {
        self.push("return ");
        self.gen_fragment(returns)
    }
}
