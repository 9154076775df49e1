//! Expression printing.

use vgen_ir::{Callee, Fragment, HelperId, IRNode, Property};

use super::helpers::{is_simple_identifier, quote};
use crate::context::CodegenContext;
use crate::error::Result;

impl CodegenContext<'_> {
    pub(super) fn gen_text(&mut self, content: &str) -> Result<()> {
        self.push(&quote(content)?);
        Ok(())
    }

    pub(super) fn gen_comment(&mut self, content: &str) -> Result<()> {
        self.push_helper(HelperId::CREATE_COMMENT)?;
        self.push("(");
        self.push(&quote(content)?);
        self.push(")");
        Ok(())
    }

    pub(super) fn gen_expression(&mut self, content: &str, is_static: bool) -> Result<()> {
        if is_static {
            self.push(&quote(content)?);
        } else {
            self.push(content);
        }
        Ok(())
    }

    pub(super) fn gen_interpolation(&mut self, content: &IRNode) -> Result<()> {
        self.push_helper(HelperId::TO_DISPLAY_STRING)?;
        self.push("(");
        self.gen_node(content)?;
        self.push(")");
        Ok(())
    }

    pub(crate) fn gen_compound_expression(&mut self, children: &[Fragment]) -> Result<()> {
        for child in children {
            self.gen_fragment(child)?;
        }
        Ok(())
    }

    pub(super) fn gen_call_expression(&mut self, callee: &Callee, arguments: &[Fragment]) -> Result<()> {
        match callee {
            Callee::Helper(id) => self.push_helper(*id)?,
            Callee::Name(name) => self.push(name),
        }
        self.push("(");
        self.gen_node_list(arguments, false)?;
        self.push(")");
        Ok(())
    }

    pub(super) fn gen_object_expression(&mut self, properties: &[Property]) -> Result<()> {
        if properties.is_empty() {
            self.push("{}");
            return Ok(());
        }

        let multilines = properties.len() > 1
            || properties
                .iter()
                .any(|p| !matches!(p.value, IRNode::SimpleExpression { .. }));

        self.push(if multilines { "{" } else { "{ " });
        if multilines {
            self.indent();
        }
        for (i, property) in properties.iter().enumerate() {
            self.gen_expression_as_property_key(&property.key)?;
            self.push(": ");
            self.gen_node(&property.value)?;
            if i + 1 < properties.len() {
                self.push(",");
                self.newline();
            }
        }
        if multilines {
            self.deindent(false);
        }
        self.push(if multilines { "}" } else { " }" });
        Ok(())
    }

    pub(super) fn gen_function_expression(
        &mut self,
        params: Option<&Fragment>,
        returns: Option<&Fragment>,
        body: Option<&IRNode>,
        newline: bool,
    ) -> Result<()> {
        self.push("(");
        match params {
            // Parameter lists are comma-separated, not an array
            Some(Fragment::List(items)) => self.gen_node_list(items, false)?,
            Some(params) => self.gen_fragment(params)?,
            None => {}
        }
        self.push(") => ");

        let braced = newline || body.is_some();
        if braced {
            self.push("{");
            self.indent();
        }
        if let Some(returns) = returns {
            if newline {
                self.push("return ");
            }
            self.gen_fragment(returns)?;
        } else if let Some(body) = body {
            self.gen_block_body(body)?;
        }
        if braced {
            self.deindent(false);
            self.push("}");
        }
        Ok(())
    }

    pub(super) fn gen_sequence_expression(&mut self, expressions: &[IRNode]) -> Result<()> {
        self.push("(");
        for (i, expression) in expressions.iter().enumerate() {
            self.gen_node(expression)?;
            if i + 1 < expressions.len() {
                self.push(", ");
            }
        }
        self.push(")");
        Ok(())
    }

    /// Multi-line ternary. A conditional in the alternate position stays at
    /// its parent's depth, so chained ternaries step one level per link.
    pub(super) fn gen_conditional_expression(
        &mut self,
        test: &IRNode,
        consequent: &IRNode,
        alternate: &IRNode,
    ) -> Result<()> {
        let needs_parens = match test {
            IRNode::SimpleExpression { content, .. } => !is_simple_identifier(content),
            _ => true,
        };
        if needs_parens {
            self.push("(");
        }
        self.gen_node(test)?;
        if needs_parens {
            self.push(")");
        }

        self.indent();
        self.indent_level += 1;
        self.push("? ");
        self.gen_node(consequent)?;
        self.indent_level -= 1;
        self.newline();
        self.push(": ");

        let is_nested = matches!(alternate, IRNode::ConditionalExpression { .. });
        if !is_nested {
            self.indent_level += 1;
        }
        self.gen_node(alternate)?;
        if !is_nested {
            self.indent_level -= 1;
        }
        self.deindent(true);
        Ok(())
    }

    pub(super) fn gen_cache_expression(&mut self, index: u32, value: &IRNode, is_vnode: bool) -> Result<()> {
        let slot = format!("_cache[{index}]");
        self.push(&slot);
        self.push(" || (");
        if is_vnode {
            self.indent();
            self.push_helper(HelperId::SET_BLOCK_TRACKING)?;
            self.push("(-1),");
            self.newline();
        }
        self.push(&slot);
        self.push(" = ");
        self.gen_node(value)?;
        if is_vnode {
            self.push(",");
            self.newline();
            self.push_helper(HelperId::SET_BLOCK_TRACKING)?;
            self.push("(1),");
            self.newline();
            self.push(&slot);
            self.deindent(false);
        }
        self.push(")");
        Ok(())
    }

    pub(super) fn gen_template_literal(&mut self, elements: &[Fragment]) -> Result<()> {
        self.push("`");
        for element in elements {
            match element {
                Fragment::Raw(text) => self.push(text),
                other => {
                    self.push("${");
                    self.gen_fragment(other)?;
                    self.push("}");
                }
            }
        }
        self.push("`");
        Ok(())
    }

    pub(super) fn gen_assignment_expression(&mut self, left: &IRNode, right: &IRNode) -> Result<()> {
        self.gen_node(left)?;
        self.push(" = ");
        self.gen_node(right)
    }
}
