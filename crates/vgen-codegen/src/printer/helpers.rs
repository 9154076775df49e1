//! Shared printing helpers: node lists, property keys, identifier checks,
//! and string quoting.

use vgen_ir::{Fragment, IRNode};

use crate::context::CodegenContext;
use crate::error::{CodegenError, Result};

/// Whether `name` can be printed as a bare JavaScript property name.
pub fn is_simple_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !first.is_ascii_digit() && is_identifier_char(first) => {
            chars.all(is_identifier_char)
        }
        _ => false,
    }
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Local binding for a resolved asset: `_component_bar_baz` for
/// (`bar-baz`, `component`).
pub fn to_valid_asset_id(name: &str, kind: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("_{kind}_{sanitized}")
}

/// Quote `text` as a JavaScript string literal (`JSON.stringify` rules).
pub(crate) fn quote(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?)
}

impl CodegenContext<'_> {
    /// Print fragments separated by `, ` or, when `multilines`, by `,` and a
    /// newline at the current depth.
    pub(crate) fn gen_node_list(&mut self, items: &[Fragment], multilines: bool) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            self.gen_fragment(item)?;
            if i + 1 < items.len() {
                if multilines {
                    self.push(",");
                    self.newline();
                } else {
                    self.push(", ");
                }
            }
        }
        Ok(())
    }

    pub(crate) fn gen_node_list_as_array(&mut self, items: &[Fragment]) -> Result<()> {
        let multilines = items.len() > 3 || items.iter().any(|item| !item.is_text_like());
        self.push("[");
        if multilines {
            self.indent();
        }
        self.gen_node_list(items, multilines)?;
        if multilines {
            self.deindent(false);
        }
        self.push("]");
        Ok(())
    }

    pub(crate) fn gen_expression_as_property_key(&mut self, key: &IRNode) -> Result<()> {
        match key {
            IRNode::CompoundExpression { children, .. } => {
                self.push("[");
                self.gen_compound_expression(children)?;
                self.push("]");
            }
            IRNode::SimpleExpression {
                content,
                is_static: true,
                ..
            } => {
                if is_simple_identifier(content) {
                    self.push(content);
                } else {
                    self.push(&quote(content)?);
                }
            }
            IRNode::SimpleExpression { content, .. } => {
                self.push("[");
                self.push(content);
                self.push("]");
            }
            other => return Err(CodegenError::unexpected(other, "property key")),
        }
        Ok(())
    }

    /// Statements one per line at the current depth, no surrounding braces.
    pub(crate) fn gen_statements(&mut self, body: &[IRNode]) -> Result<()> {
        for (i, statement) in body.iter().enumerate() {
            self.gen_node(statement)?;
            if i + 1 < body.len() {
                self.newline();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_identifiers() {
        assert!(is_simple_identifier("id"));
        assert!(is_simple_identifier("_private"));
        assert!(is_simple_identifier("$attrs"));
        assert!(is_simple_identifier("onClick2"));
    }

    #[test]
    fn test_non_simple_identifiers() {
        assert!(!is_simple_identifier(""));
        assert!(!is_simple_identifier("some-key"));
        assert!(!is_simple_identifier("1st"));
        assert!(!is_simple_identifier("a b"));
        assert!(!is_simple_identifier("foo.bar"));
        assert!(!is_simple_identifier("naïve"));
    }

    #[test]
    fn test_asset_ids() {
        assert_eq!(to_valid_asset_id("Foo", "component"), "_component_Foo");
        assert_eq!(
            to_valid_asset_id("bar-baz", "component"),
            "_component_bar_baz"
        );
        assert_eq!(to_valid_asset_id("my_dir", "directive"), "_directive_my_dir");
        assert_eq!(
            to_valid_asset_id("ns.comp:x", "component"),
            "_component_ns_comp_x"
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("foo").unwrap(), "\"foo\"");
        assert_eq!(quote("say \"hi\"\n").unwrap(), "\"say \\\"hi\\\"\\n\"");
    }
}
