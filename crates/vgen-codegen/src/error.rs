use thiserror::Error;
use vgen_ir::{HelperId, IRNode, Position};

/// Malformed IR encountered during generation.
///
/// Generation stops at the first error and no partial output is returned.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("no runtime name registered for {0}")]
    UnknownHelper(HelperId),

    #[error(
        "unexpected {kind} node at {}:{}, expected {expected}",
        .position.line,
        .position.column
    )]
    UnexpectedNode {
        kind: &'static str,
        expected: &'static str,
        position: Position,
    },

    #[error("failed to quote string literal: {0}")]
    Quote(#[from] serde_json::Error),
}

impl CodegenError {
    pub(crate) fn unexpected(node: &IRNode, expected: &'static str) -> Self {
        Self::UnexpectedNode {
            kind: node.kind_name(),
            expected,
            position: node.loc().start,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;
