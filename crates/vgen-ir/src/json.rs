//! JSON interchange for IR trees.
//!
//! The transform stage runs out of process and hands trees over as JSON.
//! Nodes are objects tagged by `type`; field names are camelCase.

use thiserror::Error;

use crate::node::{IRNode, RootNode};

#[derive(Error, Debug)]
pub enum IrError {
    #[error("malformed IR: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode IR: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IrError>;

impl RootNode {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(IrError::Decode)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(IrError::Decode)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(IrError::Encode)
    }
}

impl IRNode {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(IrError::Decode)
    }
}
