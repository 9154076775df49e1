//! Source locations attached to IR nodes.
//!
//! The generator never interprets these; they are carried through so that a
//! source-map builder downstream can correlate output with template input.

use serde::{Deserialize, Serialize};

/// A point in the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the template
    pub offset: u32,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

impl Position {
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Half-open span `[start, end)` plus the covered source text.
///
/// Defaults to the stub location, so nodes decoded without a `loc` compare
/// equal to synthesized ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

impl SourceLocation {
    pub fn new(start: Position, end: Position, source: impl Into<String>) -> Self {
        Self {
            start,
            end,
            source: source.into(),
        }
    }

    /// Location used for synthesized nodes.
    pub fn stub() -> Self {
        Self::new(Position::new(0, 1, 1), Position::new(0, 1, 1), "")
    }

    /// Whether this is the location of a synthesized node.
    pub fn is_stub(&self) -> bool {
        self.source.is_empty() && self.start == self.end
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::stub()
    }
}
