//! Input and tree error types.

use thiserror::Error;

/// A ranged read that the source cannot satisfy.
///
/// These indicate a tree whose spans do not fit its source. The printer
/// reports them instead of clamping.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("range {from}..{to} is reversed")]
    Reversed { from: usize, to: usize },

    #[error("range {from}..{to} is out of bounds for input of length {len}")]
    OutOfRange { from: usize, to: usize, len: usize },

    #[error("range {from}..{to} does not fall on character boundaries")]
    NotCharBoundary { from: usize, to: usize },
}

/// Structural problem found while building a [`SyntaxTree`](crate::SyntaxTree).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node `{name}` has reversed span {from}..{to}")]
    Reversed { name: String, from: usize, to: usize },

    #[error("node `{name}` starts at {from}, before the preceding node ends at {previous_end}")]
    OutOfOrder {
        name: String,
        from: usize,
        previous_end: usize,
    },

    #[error("node `{name}` ends at {to}, before its last child ends at {child_end}")]
    ChildOutside {
        name: String,
        to: usize,
        child_end: usize,
    },

    #[error("node `{name}` was never closed")]
    Unclosed { name: String },

    #[error("close without a matching open node")]
    NothingOpen,
}
