//! Selector error types.

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// Error produced while lexing or parsing a selector.
///
/// Any of these aborts construction of the rule that owns the selector.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A specific token was required, e.g. the `)` closing a group.
    #[error("expected {expected}, found {found}")]
    Expected { expected: TokenKind, found: Token },

    /// No operand can start at this token.
    #[error("expected '(', literal or '-', found {found}")]
    UnexpectedToken { found: Token },

    /// Strict lexing only: a character outside the selector alphabet.
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    /// Strict lexing only: `^` with nothing after it.
    #[error("dangling escape at offset {offset}")]
    DanglingEscape { offset: usize },

    /// Groups and negations nest deeper than the parser accepts.
    #[error("selector nests deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

impl SelectorError {
    /// Byte offset in the selector text where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            SelectorError::Expected { found, .. } | SelectorError::UnexpectedToken { found } => {
                found.offset
            }
            SelectorError::UnexpectedChar { offset, .. }
            | SelectorError::DanglingEscape { offset }
            | SelectorError::TooDeep { offset, .. } => *offset,
        }
    }
}
