//! Scope Selectors
//!
//! A small pattern language over scope paths. A scope path is the chain of
//! syntax node names from the outermost ancestor down to a token, e.g.
//! `["Script", "VariableDeclaration", "Equals"]`.
//!
//! # Syntax
//!
//! ```text
//! selector   := term (("," | "|") term)*
//! term       := factor ("&"? factor)*
//! factor     := "-" factor | atom
//! atom       := "(" selector ")" | literal
//! literal    := ("^" ANY | WORD | "/")+
//! ```
//!
//! - `^x` escapes the next character, so `^(` is the literal `(`. An escape
//!   extends a literal right before it even across whitespace: `foo ^,` is
//!   the literal `foo,`.
//! - `a/b` matches when `a` appears somewhere before `b` in the path.
//! - `-` negates, `&` (or plain adjacency) is AND, `,` or `|` is OR.
//! - Groups and negations nest at most [`MAX_NESTING`] levels deep.
//!
//! Example: `^{, ^( - ForSpec, foo & (-bar | buzz), Number/BigNumber`.
//!
//! # Modules
//!
//! - [`lexer`]: selector text to tokens
//! - [`parser`]: precedence-climbing parser producing an [`Expression`]
//! - [`expr`]: the expression tree and its matcher

pub mod error;
pub mod expr;
pub mod lexer;
pub mod parser;
mod stack;
pub mod token;

use std::fmt;
use std::str::FromStr;

pub use error::SelectorError;
pub use expr::Expression;
pub use lexer::{lex, lex_with_mode, LexMode};
pub use parser::{parse, MAX_NESTING};
pub use token::{Token, TokenKind};

/// A compiled scope selector.
///
/// Built once from its source text and then evaluated against any number of
/// scope paths. Evaluation is a pure function of the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    source: String,
    expr: Expression,
}

impl Selector {
    /// Parse a selector with the permissive lexer.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        Self::parse_with_mode(source, LexMode::Permissive)
    }

    /// Parse a selector, choosing how unknown characters are treated.
    pub fn parse_with_mode(source: &str, mode: LexMode) -> Result<Self, SelectorError> {
        let tokens = lex_with_mode(source, mode)?;
        let expr = parse(&tokens)?;
        Ok(Selector {
            source: source.to_owned(),
            expr,
        })
    }

    /// Test the selector against a scope path (outermost first).
    #[inline]
    pub fn matches<S: AsRef<str>>(&self, scopes: &[S]) -> bool {
        self.expr.matches(scopes)
    }

    /// The text this selector was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed expression tree.
    pub fn expression(&self) -> &Expression {
        &self.expr
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

/// Renders the normalized expression, not the original source text.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
