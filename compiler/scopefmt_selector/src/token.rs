//! Selector tokens.

use std::fmt;

/// Kind of a selector token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A scope name, possibly containing `/` separators and escaped characters.
    Literal,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `-`
    Not,
    /// `&`, also implied by adjacency.
    And,
    /// `,` or `|`
    Or,
    /// Synthetic marker after the last real token.
    End,
}

impl TokenKind {
    /// Binding power used by the parser.
    ///
    /// A literal's high precedence is what makes plain adjacency bind
    /// tighter than `-`: `-a b` negates `a b` as a whole.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            TokenKind::Literal => 100,
            TokenKind::LParen | TokenKind::RParen => 1,
            TokenKind::Not => 40,
            TokenKind::And => 30,
            TokenKind::Or => 20,
            TokenKind::End => 0,
        }
    }

    /// Short name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Literal => "literal",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Not => "'-'",
            TokenKind::And => "'&'",
            TokenKind::Or => "','",
            TokenKind::End => "end",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selector token with its byte offset in the selector text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Payload, only present for literals.
    pub text: Option<String>,
    pub offset: usize,
}

impl Token {
    /// Create a token without payload.
    pub const fn new(kind: TokenKind, offset: usize) -> Self {
        Token {
            kind,
            text: None,
            offset,
        }
    }

    /// Create a literal token.
    pub fn literal(text: impl Into<String>, offset: usize) -> Self {
        Token {
            kind: TokenKind::Literal,
            text: Some(text.into()),
            offset,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn precedence(&self) -> u8 {
        self.kind.precedence()
    }
}

/// `kind` followed by the quoted payload, e.g. `literal "Number"`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) if !text.is_empty() => write!(f, "{} {:?}", self.kind, text),
            _ => write!(f, "{}", self.kind),
        }
    }
}
