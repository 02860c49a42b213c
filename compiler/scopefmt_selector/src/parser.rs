//! Precedence-climbing selector parser.
//!
//! Operators by binding power, high to low: literal adjacency (100), `-` (40),
//! `&` (30), `,`/`|` (20). Parentheses re-enter at precedence 1, which is
//! also the precedence of `(` seen as the start of an adjacent operand.
//!
//! Groups and negations may nest at most [`MAX_NESTING`] levels, which keeps
//! every recursive walk over the resulting [`Expression`] shallow, dropping it
//! included.

use crate::error::SelectorError;
use crate::expr::Expression;
use crate::stack::ensure_sufficient_stack;
use crate::token::{Token, TokenKind};

/// Deepest allowed nesting of `(` groups and `-` negations.
pub const MAX_NESTING: usize = 1_000;

/// Parse a token list produced by the lexer.
///
/// The list must end with [`TokenKind::End`]; everything before it has to
/// form a single expression.
pub fn parse(tokens: &[Token]) -> Result<Expression, SelectorError> {
    let end = tokens.last().map_or(0, |t| t.offset);
    let mut cursor = Cursor::new(tokens, end);
    let expr = expression(&mut cursor, 0)?;
    cursor.expect(TokenKind::End)?;
    Ok(expr)
}

/// Read position over a token slice.
///
/// Reading past the end yields a synthetic `End` token, so a list missing
/// its terminator still fails cleanly.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
    /// Open groups and negations around the current position.
    depth: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token], end: usize) -> Self {
        Cursor {
            tokens,
            pos: 0,
            eof: Token::new(TokenKind::End, end),
            depth: 0,
        }
    }

    #[inline]
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a literal and return its payload.
    fn eat_literal(&mut self) -> Option<String> {
        let token = self.peek();
        if !token.is(TokenKind::Literal) {
            return None;
        }
        let text = token.text.clone().unwrap_or_default();
        self.advance();
        Some(text)
    }

    /// Enter a group or negation whose opening token was just consumed.
    fn descend(&mut self, offset: usize) -> Result<(), SelectorError> {
        if self.depth == MAX_NESTING {
            return Err(SelectorError::TooDeep {
                limit: MAX_NESTING,
                offset,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), SelectorError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(SelectorError::Expected {
                expected: kind,
                found: self.peek().clone(),
            })
        }
    }
}

fn expression(cursor: &mut Cursor<'_>, min_prec: u8) -> Result<Expression, SelectorError> {
    ensure_sufficient_stack(|| expression_inner(cursor, min_prec))
}

fn expression_inner(cursor: &mut Cursor<'_>, min_prec: u8) -> Result<Expression, SelectorError> {
    let offset = cursor.peek().offset;
    let mut left = if cursor.eat(TokenKind::LParen) {
        cursor.descend(offset)?;
        let inner = expression(cursor, TokenKind::LParen.precedence())?;
        cursor.expect(TokenKind::RParen)?;
        cursor.ascend();
        inner
    } else if let Some(text) = cursor.eat_literal() {
        Expression::literal(&text)
    } else if cursor.eat(TokenKind::Not) {
        cursor.descend(offset)?;
        let inner = expression(cursor, TokenKind::Not.precedence())?;
        cursor.ascend();
        Expression::negate(inner)
    } else {
        return Err(SelectorError::UnexpectedToken {
            found: cursor.peek().clone(),
        });
    };

    while min_prec < cursor.peek().precedence() {
        if cursor.eat(TokenKind::Or) {
            let right = expression(cursor, TokenKind::Or.precedence())?;
            left = left.or(right);
        } else {
            // Explicit `&` or plain adjacency
            cursor.eat(TokenKind::And);
            let right = expression(cursor, TokenKind::And.precedence())?;
            left = left.and(right);
        }
    }

    Ok(left)
}
