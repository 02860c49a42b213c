//! Selector lexer using logos.
//!
//! Produces a token list terminated by [`TokenKind::End`]. An escape always
//! extends a literal token right before it, even across whitespace, so both
//! `foo^,` and `foo ^,` are the literal `foo,`. A word run only extends a
//! literal it touches: `foo^,bar` is the one literal `foo,bar`, `foo bar` is
//! two literals.

use logos::Logos;

use crate::error::SelectorError;
use crate::token::{Token, TokenKind};

/// How the lexer treats characters outside the selector alphabet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LexMode {
    /// Skip them silently.
    #[default]
    Permissive,
    /// Report them as [`SelectorError::UnexpectedChar`].
    Strict,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"\^[\s\S]")]
    Escape,

    #[regex(r"[\w/]+")]
    Word,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("-")]
    Not,
    #[token("&")]
    And,
    #[token("|")]
    #[token(",")]
    Or,
}

/// Lex a selector, skipping unknown characters.
pub fn lex(selector: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(selector);
    let mut literal_end = None;
    while let Some(raw) = lexer.next() {
        if let Ok(raw) = raw {
            push(&mut tokens, &mut literal_end, raw, lexer.slice(), lexer.span());
        }
    }
    tokens.push(Token::new(TokenKind::End, selector.len()));
    tokens
}

/// Lex a selector with an explicit [`LexMode`].
pub fn lex_with_mode(selector: &str, mode: LexMode) -> Result<Vec<Token>, SelectorError> {
    if mode == LexMode::Permissive {
        return Ok(lex(selector));
    }

    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(selector);
    let mut literal_end = None;
    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        match raw {
            Ok(raw) => push(&mut tokens, &mut literal_end, raw, lexer.slice(), span),
            Err(()) => {
                return Err(match selector[span.start..].chars().next() {
                    Some('^') | None => SelectorError::DanglingEscape { offset: span.start },
                    Some(ch) => SelectorError::UnexpectedChar {
                        ch,
                        offset: span.start,
                    },
                });
            }
        }
    }
    tokens.push(Token::new(TokenKind::End, selector.len()));
    Ok(tokens)
}

/// Append one raw token.
///
/// `literal_end` is the end offset of the trailing literal while it can still
/// be extended by a directly adjacent word run.
fn push(
    tokens: &mut Vec<Token>,
    literal_end: &mut Option<usize>,
    raw: RawToken,
    slice: &str,
    span: std::ops::Range<usize>,
) {
    let kind = match raw {
        RawToken::Escape | RawToken::Word => {
            let escape = raw == RawToken::Escape;
            // `^` is a single byte
            let text = if escape { &slice[1..] } else { slice };
            match tokens.last_mut() {
                Some(last)
                    if last.is(TokenKind::Literal)
                        && (escape || *literal_end == Some(span.start)) =>
                {
                    last.text.get_or_insert_with(String::new).push_str(text);
                }
                _ => tokens.push(Token::literal(text, span.start)),
            }
            *literal_end = Some(span.end);
            return;
        }
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Not => TokenKind::Not,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
    };
    tokens.push(Token::new(kind, span.start));
    *literal_end = None;
}
