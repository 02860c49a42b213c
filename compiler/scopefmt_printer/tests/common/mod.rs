//! Shared test utilities: a small JavaScript-like parser and the rule sets
//! the integration tests format with.

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]
#![allow(clippy::expect_used, reason = "Tests can panic")]

use scopefmt_printer::{
    Input, InputError, RuleSet, Space, SpacePrinter, SyntaxParser, SyntaxTree, TreeBuilder,
    TreeError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("unbalanced `{0}`")]
    Unbalanced(char),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

const KEYWORDS: &[&str] = &["let", "const", "if", "else", "return", "function"];

/// Tokenizes a tiny JavaScript subset into a flat `Script` tree.
///
/// Node names follow the usual grammar conventions: `VariableDefinition`,
/// `VariableName`, `Number`, `Equals`, `Arrow`, `CompareOp`, `ArithOp`,
/// keywords and punctuation named by their text, `++`/`--` wrapped in a
/// `UnaryExpression` together with their operand, and parenthesized code
/// wrapped in an `ArgList`.
pub struct JsParser;

impl SyntaxParser for JsParser {
    type Tree = SyntaxTree;
    type Error = ParseError;

    fn parse(&self, input: &dyn Input) -> Result<SyntaxTree, ParseError> {
        let text = input.read(0, input.len())?;
        let mut lexer = Lexer {
            text: &text,
            builder: SyntaxTree::builder(),
            pos: 0,
            declaring: false,
            expect_definition: false,
            unary: false,
            parens: 0,
        };
        lexer.builder.open("Script", 0)?;
        lexer.run()?;
        if lexer.parens > 0 {
            return Err(ParseError::Unbalanced('('));
        }
        lexer.builder.close(text.len())?;
        Ok(lexer.builder.finish()?)
    }
}

struct Lexer<'a> {
    text: &'a str,
    builder: TreeBuilder,
    pos: usize,
    /// Inside a `let`/`const` statement.
    declaring: bool,
    /// The next identifier names a new variable.
    expect_definition: bool,
    /// A `UnaryExpression` is open and waiting for its operand.
    unary: bool,
    parens: usize,
}

impl Lexer<'_> {
    fn run(&mut self) -> Result<(), ParseError> {
        let text = self.text;
        while let Some(ch) = self.peek(0) {
            let start = self.pos;
            match ch {
                ' ' | '\t' | '\n' | '\r' => self.pos += 1,
                'a'..='z' | 'A'..='Z' | '_' => {
                    let end = self.scan(|c| c.is_ascii_alphanumeric() || c == '_');
                    let word = &text[start..end];
                    let name = if KEYWORDS.contains(&word) {
                        if matches!(word, "let" | "const") {
                            self.declaring = true;
                            self.expect_definition = true;
                        }
                        word
                    } else if self.expect_definition {
                        self.expect_definition = false;
                        "VariableDefinition"
                    } else {
                        "VariableName"
                    };
                    self.atom(name, start, end)?;
                }
                '0'..='9' => {
                    let end = self.scan(|c| c.is_ascii_digit() || c == '.');
                    self.atom("Number", start, end)?;
                }
                '=' => match self.peek(1) {
                    Some('>') => self.token("Arrow", 2)?,
                    Some('=') => self.token("CompareOp", 2)?,
                    _ => self.token("Equals", 1)?,
                },
                '!' if self.peek(1) == Some('=') => self.token("CompareOp", 2)?,
                '<' | '>' => {
                    let len = if self.peek(1) == Some('=') { 2 } else { 1 };
                    self.token("CompareOp", len)?;
                }
                '+' | '-' if self.peek(1) == Some(ch) => {
                    self.close_unary()?;
                    self.builder.open("UnaryExpression", start)?;
                    self.unary = true;
                    self.leaf("ArithOp", 2)?;
                }
                '+' | '-' | '*' | '/' | '%' => self.token("ArithOp", 1)?,
                '(' => {
                    self.close_unary()?;
                    self.builder.open("ArgList", start)?;
                    self.parens += 1;
                    self.leaf("(", 1)?;
                }
                ')' => {
                    if self.parens == 0 {
                        return Err(ParseError::Unbalanced(')'));
                    }
                    self.token(")", 1)?;
                    self.builder.close(self.pos)?;
                    self.parens -= 1;
                }
                ',' => {
                    if self.declaring {
                        self.expect_definition = true;
                    }
                    self.token(",", 1)?;
                }
                ';' => {
                    self.declaring = false;
                    self.expect_definition = false;
                    self.token(";", 1)?;
                }
                '{' | '}' | '[' | ']' | '.' | ':' => self.token(&text[start..=start], 1)?,
                _ => {
                    return Err(ParseError::UnexpectedChar { ch, offset: start });
                }
            }
        }
        self.close_unary()
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.text[self.pos..].chars().nth(ahead)
    }

    fn scan(&mut self, accept: impl Fn(char) -> bool) -> usize {
        let rest = &self.text[self.pos..];
        self.pos += rest.find(|c: char| !accept(c)).unwrap_or(rest.len());
        self.pos
    }

    fn leaf(&mut self, name: &str, len: usize) -> Result<(), ParseError> {
        self.builder.leaf(name, self.pos, self.pos + len)?;
        self.pos += len;
        Ok(())
    }

    /// A non-operand token; ends a pending unary expression first.
    fn token(&mut self, name: &str, len: usize) -> Result<(), ParseError> {
        self.close_unary()?;
        self.leaf(name, len)
    }

    /// An operand token, which completes a pending unary expression.
    fn atom(&mut self, name: &str, from: usize, to: usize) -> Result<(), ParseError> {
        self.builder.leaf(name, from, to)?;
        self.close_unary()
    }

    fn close_unary(&mut self) -> Result<(), ParseError> {
        if self.unary {
            self.unary = false;
            self.builder.close(self.pos)?;
        }
        Ok(())
    }
}

/// The rule set from the crate's documentation example.
pub fn demo_rules() -> RuleSet {
    RuleSet::builder()
        .rule("^(, ^)", Space::None)
        .rule("Number, VariableName", Space::None)
        .rule("ArithOp, CompareOp, Equals, Arrow", Space::Around)
        .default_space(Space::After)
        .build()
        .expect("demo rules are valid")
}

/// A printer for [`demo_rules`].
pub fn demo_printer() -> SpacePrinter {
    SpacePrinter::new(demo_rules())
}
