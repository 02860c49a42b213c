//! Selector expression tree and matcher.

use std::fmt;

use crate::stack::ensure_sufficient_stack;

/// Parsed selector expression.
///
/// `And` and `Or` keep a flat operand list: folding `a & b & c` produces one
/// `And` with three operands rather than a nested chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Ordered scope names, from the literal split on `/`.
    Literal(Vec<String>),
    Not(Box<Expression>),
    And(Vec<Expression>),
    Or(Vec<Expression>),
}

impl Expression {
    /// Build a literal from its selector text.
    ///
    /// The text is split on `/`, except that a lone `/` is the scope name `/`.
    pub fn literal(text: &str) -> Self {
        if text == "/" {
            return Expression::Literal(vec!["/".to_owned()]);
        }
        Expression::Literal(text.split('/').map(str::to_owned).collect())
    }

    #[must_use]
    pub fn negate(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }

    /// Conjunction with `right`, flattening nested conjunctions.
    #[must_use]
    pub fn and(self, right: Expression) -> Self {
        let mut operands = match self {
            Expression::And(operands) => operands,
            left => vec![left],
        };
        match right {
            Expression::And(rest) => operands.extend(rest),
            right => operands.push(right),
        }
        Expression::And(operands)
    }

    /// Disjunction with `right`, flattening nested disjunctions.
    #[must_use]
    pub fn or(self, right: Expression) -> Self {
        let mut operands = match self {
            Expression::Or(operands) => operands,
            left => vec![left],
        };
        match right {
            Expression::Or(rest) => operands.extend(rest),
            right => operands.push(right),
        }
        Expression::Or(operands)
    }

    /// Evaluate against a scope path, outermost scope first.
    pub fn matches<S: AsRef<str>>(&self, scopes: &[S]) -> bool {
        match self {
            Expression::Literal(path) => matches_path(path, scopes),
            Expression::Not(inner) => !ensure_sufficient_stack(|| inner.matches(scopes)),
            Expression::And(operands) => operands
                .iter()
                .all(|e| ensure_sufficient_stack(|| e.matches(scopes))),
            Expression::Or(operands) => operands
                .iter()
                .any(|e| ensure_sufficient_stack(|| e.matches(scopes))),
        }
    }

    /// Binding power of the rendered form, used to decide on parentheses.
    fn precedence(&self) -> u8 {
        match self {
            Expression::Literal(_) => 100,
            Expression::Not(_) => 40,
            Expression::And(_) => 30,
            Expression::Or(_) => 20,
        }
    }
}

/// `path` occurs in `scopes` as an ordered, not necessarily contiguous,
/// subsequence.
fn matches_path<S: AsRef<str>>(path: &[String], scopes: &[S]) -> bool {
    let mut rest = scopes.iter();
    path.iter()
        .all(|segment| rest.any(|scope| scope.as_ref() == segment))
}

/// Renders a normalized selector that parses back to the same expression.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(path) => write_literal(f, path),
            Expression::Not(inner) => match **inner {
                Expression::Literal(_) | Expression::Not(_) => write!(f, "-{inner}"),
                // `-a b` would negate the whole conjunction
                _ => write!(f, "-({inner})"),
            },
            Expression::And(operands) => write_operands(f, operands, " & ", 30),
            Expression::Or(operands) => write_operands(f, operands, ", ", 20),
        }
    }
}

fn write_operands(
    f: &mut fmt::Formatter<'_>,
    operands: &[Expression],
    separator: &str,
    precedence: u8,
) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if operand.precedence() <= precedence {
            write!(f, "({operand})")?;
        } else {
            write!(f, "{operand}")?;
        }
    }
    Ok(())
}

fn write_literal(f: &mut fmt::Formatter<'_>, path: &[String]) -> fmt::Result {
    if let [only] = path {
        if only == "/" {
            return f.write_str("/");
        }
    }
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            f.write_str("/")?;
        }
        for ch in segment.chars() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                write!(f, "{ch}")?;
            } else {
                write!(f, "^{ch}")?;
            }
        }
    }
    Ok(())
}
