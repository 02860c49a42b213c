//! A single spacing rule.

use scopefmt_selector::{LexMode, Selector, SelectorError};

use crate::space::Space;

/// A compiled selector paired with the spacing it applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    selector: Selector,
    space: Space,
}

impl Rule {
    pub fn new(selector: Selector, space: Space) -> Self {
        Rule { selector, space }
    }

    /// Parse `selector` and build a rule from it.
    ///
    /// Literals: `^` escapes the next character, `/` separates nested scopes.
    /// Operators, high to low: `()` grouping, `-` NOT, `&` or adjacency AND,
    /// `|` or `,` OR.
    pub fn define(selector: &str, space: Space) -> Result<Self, SelectorError> {
        Self::define_with_mode(selector, space, LexMode::Permissive)
    }

    pub fn define_with_mode(
        selector: &str,
        space: Space,
        mode: LexMode,
    ) -> Result<Self, SelectorError> {
        Ok(Rule::new(Selector::parse_with_mode(selector, mode)?, space))
    }

    /// Whether the rule applies to a scope path (outermost first).
    #[inline]
    pub fn test<S: AsRef<str>>(&self, scopes: &[S]) -> bool {
        self.selector.matches(scopes)
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn space(&self) -> Space {
        self.space
    }
}
