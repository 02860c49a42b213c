//! Rule sets and directive resolution.
//!
//! Rules are checked from the last declared to the first; the first match
//! decides. A later rule therefore always overrides an earlier one, no matter
//! how specific either selector is.

use rustc_hash::FxHashMap;
use scopefmt_selector::LexMode;
use tracing::debug;

use crate::config::PrinterOptions;
use crate::error::FormatError;
use crate::rule::Rule;
use crate::space::Space;

/// Ordered spacing rules, a fallback directive and whitespace options.
///
/// Immutable once built and safe to share between printers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    default_space: Space,
    options: PrinterOptions,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Directive for a scope path.
    #[inline]
    pub fn resolve<S: AsRef<str>>(&self, scopes: &[S]) -> Space {
        self.resolve_with_index(scopes).1
    }

    /// Directive for a scope path, along with the index of the rule that
    /// produced it (`None` for the default).
    pub fn resolve_with_index<S: AsRef<str>>(&self, scopes: &[S]) -> (Option<usize>, Space) {
        self.rules
            .iter()
            .enumerate()
            .rev()
            .find(|(_, rule)| rule.test(scopes))
            .map_or((None, self.default_space), |(i, rule)| {
                (Some(i), rule.space())
            })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_space(&self) -> Space {
        self.default_space
    }

    pub fn options(&self) -> PrinterOptions {
        self.options
    }
}

/// Builder for [`RuleSet`].
///
/// Declaring a selector a second time replaces its directive but keeps its
/// original position.
#[derive(Clone, Debug, Default)]
pub struct RuleSetBuilder {
    entries: Vec<(String, Space)>,
    positions: FxHashMap<String, usize>,
    default_space: Space,
    options: PrinterOptions,
    mode: LexMode,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn rule(mut self, selector: &str, space: Space) -> Self {
        if let Some(&i) = self.positions.get(selector) {
            self.entries[i].1 = space;
        } else {
            self.positions.insert(selector.to_owned(), self.entries.len());
            self.entries.push((selector.to_owned(), space));
        }
        self
    }

    #[must_use]
    pub fn default_space(mut self, space: Space) -> Self {
        self.default_space = space;
        self
    }

    #[must_use]
    pub fn options(mut self, options: PrinterOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn collapse_space(mut self, collapse: bool) -> Self {
        self.options.collapse_space = collapse;
        self
    }

    #[must_use]
    pub fn collapse_newline(mut self, max: usize) -> Self {
        self.options.collapse_newline = max;
        self
    }

    #[must_use]
    pub fn trim_trailing_space(mut self, trim: bool) -> Self {
        self.options.trim_trailing_space = trim;
        self
    }

    /// How selector text is lexed; permissive unless set.
    #[must_use]
    pub fn lex_mode(mut self, mode: LexMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compile all selectors. The first invalid one aborts the build.
    pub fn build(self) -> Result<RuleSet, FormatError> {
        let rules = self
            .entries
            .into_iter()
            .map(|(selector, space)| {
                Rule::define_with_mode(&selector, space, self.mode)
                    .map_err(|source| FormatError::Selector { selector, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            rules = rules.len(),
            default = %self.default_space,
            "rule set built"
        );

        Ok(RuleSet {
            rules,
            default_space: self.default_space,
            options: self.options,
        })
    }
}
