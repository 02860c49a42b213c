//! Printer configuration.
//!
//! [`PrinterOptions`] holds the whitespace knobs; [`RuleSetConfig`] is a plain
//! data description of a whole rule set, loadable with serde:
//!
//! ```json
//! {
//!   "spec": [
//!     { "selector": "^(, ^)", "space": "none" },
//!     { "selector": "ArithOp, CompareOp, Equals, Arrow", "space": "around" }
//!   ],
//!   "default_space": "after",
//!   "collapse_newline": 1
//! }
//! ```

use crate::error::FormatError;
use crate::rules::RuleSet;
use crate::space::Space;

/// Default cap on consecutive newlines between tokens.
pub const DEFAULT_COLLAPSE_NEWLINE: usize = 2;

/// Whitespace handling between tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PrinterOptions {
    /// Skip a leading space when the output already ends in whitespace.
    pub collapse_space: bool,
    /// Maximum consecutive newlines kept between tokens; `0` drops newline
    /// handling entirely.
    pub collapse_newline: usize,
    /// Strip spaces before emitted newlines.
    pub trim_trailing_space: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        PrinterOptions {
            collapse_space: true,
            collapse_newline: DEFAULT_COLLAPSE_NEWLINE,
            trim_trailing_space: true,
        }
    }
}

/// One `selector => space` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleEntry {
    pub selector: String,
    pub space: Space,
}

impl RuleEntry {
    pub fn new(selector: impl Into<String>, space: Space) -> Self {
        RuleEntry {
            selector: selector.into(),
            space,
        }
    }
}

/// Declarative rule set: entries in precedence order (last wins), a default
/// directive and the whitespace options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RuleSetConfig {
    pub spec: Vec<RuleEntry>,
    pub default_space: Space,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub options: PrinterOptions,
}

impl RuleSetConfig {
    /// Compile every selector. Fails on the first invalid one.
    pub fn build(&self) -> Result<RuleSet, FormatError> {
        self.spec
            .iter()
            .fold(RuleSet::builder(), |builder, entry| {
                builder.rule(&entry.selector, entry.space)
            })
            .default_space(self.default_space)
            .options(self.options)
            .build()
    }
}
