//! Format error type.

use scopefmt_selector::SelectorError;
use scopefmt_tree::InputError;
use thiserror::Error;

/// Error from building a rule set or running a format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A rule's selector did not parse; no rule set was built.
    #[error("invalid selector `{selector}`: {source}")]
    Selector {
        selector: String,
        #[source]
        source: SelectorError,
    },

    /// The external parser failed; its error is passed through untouched.
    #[error("parser failed: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The tree's spans do not fit the input.
    #[error(transparent)]
    Input(#[from] InputError),
}
