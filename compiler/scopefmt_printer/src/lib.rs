//! Scope Formatter
//!
//! A configurable pretty-printer driven by spacing rules. The printer walks a
//! syntax tree produced by any [`SyntaxParser`], re-emits each token's text
//! and rebuilds the whitespace between tokens: spaces from the
//! [`Space`] directive that the rule set resolves for the token's scope path,
//! newlines and indentation from the original source.
//!
//! ```text
//! RuleSet ── SpacePrinter ◄── Tree::iterate ◄── SyntaxParser::parse ◄── input
//!                 │
//!                 └─► output
//! ```
//!
//! # Modules
//!
//! - [`space`]: the four spacing directives
//! - [`rule`]: one selector paired with a directive
//! - [`rules`]: ordered rule sets and last-match-wins resolution
//! - [`config`]: whitespace options and serde-loadable rule set descriptions
//! - [`printer`]: the rule-driven tree visitor
//! - [`format`]: the [`Printer`] trait and the format entry points
//!
//! # Example
//!
//! ```text
//! let rules = RuleSet::builder()
//!     .rule("^(, ^)", Space::None)
//!     .rule("ArithOp, CompareOp, Equals", Space::Around)
//!     .default_space(Space::After)
//!     .build()?;
//! let mut printer = SpacePrinter::new(rules);
//! let output = format("let a=1   , b    =  2", &parser, &mut printer)?;
//! ```

use std::sync::Once;

pub mod config;
pub mod error;
pub mod format;
pub mod printer;
pub mod rule;
pub mod rules;
pub mod space;

pub use config::{PrinterOptions, RuleEntry, RuleSetConfig, DEFAULT_COLLAPSE_NEWLINE};
pub use error::FormatError;
pub use format::{format, format_async, Printer, ReadyFuture};
pub use printer::{Phase, ReadyHook, SpacePrinter};
pub use rule::Rule;
pub use rules::{RuleSet, RuleSetBuilder};
pub use space::{ParseSpaceError, Space};

pub use scopefmt_selector::{LexMode, Selector, SelectorError};
pub use scopefmt_tree::{
    ChunkedInput, Input, InputError, Source, SyntaxNode, SyntaxParser, SyntaxTree, Tree,
    TreeBuilder, TreeError, TreeVisitor,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or a global subscriber already
/// exists. Safe to call repeatedly.
///
/// ```bash
/// RUST_LOG=scopefmt_printer=debug ...
/// RUST_LOG=scopefmt_printer::printer=trace ...   # every emitted token
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
