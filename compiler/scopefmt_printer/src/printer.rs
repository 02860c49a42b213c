//! Tree-walking spacing printer.
//!
//! Re-emits the text of every leaf token, rebuilding the whitespace between
//! tokens from the rule set:
//!
//! 1. newlines in the original gap are kept, capped at `collapse_newline`
//! 2. a token at the start of a line keeps its original indentation
//! 3. the resolved [`Space`](crate::Space) adds a space before and/or after the token
//!
//! Container nodes only contribute their names to the scope path.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use scopefmt_tree::{Input, Source, SyntaxNode, TreeVisitor};
use tracing::trace;

use crate::config::{PrinterOptions, RuleSetConfig};
use crate::error::FormatError;
use crate::format::{Printer, ReadyFuture};
use crate::rules::RuleSet;

/// Factory for the asynchronous finalize step of [`SpacePrinter`].
pub type ReadyHook = Box<dyn FnMut() -> ReadyFuture + Send>;

/// Lifecycle of one format pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Freshly created or reset; also the state after finalizing.
    #[default]
    Idle,
    /// Receiving enter/leave events.
    Traversing,
    /// Inside [`Printer::done`].
    Finalizing,
}

/// The rule-driven [`Printer`].
///
/// The rule set is shared and read-only; everything else is per-pass state,
/// cleared by [`Printer::dispose`] at the start of each format.
pub struct SpacePrinter {
    rules: Arc<RuleSet>,
    input: Source,
    output: String,
    /// Names of the nodes currently entered, outermost first.
    scopes: Vec<String>,
    /// Span of the previous emitted token.
    last: Range<usize>,
    /// Set on enter, cleared on leave: still set at leave time means the
    /// node had no children.
    entered: bool,
    phase: Phase,
    ready: Option<ReadyHook>,
}

impl SpacePrinter {
    pub fn new(rules: impl Into<Arc<RuleSet>>) -> Self {
        SpacePrinter {
            rules: rules.into(),
            input: Source::default(),
            output: String::new(),
            scopes: Vec::new(),
            last: 0..0,
            entered: false,
            phase: Phase::Idle,
            ready: None,
        }
    }

    /// Build the rule set described by `config` and wrap it in a printer.
    pub fn from_config(config: &RuleSetConfig) -> Result<Self, FormatError> {
        Ok(SpacePrinter::new(config.build()?))
    }

    /// Install an asynchronous finalize step, awaited by
    /// [`format_async`](crate::format_async) before the output is returned.
    #[must_use]
    pub fn with_ready<F>(mut self, hook: F) -> Self
    where
        F: FnMut() -> ReadyFuture + Send + 'static,
    {
        self.ready = Some(Box::new(hook));
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn emit(&mut self, node: SyntaxNode<'_>) -> Result<(), FormatError> {
        let options = self.rules.options();

        if options.collapse_newline > 0 {
            let gap = self.input.read(self.last.end, node.from)?;
            collapse_newlines(&mut self.output, &gap, options);
        }

        let indent = indent_at(&self.input, node.from);
        self.output.extend(std::iter::repeat(' ').take(indent));

        let (rule, space) = self.rules.resolve_with_index(self.scopes.as_slice());
        let text = self.input.read(node.from, node.to)?;
        trace!(
            scopes = %self.scopes.join("/"),
            text = %text,
            rule = ?rule,
            space = %space,
            "emit token"
        );

        if options.collapse_space
            && space.before()
            && !matches!(self.output.as_bytes().last(), Some(b' ' | b'\n'))
        {
            self.output.push(' ');
        }
        self.output.push_str(&text);
        if space.after() {
            self.output.push(' ');
        }

        self.last = node.from..node.to;
        Ok(())
    }
}

/// Apply the newline part of a gap between two tokens.
fn collapse_newlines(output: &mut String, gap: &str, options: PrinterOptions) {
    let newlines = gap.bytes().filter(|&b| b == b'\n').count();
    if newlines == 0 {
        return;
    }

    if options.trim_trailing_space {
        output.truncate(output.trim_end().len());
        let kept = newlines.min(options.collapse_newline);
        output.extend(std::iter::repeat('\n').take(kept));
    } else {
        // Gap text up to and including the last newline allowed
        let end = gap
            .match_indices('\n')
            .take(options.collapse_newline)
            .last()
            .map_or(0, |(i, _)| i + 1);
        output.push_str(&gap[..end]);
    }
}

/// Width of the run of spaces before `at`, if that run starts a line.
///
/// The start of the input counts as a line start.
fn indent_at(input: &impl Input, at: usize) -> usize {
    let mut start = at;
    while start > 0 {
        match input.byte_at(start - 1) {
            Some(b' ') => start -= 1,
            Some(b'\n') => break,
            _ => return 0,
        }
    }
    at - start
}

impl TreeVisitor for SpacePrinter {
    type Error = FormatError;

    fn enter(&mut self, node: SyntaxNode<'_>) -> Result<(), FormatError> {
        self.phase = Phase::Traversing;
        self.entered = true;
        self.scopes.push(node.name.to_owned());
        Ok(())
    }

    fn leave(&mut self, node: SyntaxNode<'_>) -> Result<(), FormatError> {
        // Zero-width leaves (error recovery nodes) have nothing to print
        if self.entered && !node.is_empty() {
            self.emit(node)?;
        }
        self.scopes.pop();
        self.entered = false;
        Ok(())
    }
}

impl Printer for SpacePrinter {
    fn input(&self) -> &Source {
        &self.input
    }

    fn set_input(&mut self, input: Source) {
        self.input = input;
    }

    fn output(&self) -> &str {
        &self.output
    }

    /// Keep one trailing newline if the source ended with one after the
    /// last token.
    fn done(&mut self) -> Result<(), FormatError> {
        self.phase = Phase::Finalizing;
        let tail = self.input.read(self.last.end, self.input.len())?;
        if tail.contains('\n') {
            self.output.push('\n');
        }
        self.phase = Phase::Idle;
        Ok(())
    }

    fn dispose(&mut self) {
        self.input = Source::default();
        self.output.clear();
        self.scopes.clear();
        self.last = 0..0;
        self.entered = false;
        self.phase = Phase::Idle;
    }

    fn ready(&mut self) -> Option<ReadyFuture> {
        self.ready.as_mut().map(|hook| hook())
    }
}

impl fmt::Debug for SpacePrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpacePrinter")
            .field("rules", &self.rules)
            .field("output", &self.output)
            .field("scopes", &self.scopes)
            .field("last", &self.last)
            .field("entered", &self.entered)
            .field("phase", &self.phase)
            .field("ready", &self.ready.is_some())
            .finish_non_exhaustive()
    }
}
