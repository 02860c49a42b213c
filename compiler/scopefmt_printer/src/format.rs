//! Format orchestration.
//!
//! A format pass resets the printer, hands it the input, parses the input
//! with an external [`SyntaxParser`], replays the tree into the printer and
//! finalizes it. The printer's output buffer is the result.

use std::future::Future;
use std::pin::Pin;

use scopefmt_tree::{Input, Source, SyntaxParser, Tree, TreeVisitor};
use tracing::debug;

use crate::error::FormatError;

/// Future returned by [`Printer::ready`].
pub type ReadyFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A tree visitor that accumulates formatted text.
///
/// Only the accessors are required; the lifecycle hooks default to no-ops.
pub trait Printer: TreeVisitor<Error = FormatError> {
    /// The input of the current pass.
    fn input(&self) -> &Source;

    fn set_input(&mut self, input: Source);

    /// Text produced so far.
    fn output(&self) -> &str;

    /// Called once after the traversal.
    fn done(&mut self) -> Result<(), FormatError> {
        Ok(())
    }

    /// Clear all per-pass state. Called before every pass.
    fn dispose(&mut self) {}

    /// Work to await before the output is final; see [`format_async`].
    fn ready(&mut self) -> Option<ReadyFuture> {
        None
    }
}

/// Format `input` with `parser` and `printer`, returning the output.
///
/// The printer is reset first, so one printer can serve many passes. A
/// parser failure is returned as [`FormatError::Parse`] before the printer
/// sees any node.
#[tracing::instrument(level = "debug", skip_all)]
pub fn format<P, R>(
    input: impl Into<Source>,
    parser: &P,
    printer: &mut R,
) -> Result<String, FormatError>
where
    P: SyntaxParser,
    R: Printer + ?Sized,
{
    run(input.into(), parser, printer)?;
    Ok(printer.output().to_owned())
}

/// [`format`], then await the printer's [`ready`](Printer::ready) future
/// before reading the output.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn format_async<P, R>(
    input: impl Into<Source>,
    parser: &P,
    printer: &mut R,
) -> Result<String, FormatError>
where
    P: SyntaxParser,
    R: Printer + ?Sized,
{
    run(input.into(), parser, printer)?;
    if let Some(ready) = printer.ready() {
        debug!("awaiting printer");
        ready.await;
    }
    Ok(printer.output().to_owned())
}

fn run<P, R>(input: Source, parser: &P, printer: &mut R) -> Result<(), FormatError>
where
    P: SyntaxParser,
    R: Printer + ?Sized,
{
    printer.dispose();
    debug!(len = input.len(), "format start");
    printer.set_input(input);

    let tree = parser
        .parse(printer.input())
        .map_err(|err| FormatError::Parse(Box::new(err)))?;
    tree.iterate(printer)?;
    printer.done()?;

    debug!(len = printer.output().len(), "format done");
    Ok(())
}
