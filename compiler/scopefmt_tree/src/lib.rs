//! Syntax Tree Contract
//!
//! Everything the printer needs from the outside world: ranged access to the
//! source text and an enter/leave traversal over named, spanned nodes.
//!
//! # Modules
//!
//! - [`input`]: the [`Input`] capability and its two implementations
//! - [`tree`]: node views, the visitor and parser traits, and an in-memory
//!   [`SyntaxTree`] that parser adapters can build

pub mod error;
pub mod input;
pub mod tree;

pub use error::{InputError, TreeError};
pub use input::{ChunkedInput, Input, Source};
pub use tree::{NodeId, SyntaxNode, SyntaxParser, SyntaxTree, Tree, TreeBuilder, TreeVisitor};
