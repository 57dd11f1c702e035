//! Text emission building blocks.
//!
//! - [`Writer`] - Contract between model nodes and the text sink
//! - [`Render`] - Trait for nodes that emit themselves through a [`Writer`]
//! - [`Token`] - Keywords, punctuation, identifiers and literals
//! - [`SourceWriter`] - Indenting `String` writer bound to one compilation unit

mod source_writer;
mod token;
mod writer;

pub use source_writer::{SourceWriter, render_to_string};
pub use token::{Keyword, Punct, Token};
pub(crate) use writer::render_separated;
pub use writer::{Render, Writer};
