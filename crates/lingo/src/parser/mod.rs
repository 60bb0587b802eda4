//! Locale template parser.
//!
//! Templates are the format strings stored in locale data, e.g.
//! `"{x_in_x00} hundred {formatted_decade}"`. The parser produces an AST that
//! the rule cascade renders against named bindings.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::parse_template;
