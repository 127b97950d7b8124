/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::Phase;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

pub type LineNumber = u16;
pub type Column = std::ops::Range<usize>;

/// Highest line number a program may use.
pub const MAX_LINE_NUMBER: LineNumber = 65529;
