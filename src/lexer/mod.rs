//! Functionality for converting a source code string into a [`Token`] stream.
mod char_ext;
mod char_lexer;
mod error;
mod lexer;

pub mod tokens;

pub use error::{ErrorType, LexError, MAX_DIAGNOSTIC_TEXT};
pub use lexer::*;
pub use tokens::{Keyword, Lexeme, Literal, Symbol, Token, TokenKind};
