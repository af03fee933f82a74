//! A scanner for a small C-like language.
//!
//! [`lexer::Scanner`] turns a source string into [`lexer::Token`]s, one per
//! call, borrowing every lexeme from the source. Lexical errors are reported
//! as error tokens rather than by aborting the scan.
pub mod commandline;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod source_map;
pub mod span;
