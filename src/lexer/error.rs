//! Lexical errors, as carried by error tokens.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{
    error::PositionalError,
    span::{Bytes, Line, Span},
};

/// Maximum number of characters of offending source text embedded in a
/// diagnostic message.
pub const MAX_DIAGNOSTIC_TEXT: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorType {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unsupported multi-line string")]
    MultilineString,
    #[error("incomplete character literal, missing closing quote")]
    UnterminatedCharacter,
    #[error("unsupported multi-line character")]
    MultilineCharacter,
    #[error("non-single-character token: {0}")]
    InvalidCharacterLiteralLength(String),
    #[error("unexpected character: {0}")]
    UnexpectedCharacter(char),
}

impl ErrorType {
    /// Builds an [`ErrorType::InvalidCharacterLiteralLength`], truncating the
    /// enclosed text to [`MAX_DIAGNOSTIC_TEXT`] characters.
    pub fn invalid_character_literal(enclosed: &str) -> Self {
        let mut text: String = enclosed.chars().take(MAX_DIAGNOSTIC_TEXT).collect();
        if text.len() < enclosed.len() {
            text.push_str("...");
        }
        Self::InvalidCharacterLiteralLength(text)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub range: Span,
    pub line: Line,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn length(&self) -> Bytes {
        self.range.length()
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.error_type))
    }
}

impl PositionalError for LexError {
    fn range(&self) -> Span {
        self.range
    }

    fn describe(&self) -> String {
        format!("line {}: {}", self.line, self)
    }
}
