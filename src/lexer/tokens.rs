//! Tokens, as produced by the scanner.
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use crate::span::{Bytes, Line, Span};

use super::error::LexError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub source: Span,
    pub line: Line,
    pub lexeme: Lexeme<'s>,
}
impl<'s> Token<'s> {
    pub fn length(&self) -> Bytes {
        self.source.length()
    }

    /// The text to display for this token: the source slice it covers, or
    /// the diagnostic message for error tokens.
    pub fn text(&self) -> Cow<'s, str> {
        match &self.lexeme {
            Lexeme::Source(text) => Cow::Borrowed(*text),
            Lexeme::Error(error) => Cow::Owned(error.to_string()),
        }
    }

    pub fn error(&self) -> Option<&LexError> {
        match &self.lexeme {
            Lexeme::Error(error) => Some(error),
            Lexeme::Source(_) => None,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text())
    }
}

/// What a token carries besides its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lexeme<'s> {
    /// The exact slice of source consumed for the token.
    Source(&'s str),
    /// The error an error token reports. Owned, so later errors never
    /// invalidate it.
    Error(LexError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Symbol(Symbol),
    Identifier,
    Literal(Literal),
    Keyword(Keyword),
    Error,
    EndOfInput,
}

impl TokenKind {
    /// A fixed, human-readable label for the token kind.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Symbol(symbol) => symbol.label(),
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Literal(literal) => literal.label(),
            TokenKind::Keyword(keyword) => keyword.label(),
            TokenKind::Error => "ERROR",
            TokenKind::EndOfInput => "EOF",
        }
    }

    /// Classifies a complete identifier-shaped lexeme: a reserved word if it
    /// is exactly equal to one, an identifier otherwise.
    pub fn classify_word(word: &str) -> Self {
        Keyword::from_word(word)
            .map(TokenKind::Keyword)
            .unwrap_or(TokenKind::Identifier)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Punctuation and operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    // Single character
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,
    Tilde,
    // One or two characters
    Plus,
    PlusPlus,
    PlusEqual,
    Minus,
    MinusMinus,
    MinusEqual,
    MinusGreater,
    Star,
    StarEqual,
    Slash,
    SlashEqual,
    Percent,
    PercentEqual,
    Amper,
    AmperEqual,
    AmperAmper,
    Pipe,
    PipeEqual,
    PipePipe,
    Hat,
    HatEqual,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Less,
    LessEqual,
    LessLess,
    Greater,
    GreaterEqual,
    GreaterGreater,
}

impl Symbol {
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::LeftParen => "LEFT_PAREN",
            Symbol::RightParen => "RIGHT_PAREN",
            Symbol::LeftBracket => "LEFT_BRACKET",
            Symbol::RightBracket => "RIGHT_BRACKET",
            Symbol::LeftBrace => "LEFT_BRACE",
            Symbol::RightBrace => "RIGHT_BRACE",
            Symbol::Comma => "COMMA",
            Symbol::Dot => "DOT",
            Symbol::Semicolon => "SEMICOLON",
            Symbol::Tilde => "TILDE",
            Symbol::Plus => "PLUS",
            Symbol::PlusPlus => "PLUS_PLUS",
            Symbol::PlusEqual => "PLUS_EQUAL",
            Symbol::Minus => "MINUS",
            Symbol::MinusMinus => "MINUS_MINUS",
            Symbol::MinusEqual => "MINUS_EQUAL",
            Symbol::MinusGreater => "MINUS_GREATER",
            Symbol::Star => "STAR",
            Symbol::StarEqual => "STAR_EQUAL",
            Symbol::Slash => "SLASH",
            Symbol::SlashEqual => "SLASH_EQUAL",
            Symbol::Percent => "PERCENT",
            Symbol::PercentEqual => "PERCENT_EQUAL",
            Symbol::Amper => "AMPER",
            Symbol::AmperEqual => "AMPER_EQUAL",
            Symbol::AmperAmper => "AMPER_AMPER",
            Symbol::Pipe => "PIPE",
            Symbol::PipeEqual => "PIPE_EQUAL",
            Symbol::PipePipe => "PIPE_PIPE",
            Symbol::Hat => "HAT",
            Symbol::HatEqual => "HAT_EQUAL",
            Symbol::Equal => "EQUAL",
            Symbol::EqualEqual => "EQUAL_EQUAL",
            Symbol::Bang => "BANG",
            Symbol::BangEqual => "BANG_EQUAL",
            Symbol::Less => "LESS",
            Symbol::LessEqual => "LESS_EQUAL",
            Symbol::LessLess => "LESS_LESS",
            Symbol::Greater => "GREATER",
            Symbol::GreaterEqual => "GREATER_EQUAL",
            Symbol::GreaterGreater => "GREATER_GREATER",
        }
    }
}

/// Literal classes. Integer and floating point numbers share a kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    Character,
    String,
    Number,
}

impl Literal {
    pub fn label(&self) -> &'static str {
        match self {
            Literal::Character => "CHARACTER",
            Literal::String => "STRING",
            Literal::Number => "NUMBER",
        }
    }
}

/// A reserved word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Type specifiers
    Signed,
    Unsigned,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Struct,
    Union,
    Enum,
    Void,
    // Control flow
    If,
    Else,
    Switch,
    Case,
    Default,
    While,
    Do,
    For,
    Break,
    Continue,
    Return,
    Goto,
    // Qualifiers and operators
    Const,
    Sizeof,
    Typedef,
}

impl Keyword {
    pub const ALL: [Keyword; 27] = [
        Keyword::Signed,
        Keyword::Unsigned,
        Keyword::Char,
        Keyword::Short,
        Keyword::Int,
        Keyword::Long,
        Keyword::Float,
        Keyword::Double,
        Keyword::Struct,
        Keyword::Union,
        Keyword::Enum,
        Keyword::Void,
        Keyword::If,
        Keyword::Else,
        Keyword::Switch,
        Keyword::Case,
        Keyword::Default,
        Keyword::While,
        Keyword::Do,
        Keyword::For,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Return,
        Keyword::Goto,
        Keyword::Const,
        Keyword::Sizeof,
        Keyword::Typedef,
    ];

    /// Looks up a reserved word. Matching is exact and case-sensitive:
    /// prefixes and extensions of a keyword are not keywords.
    pub fn from_word(word: &str) -> Option<Self> {
        let keyword = match word {
            "signed" => Keyword::Signed,
            "unsigned" => Keyword::Unsigned,
            "char" => Keyword::Char,
            "short" => Keyword::Short,
            "int" => Keyword::Int,
            "long" => Keyword::Long,
            "float" => Keyword::Float,
            "double" => Keyword::Double,
            "struct" => Keyword::Struct,
            "union" => Keyword::Union,
            "enum" => Keyword::Enum,
            "void" => Keyword::Void,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "switch" => Keyword::Switch,
            "case" => Keyword::Case,
            "default" => Keyword::Default,
            "while" => Keyword::While,
            "do" => Keyword::Do,
            "for" => Keyword::For,
            "break" => Keyword::Break,
            "continue" => Keyword::Continue,
            "return" => Keyword::Return,
            "goto" => Keyword::Goto,
            "const" => Keyword::Const,
            "sizeof" => Keyword::Sizeof,
            "typedef" => Keyword::Typedef,
            _ => return None,
        };
        Some(keyword)
    }

    /// The keyword as it is spelled in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Signed => "signed",
            Keyword::Unsigned => "unsigned",
            Keyword::Char => "char",
            Keyword::Short => "short",
            Keyword::Int => "int",
            Keyword::Long => "long",
            Keyword::Float => "float",
            Keyword::Double => "double",
            Keyword::Struct => "struct",
            Keyword::Union => "union",
            Keyword::Enum => "enum",
            Keyword::Void => "void",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::Default => "default",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::For => "for",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
            Keyword::Goto => "goto",
            Keyword::Const => "const",
            Keyword::Sizeof => "sizeof",
            Keyword::Typedef => "typedef",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Keyword::Signed => "SIGNED",
            Keyword::Unsigned => "UNSIGNED",
            Keyword::Char => "CHAR",
            Keyword::Short => "SHORT",
            Keyword::Int => "INT",
            Keyword::Long => "LONG",
            Keyword::Float => "FLOAT",
            Keyword::Double => "DOUBLE",
            Keyword::Struct => "STRUCT",
            Keyword::Union => "UNION",
            Keyword::Enum => "ENUM",
            Keyword::Void => "VOID",
            Keyword::If => "IF",
            Keyword::Else => "ELSE",
            Keyword::Switch => "SWITCH",
            Keyword::Case => "CASE",
            Keyword::Default => "DEFAULT",
            Keyword::While => "WHILE",
            Keyword::Do => "DO",
            Keyword::For => "FOR",
            Keyword::Break => "BREAK",
            Keyword::Continue => "CONTINUE",
            Keyword::Return => "RETURN",
            Keyword::Goto => "GOTO",
            Keyword::Const => "CONST",
            Keyword::Sizeof => "SIZEOF",
            Keyword::Typedef => "TYPEDEF",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_word(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn keyword_labels_are_upper_case_spellings() {
        for keyword in Keyword::ALL {
            assert_eq!(keyword.label(), keyword.as_str().to_ascii_uppercase());
        }
    }

    #[test]
    fn prefixes_and_extensions_are_identifiers() {
        for word in ["breaking", "forever", "intX", "d", "doo", "i", "in", "sizeo", "unsignedd"] {
            assert_eq!(TokenKind::classify_word(word), TokenKind::Identifier, "{word}");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(TokenKind::classify_word("Return"), TokenKind::Identifier);
        assert_eq!(TokenKind::classify_word("RETURN"), TokenKind::Identifier);
        assert_eq!(
            TokenKind::classify_word("return"),
            TokenKind::Keyword(Keyword::Return)
        );
    }

    #[test]
    fn token_kind_labels() {
        assert_eq!(TokenKind::Symbol(Symbol::LessLess).to_string(), "LESS_LESS");
        assert_eq!(TokenKind::Literal(Literal::Number).to_string(), "NUMBER");
        assert_eq!(TokenKind::Keyword(Keyword::Typedef).to_string(), "TYPEDEF");
        assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
        assert_eq!(TokenKind::Error.to_string(), "ERROR");
        assert_eq!(TokenKind::EndOfInput.to_string(), "EOF");
    }
}
