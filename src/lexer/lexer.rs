//! The scanner, which turns a source string into a stream of [`Token`]s.
use log::{debug, trace};

use crate::span::{Bytes, Line, Span};

use super::{char_ext::*, char_lexer::*, error::*, tokens::*};

/// Produces one token per call to [`Scanner::next_token`].
///
/// The scanner borrows the source for its whole lifetime and never copies
/// it: every token it returns borrows the slice it covers. Lookahead is
/// limited to the character after the read cursor.
pub struct Scanner<'s> {
    lexer: CharLexer<'s>,
    start: Bytes,
    line: Line,
    exhausted: bool,
}

/// Scans all of `source`, up to and including the end-of-input token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

/// Scans all of `source`. Fails with every lexical error encountered if
/// there was at least one.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, Vec<LexError>> {
    let tokens = tokenize(source);
    let errors: Vec<LexError> = tokens.iter().filter_map(Token::error).cloned().collect();

    if !errors.is_empty() {
        Err(errors)
    } else {
        Ok(tokens)
    }
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            lexer: CharLexer::new(source),
            start: Bytes::new(0),
            line: Line::first(),
            exhausted: false,
        }
    }

    /// Restarts scanning at the beginning of `source`, on line 1.
    pub fn reset(&mut self, source: &'s str) {
        debug!("Resetting scanner ({} bytes of source)", source.len());
        *self = Self::new(source);
    }

    /// The line the read cursor is currently on.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Scans the next token.
    ///
    /// Once the end of the source is reached, this keeps returning an empty
    /// [`TokenKind::EndOfInput`] token.
    pub fn next_token(&mut self) -> Token<'s> {
        self.skip_whitespace();
        self.start = self.lexer.byte_position();

        let token = match self.lexer.try_next() {
            None => self.make_token(TokenKind::EndOfInput),
            Some(lead) if lead.is_identifier_start() => self.identifier(),
            Some(lead) if lead.is_ascii_digit() => self.number(),
            Some(lead) => self.symbol(lead),
        };

        trace!("{} {}", token.line, token);
        token
    }

    /// Skips blanks, newlines and line comments.
    fn skip_whitespace(&mut self) {
        loop {
            match self.lexer.peek() {
                Some(ch) if ch.is_blank() => {
                    self.lexer.try_next();
                }
                Some(ch) if ch.is_linebreak() => {
                    self.lexer.try_next();
                    self.line += 1;
                }
                Some('/') if self.lexer.peek_next() == Some('/') => {
                    // The linebreak is left for the next iteration to count.
                    self.lexer.consume_while(CharExt::is_not_linebreak);
                }
                _ => return,
            }
        }
    }

    fn identifier(&mut self) -> Token<'s> {
        self.lexer.consume_while(CharExt::is_identifier_continue);
        let kind = TokenKind::classify_word(self.lexeme());
        self.make_token(kind)
    }

    /// A run of digits, optionally followed by a fractional part. A trailing
    /// `.` without digits after it is not part of the number.
    fn number(&mut self) -> Token<'s> {
        self.lexer.consume_while(char::is_ascii_digit);

        let has_fraction = self.lexer.peek() == Some('.')
            && self.lexer.peek_next().is_some_and(|ch| ch.is_ascii_digit());
        if has_fraction {
            self.lexer.try_next();
            self.lexer.consume_while(char::is_ascii_digit);
        }

        self.make_token(TokenKind::Literal(Literal::Number))
    }

    fn symbol(&mut self, lead: char) -> Token<'s> {
        let symbol = match lead {
            '(' => Symbol::LeftParen,
            ')' => Symbol::RightParen,
            '[' => Symbol::LeftBracket,
            ']' => Symbol::RightBracket,
            '{' => Symbol::LeftBrace,
            '}' => Symbol::RightBrace,
            ',' => Symbol::Comma,
            '.' => Symbol::Dot,
            ';' => Symbol::Semicolon,
            '~' => Symbol::Tilde,
            '+' => self.longest(&[('+', Symbol::PlusPlus), ('=', Symbol::PlusEqual)], Symbol::Plus),
            '-' => self.longest(
                &[
                    ('-', Symbol::MinusMinus),
                    ('=', Symbol::MinusEqual),
                    ('>', Symbol::MinusGreater),
                ],
                Symbol::Minus,
            ),
            '*' => self.longest(&[('=', Symbol::StarEqual)], Symbol::Star),
            '/' => self.longest(&[('=', Symbol::SlashEqual)], Symbol::Slash),
            '%' => self.longest(&[('=', Symbol::PercentEqual)], Symbol::Percent),
            '&' => self.longest(
                &[('=', Symbol::AmperEqual), ('&', Symbol::AmperAmper)],
                Symbol::Amper,
            ),
            '|' => self.longest(&[('=', Symbol::PipeEqual), ('|', Symbol::PipePipe)], Symbol::Pipe),
            '^' => self.longest(&[('=', Symbol::HatEqual)], Symbol::Hat),
            '=' => self.longest(&[('=', Symbol::EqualEqual)], Symbol::Equal),
            '!' => self.longest(&[('=', Symbol::BangEqual)], Symbol::Bang),
            '<' => self.longest(&[('=', Symbol::LessEqual), ('<', Symbol::LessLess)], Symbol::Less),
            '>' => self.longest(
                &[('=', Symbol::GreaterEqual), ('>', Symbol::GreaterGreater)],
                Symbol::Greater,
            ),
            '"' => return self.string_literal(),
            '\'' => return self.character_literal(),
            _ => return self.make_error(ErrorType::UnexpectedCharacter(lead)),
        };

        self.make_token(TokenKind::Symbol(symbol))
    }

    /// Picks the first two-character form whose second character is next in
    /// the source, consuming that character. Falls back to `single`.
    fn longest(&mut self, doubles: &[(char, Symbol)], single: Symbol) -> Symbol {
        doubles
            .iter()
            .find(|(second, _)| self.lexer.recognise(*second))
            .map(|&(_, symbol)| symbol)
            .unwrap_or(single)
    }

    /// Scans the rest of a string literal; the opening quote has been read.
    /// A linebreak inside the literal is left unconsumed.
    fn string_literal(&mut self) -> Token<'s> {
        self.lexer
            .consume_while(|&ch| ch != '"' && ch.is_not_linebreak());

        match self.lexer.peek() {
            Some('"') => {
                self.lexer.try_next();
                self.make_token(TokenKind::Literal(Literal::String))
            }
            Some(_) => self.make_error(ErrorType::MultilineString),
            None => self.make_error(ErrorType::UnterminatedString),
        }
    }

    /// Scans the rest of a character literal; the opening quote has been read.
    /// Empty literals (`''`) are accepted.
    fn character_literal(&mut self) -> Token<'s> {
        self.lexer
            .consume_while(|&ch| ch != '\'' && ch.is_not_linebreak());

        match self.lexer.peek() {
            Some('\'') => {
                self.lexer.try_next();
            }
            Some(_) => return self.make_error(ErrorType::MultilineCharacter),
            None => return self.make_error(ErrorType::UnterminatedCharacter),
        }

        let lexeme = self.lexeme();
        let enclosed = &lexeme[1..lexeme.len() - 1];
        if enclosed.chars().count() <= 1 {
            self.make_token(TokenKind::Literal(Literal::Character))
        } else {
            self.make_error(ErrorType::invalid_character_literal(enclosed))
        }
    }

    fn current_span(&self) -> Span {
        Span::new(self.start, self.lexer.byte_position())
    }

    /// The source consumed for the token being scanned.
    fn lexeme(&self) -> &'s str {
        self.lexer.slice(self.current_span())
    }

    fn make_token(&self, kind: TokenKind) -> Token<'s> {
        Token {
            kind,
            source: self.current_span(),
            line: self.line,
            lexeme: Lexeme::Source(self.lexeme()),
        }
    }

    fn make_error(&self, error_type: ErrorType) -> Token<'s> {
        let error = LexError {
            range: self.current_span(),
            line: self.line,
            error_type,
        };
        debug!("Lexical error at line {}: {}", error.line, error);

        Token {
            kind: TokenKind::Error,
            source: error.range,
            line: self.line,
            lexeme: Lexeme::Error(error),
        }
    }
}

impl<'s> Iterator for Scanner<'s> {
    type Item = Token<'s>;

    /// Yields every token once, the end-of-input token included.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        self.exhausted = token.is_end_of_input();
        Some(token)
    }
}
