use crate::span::{Bytes, Span};

/// Read cursor over an immutable source string, with position information.
///
/// Since it only holds a reference and a position, this type is very
/// lightweight, and slices handed out by it borrow from the source rather
/// than copying it.
#[derive(Clone)]
pub struct CharLexer<'a> {
    source: &'a str,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_position: Bytes::new(0),
        }
    }

    fn remaining(&self) -> &'a str {
        &self.source[self.byte_position.into()..]
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.peek();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character after the next one without consuming anything.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next()
    }

    /// Retrieves the byte position of the lexer.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        match self.peek() {
            Some(ch) if ch == character => {
                self.byte_position += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns the consumed part of the source.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> &'a str
    where
        P: FnMut(&char) -> bool,
    {
        let start = self.byte_position;
        while let Some(ch) = self.peek() {
            if predicate(&ch) {
                self.byte_position += ch.len_utf8();
            } else {
                break;
            }
        }
        self.slice(Span::new(start, self.byte_position))
    }

    /// Returns the source text covered by `span`.
    pub fn slice(&self, span: Span) -> &'a str {
        span.lookup(self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peeking_does_not_advance() {
        let lexer = CharLexer::new("ab");

        assert_eq!(lexer.peek(), Some('a'));
        assert_eq!(lexer.peek_next(), Some('b'));
        assert_eq!(lexer.byte_position(), Bytes::new(0));
    }

    #[test]
    fn peek_next_at_last_character_is_none() {
        let mut lexer = CharLexer::new("a");

        assert_eq!(lexer.peek_next(), None);
        lexer.try_next();
        assert_eq!(lexer.peek(), None);
        assert_eq!(lexer.peek_next(), None);
    }

    #[test]
    fn recognise_only_consumes_on_match() {
        let mut lexer = CharLexer::new("+=");

        assert!(!lexer.recognise('='));
        assert!(lexer.recognise('+'));
        assert!(lexer.recognise('='));
        assert!(!lexer.recognise('='));
    }

    #[test]
    fn consume_while_borrows_from_source() {
        let mut lexer = CharLexer::new("1234;");

        assert_eq!(lexer.consume_while(char::is_ascii_digit), "1234");
        assert_eq!(lexer.byte_position(), Bytes::new(4));
        assert_eq!(lexer.consume_while(char::is_ascii_digit), "");
    }

    #[test]
    fn multibyte_characters_advance_by_their_encoded_length() {
        let mut lexer = CharLexer::new("é;");

        assert_eq!(lexer.try_next(), Some('é'));
        assert_eq!(lexer.byte_position(), Bytes::new(2));
        assert_eq!(lexer.peek(), Some(';'));
    }
}
