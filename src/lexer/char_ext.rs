//! Useful character extensions.
pub trait CharExt {
    /// Space, tab or carriage return. Line feeds are handled separately,
    /// since they advance the line counter.
    fn is_blank(&self) -> bool;

    fn is_linebreak(&self) -> bool;

    fn is_not_linebreak(&self) -> bool {
        !self.is_linebreak()
    }

    fn is_identifier_start(&self) -> bool;

    fn is_identifier_continue(&self) -> bool;
}
impl CharExt for char {
    fn is_blank(&self) -> bool {
        matches!(*self, ' ' | '\t' | '\r')
    }

    fn is_linebreak(&self) -> bool {
        *self == '\n'
    }

    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    fn is_identifier_continue(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carriage_return_is_blank_but_not_a_linebreak() {
        assert!('\r'.is_blank());
        assert!('\r'.is_not_linebreak());
        assert!('\n'.is_linebreak());
        assert!(!'\n'.is_blank());
    }

    #[test]
    fn identifiers_are_ascii_only() {
        assert!('_'.is_identifier_start());
        assert!(!'7'.is_identifier_start());
        assert!('7'.is_identifier_continue());
        assert!(!'é'.is_identifier_start());
        assert!(!'é'.is_identifier_continue());
    }
}
