use crate::span::{Bytes, Span};

/// An error that can point at the range of source code that caused it.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;

    fn length(&self) -> Bytes {
        self.range().length()
    }
}
