//! Contains the [`Bytes`], [`Span`] and [`Line`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{Add, AddAssign, Sub},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bytes(usize);
impl Bytes {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Bytes> for usize {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
impl AddAssign<usize> for Bytes {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl Add<usize> for Bytes {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}
impl Sub<Bytes> for Bytes {
    type Output = Self;

    fn sub(self, rhs: Bytes) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A half-open byte range into a source string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: Bytes,
    end: Bytes,
}
impl Span {
    pub fn new(start: Bytes, end: Bytes) -> Self {
        Self { start, end }
    }

    pub fn zero() -> Self {
        Self::new(Bytes::new(0), Bytes::new(0))
    }

    pub fn length(&self) -> Bytes {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn start(&self) -> Bytes {
        self.start
    }

    pub fn end(&self) -> Bytes {
        self.end
    }

    /// Resolves the span against the source it was produced from.
    /// Panics if the span lies outside `target`.
    pub fn lookup<'t>(&self, target: &'t str) -> &'t str {
        &target[self.start.into()..self.end.into()]
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A 1-based line number in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub usize);

impl Line {
    pub fn first() -> Self {
        Self(1)
    }
}
impl Add<usize> for Line {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}
impl AddAssign<usize> for Line {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
