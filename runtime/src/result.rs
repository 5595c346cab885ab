//! Outcome of running a rule.

/// A successful match: how many bytes were consumed and what was produced.
///
/// `length` may be zero; a zero-length match is still a success and is
/// distinct from "no match".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match<T> {
    pub length: usize,
    pub value: T,
}

impl<T> Match<T> {
    #[inline]
    pub fn new(length: usize, value: T) -> Self {
        Match { length, value }
    }

    /// Replace the produced value, keeping the consumed length.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Match<U> {
        Match {
            length: self.length,
            value: f(self.value),
        }
    }
}

/// Either `None` (no match) or the [`Match`] a rule produced.
pub type ParseResult<T> = Option<Match<T>>;
