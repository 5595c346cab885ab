//! Immutable input position.
//!
//! A [`Cursor`] is a `(subject, position)` pair. Advancing produces a new
//! value and leaves the original untouched, which is what lets generated
//! code backtrack: a cursor saved in a local before trying a sub-expression
//! still denotes the exact earlier state when that attempt fails.

use std::fmt;

/// A position inside a subject string.
///
/// Positions are byte offsets and always lie on a `char` boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<'s> {
    subject: &'s str,
    position: usize,
}

impl<'s> Cursor<'s> {
    /// Cursor at the start of `subject`.
    #[inline]
    pub fn new(subject: &'s str) -> Self {
        Cursor { subject, position: 0 }
    }

    /// The full subject being parsed.
    #[inline]
    pub fn subject(&self) -> &'s str {
        self.subject
    }

    /// Byte offset into the subject.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Unconsumed remainder of the subject.
    #[inline]
    pub fn rest(&self) -> &'s str {
        &self.subject[self.position..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position == self.subject.len()
    }

    /// Returns a new cursor `length` bytes further along the same subject.
    ///
    /// # Panics
    ///
    /// Panics if the new position is past the end of the subject or not on a
    /// `char` boundary. The matchers in this crate only ever report lengths
    /// that satisfy both.
    #[inline]
    #[must_use]
    pub fn advance(self, length: usize) -> Self {
        let position = self.position + length;
        assert!(
            self.subject.is_char_boundary(position),
            "cursor advanced to {} which is not a char boundary of a {}-byte subject",
            position,
            self.subject.len()
        );
        Cursor { subject: self.subject, position }
    }

    /// Text between this cursor and a later cursor on the same subject.
    #[inline]
    pub fn span_to(&self, end: Cursor<'s>) -> &'s str {
        debug_assert!(end.position >= self.position, "span end precedes span start");
        &self.subject[self.position..end.position]
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("rest", &self.rest())
            .finish()
    }
}
