//! Primitive matchers.
//!
//! Both return the number of bytes consumed, or `None` when they do not
//! match. Neither moves the cursor; generated code advances explicitly.

use crate::Cursor;

/// Match `literal` exactly at `cursor`.
///
/// The empty literal always matches with length zero.
#[inline]
pub fn match_literal(cursor: Cursor<'_>, literal: &str) -> Option<usize> {
    cursor.rest().starts_with(literal).then_some(literal.len())
}

/// Match any single `char` at `cursor`, failing only at end of input.
///
/// The returned length is the UTF-8 width of that `char`.
#[inline]
pub fn match_any(cursor: Cursor<'_>) -> Option<usize> {
    cursor.rest().chars().next().map(char::len_utf8)
}
