//! Runtime support for peggen-generated parsers
//!
//! This crate provides:
//! - The immutable [`Cursor`] threaded through every generated rule function
//! - [`Match`] / [`ParseResult`], the outcome of a rule invocation
//! - The two primitive matchers generated code is built from
//!   ([`match_literal`] and [`match_any`])
//!
//! Generated parsers depend on nothing else, so the crate has no dependencies.

// Subject + position value type
mod cursor;
pub use cursor::Cursor;

// Rule outcomes
mod result;
pub use result::{Match, ParseResult};

// Primitive matchers called by generated code
mod matchers;
pub use matchers::{match_any, match_literal};
