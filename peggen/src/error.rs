//! Compile errors.
//!
//! These abort a pipeline. Problems with the grammar itself are reported as
//! [`Diagnostic`](crate::result::Diagnostic)s instead and never stop
//! compilation.

use thiserror::Error;

/// Result alias used by compile passes.
pub type Result<T> = std::result::Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("grammar has no rules, so there is no entry point to generate")]
    NoEntryRule,

    #[error("{context} `{name}` is not a valid Rust identifier")]
    InvalidIdentifier { context: &'static str, name: String },
}
