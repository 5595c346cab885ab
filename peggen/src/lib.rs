//! # peggen: PEG grammar to Rust parser generator
//!
//! peggen is the backend of a grammar compiler. It takes an already
//! validated grammar (ordered rules built from PEG combinators) and emits
//! the source of a self-contained recursive-descent, backtracking parser:
//!
//! - Ordered choice, greedy repetition and zero-width lookahead are compiled
//!   straight into Rust control flow, with no interpreter at parse time
//! - Backtracking is free: the runtime `Cursor` is an immutable `Copy` value
//! - Output is deterministic, byte for byte
//!
//! ## Architecture
//!
//! ```text
//!   Grammar (expressions)
//!        │
//!        ▼
//!  ┌───────────────────────────────────────────────┐
//!  │ Pipeline (pass)                               │
//!  │   1. ReportUnusedRulesPass ──→ diagnostics    │
//!  │   2. GenerateCodePass      ──→ code           │
//!  │        walks every rule with ExpressionWalker │
//!  └───────────────────────────────────────────────┘
//!        │
//!        ▼
//!   CompileResult { code, diagnostics }
//!        │
//!        ▼
//!   Rust source depending only on peggen-runtime
//! ```
//!
//! ## Example
//!
//! ```
//! use peggen::{compile, CodegenConfig, Expression, Grammar, Rule};
//!
//! let grammar = Grammar::new(vec![Rule::new(
//!     "greeting",
//!     Expression::choice([Expression::literal("hello"), Expression::literal("hi")]),
//! )]);
//! let result = compile(&grammar, &CodegenConfig::default()).unwrap();
//! assert!(result.code().contains("fn parse_greeting(&self, cursor: Cursor<'_>)"));
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod expressions;
pub mod pass;
pub mod report_unused;
pub mod result;
pub mod walker;

#[cfg(test)]
mod tests;

pub use codegen::GenerateCodePass;
pub use config::CodegenConfig;
pub use error::CompileError;
pub use expressions::{Expression, Grammar, Rule};
pub use pass::{compile, CompilePass, Pipeline};
pub use report_unused::ReportUnusedRulesPass;
pub use result::{CompileResult, Diagnostic, Severity};
pub use walker::ExpressionWalker;
