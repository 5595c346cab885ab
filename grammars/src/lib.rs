//! Parsers generated by peggen from the grammars in `defs/`.
//!
//! `build.rs` compiles each `defs/<name>.json` into a `pub mod <name>` with a
//! `Parser` whose `parse` method matches a prefix of its input against the
//! grammar's first rule:
//!
//! ```
//! use peggen_grammars::greeting::Parser;
//!
//! let matched = Parser.parse("hello world").unwrap();
//! assert_eq!(matched.value, "hello world");
//! ```

include!(concat!(env!("OUT_DIR"), "/grammars.rs"));
