//! Expression-to-Rust translation.
//!
//! [`ParserGenerator`] is an [`ExpressionWalker`] that writes one Rust method
//! per rule. Inside a method every expression node reads an input cursor
//! variable and binds a fresh `rN: Option<Cursor>` holding the cursor after a
//! successful match, or `None`:
//!
//! ```text
//! "a" "b"         let r1 = 'seq1: {
//!                     let r2 = match_literal(cursor, "a").map(|length| cursor.advance(length));
//!                     let Some(c3) = r2 else {
//!                         break 'seq1 None;
//!                     };
//!                     ...
//!                     Some(c5)
//!                 };
//! ```
//!
//! Cursors are `Copy` values, so backtracking is just reusing an earlier
//! variable: a failed sequence leaves its input variable untouched, every
//! choice alternative restarts from the choice's input, and predicates hand
//! their input straight back. Failure is always `None`, never a panic.
//!
//! Names come from one counter per method, so no identifier is bound twice
//! in the same method and the output depends only on the grammar.

use tracing::trace;

use super::escape::{single_line, string_literal};
use super::writer::CodeWriter;
use crate::config::CodegenConfig;
use crate::expressions::{Expression, Grammar, Rule};
use crate::walker::{self, ExpressionWalker};

/// Cursor parameter of every generated rule method.
const RULE_CURSOR: &str = "cursor";

pub(crate) struct ParserGenerator<'c> {
    config: &'c CodegenConfig,
    entry: &'c str,
    code: CodeWriter,
    next_id: usize,
    /// Cursor variable the expression being walked starts from.
    input: String,
    /// Outcome variable of the expression walked last.
    output: String,
}

impl<'c> ParserGenerator<'c> {
    pub(crate) fn new(config: &'c CodegenConfig, entry: &'c str) -> Self {
        ParserGenerator {
            config,
            entry,
            code: CodeWriter::new(),
            next_id: 0,
            input: RULE_CURSOR.to_string(),
            output: String::new(),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.code.finish()
    }

    fn fresh_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn fresh(&mut self, prefix: &str) -> String {
        let id = self.fresh_id();
        format!("{prefix}{id}")
    }

    /// Emit `expression` matched from the cursor variable `input` and return
    /// the name of its outcome variable.
    fn emit(&mut self, expression: &Expression, input: &str) -> String {
        self.input = input.to_string();
        self.walk_expression(expression);
        std::mem::take(&mut self.output)
    }

    /// Emit `expression` from `input` and make its outcome this node's outcome.
    fn emit_into(&mut self, expression: &Expression, input: &str) {
        self.output = self.emit(expression, input);
    }

    fn write_header(&mut self) {
        let rule = "// -----------------------------------------------------------------------";
        self.code.line(rule);
        self.code.line("// <auto-generated>");
        self.code.line(format!(
            "// This code was generated by {} {}",
            single_line(&self.config.tool_name),
            single_line(&self.config.tool_version)
        ));
        self.code.line("//");
        self.code.line("// Changes to this file may cause incorrect behavior and will be lost if");
        self.code.line("// the code is regenerated.");
        self.code.line("// </auto-generated>");
        self.code.line(rule);
        self.code.blank();
    }

    fn write_imports(&mut self, grammar: &Grammar) {
        let mut usage = RuntimeUsage::default();
        usage.walk_grammar(grammar);

        let mut names = Vec::new();
        if usage.wildcard {
            names.push("match_any");
        }
        if usage.literal {
            names.push("match_literal");
        }
        names.extend(["Cursor", "Match", "ParseResult"]);
        self.code
            .line(format!("use {}::{{{}}};", self.config.runtime_crate, names.join(", ")));
    }

    fn write_repetition(&mut self, inner: &Expression, at_least_one: bool) {
        let input = self.input.clone();
        let id = self.fresh_id();
        let output = format!("r{id}");
        let label = format!("'rep{id}");
        let cursor = self.fresh("c");
        let count = if at_least_one { Some(self.fresh("n")) } else { None };

        self.code.open(format!("let {output} ="));
        self.code.line(format!("let mut {cursor} = {input};"));
        if let Some(count) = &count {
            self.code.line(format!("let mut {count} = 0usize;"));
        }
        self.code.open(format!("{label}: loop"));
        let outcome = self.emit(inner, &cursor);
        let next = self.fresh("c");
        self.code.open(format!("let Some({next}) = {outcome} else"));
        self.code.line(format!("break {label};"));
        self.code.close(";");
        if let Some(count) = &count {
            self.code.line(format!("{count} += 1;"));
        }
        // A match that consumed nothing would repeat forever with the same cursor.
        self.code.open(format!("if {next}.position() == {cursor}.position()"));
        self.code.line(format!("break {label};"));
        self.code.close("");
        self.code.line(format!("{cursor} = {next};"));
        self.code.close("");
        match &count {
            Some(count) => self
                .code
                .line(format!("if {count} > 0 {{ Some({cursor}) }} else {{ None }}")),
            None => self.code.line(format!("Some({cursor})")),
        }
        self.code.close(";");
        self.output = output;
    }
}

impl ExpressionWalker for ParserGenerator<'_> {
    fn walk_grammar(&mut self, grammar: &Grammar) {
        let parser = self.config.parser_name.clone();

        self.write_header();
        if let Some(module) = &self.config.module_name {
            self.code.open(format!("pub mod {module}"));
        }
        self.write_imports(grammar);
        self.code.blank();

        self.code.line(format!(
            "/// Parser generated by {} {}.",
            single_line(&self.config.tool_name),
            single_line(&self.config.tool_version)
        ));
        self.code.line("#[derive(Debug, Clone, Copy, Default)]");
        self.code.line(format!("pub struct {parser};"));
        self.code.blank();

        self.code.line("#[allow(dead_code, non_snake_case, clippy::all)]");
        self.code.open(format!("impl {parser}"));
        self.code.open("pub fn new() -> Self");
        self.code.line(&parser);
        self.code.close("");
        self.code.blank();
        self.code.line(format!("/// Match `subject` against the `{}` rule.", self.entry));
        self.code.line("///");
        self.code.line("/// The match starts at the beginning of `subject` but need not cover all of it.");
        self.code.open("pub fn parse(&self, subject: &str) -> ParseResult<String>");
        self.code.line(format!("self.parse_{}(Cursor::new(subject))", self.entry));
        self.code.close("");

        walker::walk_grammar(self, grammar);

        self.code.close("");
        if self.config.module_name.is_some() {
            self.code.close("");
        }
    }

    fn walk_rule(&mut self, rule: &Rule) {
        trace!(rule = %rule.name, "emitting rule");
        self.next_id = 0;

        self.code.blank();
        self.code.line(format!("/// `{}`", rule));
        self.code.open(format!(
            "fn parse_{}(&self, {RULE_CURSOR}: Cursor<'_>) -> ParseResult<String>",
            rule.name
        ));
        self.code.line(format!("let start = {RULE_CURSOR};"));
        let outcome = self.emit(&rule.expression, RULE_CURSOR);
        self.code.line(format!("let end = {outcome}?;"));
        self.code.line("Some(Match::new(end.position() - start.position(), start.span_to(end).to_owned()))");
        self.code.close("");
    }

    fn walk_literal(&mut self, text: &str) {
        let input = self.input.clone();
        let output = self.fresh("r");
        self.code.line(format!(
            "let {output} = match_literal({input}, {}).map(|length| {input}.advance(length));",
            string_literal(text)
        ));
        self.output = output;
    }

    fn walk_wildcard(&mut self) {
        let input = self.input.clone();
        let output = self.fresh("r");
        self.code
            .line(format!("let {output} = match_any({input}).map(|length| {input}.advance(length));"));
        self.output = output;
    }

    fn walk_sequence(&mut self, items: &[Expression]) {
        let input = self.input.clone();
        match items {
            [] => {
                let output = self.fresh("r");
                self.code.line(format!("let {output} = Some({input});"));
                self.output = output;
            }
            [only] => self.emit_into(only, &input),
            _ => {
                let id = self.fresh_id();
                let output = format!("r{id}");
                let label = format!("'seq{id}");

                self.code.open(format!("let {output} = {label}:"));
                let mut cursor = input;
                for item in items {
                    let outcome = self.emit(item, &cursor);
                    let next = self.fresh("c");
                    self.code.open(format!("let Some({next}) = {outcome} else"));
                    self.code.line(format!("break {label} None;"));
                    self.code.close(";");
                    cursor = next;
                }
                self.code.line(format!("Some({cursor})"));
                self.code.close(";");
                self.output = output;
            }
        }
    }

    fn walk_choice(&mut self, alternatives: &[Expression]) {
        let input = self.input.clone();
        match alternatives {
            [] => {
                let output = self.fresh("r");
                self.code.line(format!("let {output}: Option<Cursor<'_>> = None;"));
                self.output = output;
            }
            [only] => self.emit_into(only, &input),
            [init @ .., last] => {
                let id = self.fresh_id();
                let output = format!("r{id}");
                let label = format!("'choice{id}");

                self.code.open(format!("let {output} = {label}:"));
                for alternative in init {
                    let outcome = self.emit(alternative, &input);
                    self.code.open(format!("if {outcome}.is_some()"));
                    self.code.line(format!("break {label} {outcome};"));
                    self.code.close("");
                }
                let outcome = self.emit(last, &input);
                self.code.line(outcome);
                self.code.close(";");
                self.output = output;
            }
        }
    }

    fn walk_zero_or_more(&mut self, inner: &Expression) {
        self.write_repetition(inner, false);
    }

    fn walk_one_or_more(&mut self, inner: &Expression) {
        self.write_repetition(inner, true);
    }

    fn walk_optional(&mut self, inner: &Expression) {
        let input = self.input.clone();
        let outcome = self.emit(inner, &input);
        let output = self.fresh("r");
        self.code
            .line(format!("let {output} = Some({outcome}.unwrap_or({input}));"));
        self.output = output;
    }

    fn walk_and_predicate(&mut self, inner: &Expression) {
        let input = self.input.clone();
        let outcome = self.emit(inner, &input);
        let output = self.fresh("r");
        self.code.line(format!("let {output} = {outcome}.map(|_| {input});"));
        self.output = output;
    }

    fn walk_not_predicate(&mut self, inner: &Expression) {
        let input = self.input.clone();
        let outcome = self.emit(inner, &input);
        let output = self.fresh("r");
        self.code.line(format!(
            "let {output} = if {outcome}.is_some() {{ None }} else {{ Some({input}) }};"
        ));
        self.output = output;
    }

    fn walk_rule_reference(&mut self, name: &str) {
        let input = self.input.clone();
        let output = self.fresh("r");
        self.code.line(format!(
            "let {output} = self.parse_{name}({input}).map(|matched| {input}.advance(matched.length));"
        ));
        self.output = output;
    }
}

/// Which runtime matchers the grammar needs imported.
#[derive(Default)]
struct RuntimeUsage {
    literal: bool,
    wildcard: bool,
}

impl ExpressionWalker for RuntimeUsage {
    fn walk_literal(&mut self, _text: &str) {
        self.literal = true;
    }

    fn walk_wildcard(&mut self) {
        self.wildcard = true;
    }
}
