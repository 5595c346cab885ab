//! Grammar model: an ordered list of named rules, each a tree of PEG
//! combinators.
//!
//! The model is pure data. It arrives already validated (unique rule names,
//! resolved references, no left recursion) and is never mutated by a compile
//! pass. Recursion between rules goes through [`Expression::RuleReference`]
//! by name, so the trees themselves are acyclic.
//!
//! The model is serde-serialisable with snake_case tags, e.g.
//!
//! ```json
//! { "rules": [ { "name": "start", "expression": { "sequence": [ { "literal": "a" }, "wildcard" ] } } ] }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codegen::escape::escape_literal;

/// An ordered collection of rules. The first rule is the entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    pub rules: Vec<Rule>,
}

impl Grammar {
    pub fn new(rules: Vec<Rule>) -> Self {
        Grammar { rules }
    }

    /// The rule parsing starts from, if the grammar has any rules.
    pub fn entry_rule(&self) -> Option<&Rule> {
        self.rules.first()
    }

    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// A named parsing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub expression: Expression,
}

impl Rule {
    pub fn new(name: impl Into<String>, expression: Expression) -> Self {
        Rule {
            name: name.into(),
            expression,
        }
    }
}

/// A parsing expression.
///
/// Every consumer dispatches over this enum with an exhaustive `match`, so
/// adding a variant is a compile error everywhere it is not handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Matches the exact text.
    Literal(String),
    /// Matches any single character; fails only at end of input.
    Wildcard,
    /// Matches every item in order.
    Sequence(Vec<Expression>),
    /// Ordered choice: the first alternative that matches wins.
    Choice(Vec<Expression>),
    /// Greedy repetition, zero or more times. Never fails.
    ZeroOrMore(Box<Expression>),
    /// Greedy repetition, at least once.
    OneOrMore(Box<Expression>),
    /// Matches the inner expression or nothing.
    Optional(Box<Expression>),
    /// Zero-width: succeeds iff the inner expression matches.
    AndPredicate(Box<Expression>),
    /// Zero-width: succeeds iff the inner expression does not match.
    NotPredicate(Box<Expression>),
    /// Invokes another rule by name.
    RuleReference(String),
}

impl Expression {
    pub fn literal(text: impl Into<String>) -> Self {
        Expression::Literal(text.into())
    }

    pub fn wildcard() -> Self {
        Expression::Wildcard
    }

    pub fn sequence(items: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Sequence(items.into_iter().collect())
    }

    pub fn choice(alternatives: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Choice(alternatives.into_iter().collect())
    }

    pub fn zero_or_more(inner: Expression) -> Self {
        Expression::ZeroOrMore(Box::new(inner))
    }

    pub fn one_or_more(inner: Expression) -> Self {
        Expression::OneOrMore(Box::new(inner))
    }

    pub fn optional(inner: Expression) -> Self {
        Expression::Optional(Box::new(inner))
    }

    pub fn and_predicate(inner: Expression) -> Self {
        Expression::AndPredicate(Box::new(inner))
    }

    pub fn not_predicate(inner: Expression) -> Self {
        Expression::NotPredicate(Box::new(inner))
    }

    pub fn rule_reference(name: impl Into<String>) -> Self {
        Expression::RuleReference(name.into())
    }

    /// Whether this expression prints without parentheses as an operand of a
    /// prefix or suffix operator.
    fn is_atomic(&self) -> bool {
        matches!(
            self,
            Expression::Literal(_) | Expression::Wildcard | Expression::RuleReference(_)
        )
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// PEG notation
// ══════════════════════════════════════════════════════════════════════════════

/// Writes `expr`, parenthesised unless it is atomic.
struct Operand<'a>(&'a Expression);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_atomic() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(text) => write!(f, "\"{}\"", escape_literal(text)),
            Expression::Wildcard => f.write_str("."),
            Expression::Sequence(items) if items.is_empty() => f.write_str("()"),
            Expression::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    match item {
                        Expression::Sequence(_) | Expression::Choice(_) => write!(f, "({})", item)?,
                        _ => write!(f, "{}", item)?,
                    }
                }
                Ok(())
            }
            Expression::Choice(alternatives) if alternatives.is_empty() => f.write_str("!()"),
            Expression::Choice(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" / ")?;
                    }
                    match alternative {
                        Expression::Choice(_) => write!(f, "({})", alternative)?,
                        _ => write!(f, "{}", alternative)?,
                    }
                }
                Ok(())
            }
            Expression::ZeroOrMore(inner) => write!(f, "{}*", Operand(inner.as_ref())),
            Expression::OneOrMore(inner) => write!(f, "{}+", Operand(inner.as_ref())),
            Expression::Optional(inner) => write!(f, "{}?", Operand(inner.as_ref())),
            Expression::AndPredicate(inner) => write!(f, "&{}", Operand(inner.as_ref())),
            Expression::NotPredicate(inner) => write!(f, "!{}", Operand(inner.as_ref())),
            Expression::RuleReference(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.name, self.expression)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}
