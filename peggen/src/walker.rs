//! Expression tree traversal.
//!
//! [`ExpressionWalker`] has one hook per [`Expression`] variant plus hooks
//! for the grammar and rule boundaries. Every hook defaults to plain
//! traversal, so a consumer overrides only the variants it cares about. The
//! default bodies live in free functions ([`walk_grammar`], [`walk_rule`],
//! [`walk_expression`], [`walk_children`]) so an override can still run the
//! default traversal around its own work.
//!
//! Traversal order is fixed: the entry rule first, then the remaining rules
//! in declaration order; within an expression, children are visited in
//! evaluation order (sequence items left to right, choice alternatives in
//! listed order). The walker itself has no side effects.

use crate::expressions::{Expression, Grammar, Rule};

pub trait ExpressionWalker {
    fn walk_grammar(&mut self, grammar: &Grammar) {
        walk_grammar(self, grammar);
    }

    fn walk_rule(&mut self, rule: &Rule) {
        walk_rule(self, rule);
    }

    /// Dispatch to the hook for `expression`'s variant.
    fn walk_expression(&mut self, expression: &Expression) {
        walk_expression(self, expression);
    }

    fn walk_literal(&mut self, _text: &str) {}

    fn walk_wildcard(&mut self) {}

    fn walk_sequence(&mut self, items: &[Expression]) {
        walk_all(self, items);
    }

    fn walk_choice(&mut self, alternatives: &[Expression]) {
        walk_all(self, alternatives);
    }

    fn walk_zero_or_more(&mut self, inner: &Expression) {
        self.walk_expression(inner);
    }

    fn walk_one_or_more(&mut self, inner: &Expression) {
        self.walk_expression(inner);
    }

    fn walk_optional(&mut self, inner: &Expression) {
        self.walk_expression(inner);
    }

    fn walk_and_predicate(&mut self, inner: &Expression) {
        self.walk_expression(inner);
    }

    fn walk_not_predicate(&mut self, inner: &Expression) {
        self.walk_expression(inner);
    }

    fn walk_rule_reference(&mut self, _name: &str) {}
}

/// Visit every rule, entry rule first.
pub fn walk_grammar<W: ExpressionWalker + ?Sized>(walker: &mut W, grammar: &Grammar) {
    for rule in grammar.rules() {
        walker.walk_rule(rule);
    }
}

pub fn walk_rule<W: ExpressionWalker + ?Sized>(walker: &mut W, rule: &Rule) {
    walker.walk_expression(&rule.expression);
}

/// Call the hook matching `expression`'s variant.
pub fn walk_expression<W: ExpressionWalker + ?Sized>(walker: &mut W, expression: &Expression) {
    match expression {
        Expression::Literal(text) => walker.walk_literal(text),
        Expression::Wildcard => walker.walk_wildcard(),
        Expression::Sequence(items) => walker.walk_sequence(items),
        Expression::Choice(alternatives) => walker.walk_choice(alternatives),
        Expression::ZeroOrMore(inner) => walker.walk_zero_or_more(inner),
        Expression::OneOrMore(inner) => walker.walk_one_or_more(inner),
        Expression::Optional(inner) => walker.walk_optional(inner),
        Expression::AndPredicate(inner) => walker.walk_and_predicate(inner),
        Expression::NotPredicate(inner) => walker.walk_not_predicate(inner),
        Expression::RuleReference(name) => walker.walk_rule_reference(name),
    }
}

/// Walk the direct children of `expression` without calling its own hook.
pub fn walk_children<W: ExpressionWalker + ?Sized>(walker: &mut W, expression: &Expression) {
    match expression {
        Expression::Literal(_) | Expression::Wildcard | Expression::RuleReference(_) => {}
        Expression::Sequence(children) | Expression::Choice(children) => walk_all(walker, children),
        Expression::ZeroOrMore(inner)
        | Expression::OneOrMore(inner)
        | Expression::Optional(inner)
        | Expression::AndPredicate(inner)
        | Expression::NotPredicate(inner) => walker.walk_expression(inner),
    }
}

fn walk_all<W: ExpressionWalker + ?Sized>(walker: &mut W, expressions: &[Expression]) {
    for expression in expressions {
        walker.walk_expression(expression);
    }
}
