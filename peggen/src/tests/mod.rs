//! Crate-level tests for grammar walking, the pass pipeline and code
//! generation.


use crate::{Expression, Grammar, Rule};

/// Route `tracing` output through the test harness. Enable with `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a grammar from `(name, expression)` pairs; the first is the entry.
pub(crate) fn grammar<const N: usize>(rules: [(&str, Expression); N]) -> Grammar {
    Grammar::new(rules.into_iter().map(|(name, expr)| Rule::new(name, expr)).collect())
}

pub(crate) fn lit(text: &str) -> Expression {
    Expression::literal(text)
}

pub(crate) fn rule_ref(name: &str) -> Expression {
    Expression::rule_reference(name)
}

/// A grammar using every expression variant at least once.
pub(crate) fn kitchen_sink() -> Grammar {
    grammar([
        (
            "document",
            Expression::sequence([
                Expression::zero_or_more(rule_ref("item")),
                Expression::not_predicate(Expression::wildcard()),
            ]),
        ),
        (
            "item",
            Expression::choice([
                Expression::sequence([rule_ref("word"), Expression::optional(lit(","))]),
                Expression::one_or_more(lit(" ")),
                Expression::sequence([Expression::and_predicate(lit("\"")), rule_ref("quoted")]),
            ]),
        ),
        (
            "word",
            Expression::one_or_more(Expression::sequence([
                Expression::not_predicate(Expression::choice([lit(" "), lit(","), lit("\"")])),
                Expression::wildcard(),
            ])),
        ),
        (
            "quoted",
            Expression::sequence([
                lit("\""),
                Expression::zero_or_more(Expression::sequence([
                    Expression::not_predicate(lit("\"")),
                    Expression::wildcard(),
                ])),
                lit("\""),
            ]),
        ),
    ])
}
