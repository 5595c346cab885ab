//! Grammar builders for benchmarks.
//!
//! Four grammars of increasing size: a single literal, a JSON-like value
//! grammar, an expression language, and a synthetic grammar with many
//! rules chained through references.

use peggen::{Expression, Grammar, Rule};

// ══════════════════════════════════════════════════════════════════════════════
// Builder helpers
// ══════════════════════════════════════════════════════════════════════════════

fn lit(text: &str) -> Expression {
    Expression::literal(text)
}

fn rule_ref(name: &str) -> Expression {
    Expression::rule_reference(name)
}

fn one_of(texts: &[&str]) -> Expression {
    Expression::choice(texts.iter().map(|t| lit(t)))
}

fn digits() -> Vec<&'static str> {
    vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]
}

// ══════════════════════════════════════════════════════════════════════════════
// Grammars
// ══════════════════════════════════════════════════════════════════════════════

/// `start <- "a"`
pub fn minimal_grammar() -> Grammar {
    Grammar::new(vec![Rule::new("start", lit("a"))])
}

/// A JSON-like value grammar: objects, arrays, strings, numbers, keywords.
pub fn small_grammar() -> Grammar {
    let ws = Expression::zero_or_more(one_of(&[" ", "\t", "\n", "\r"]));
    Grammar::new(vec![
        Rule::new("value", Expression::sequence([rule_ref("ws"), rule_ref("item"), rule_ref("ws")])),
        Rule::new(
            "item",
            Expression::choice([
                rule_ref("object"),
                rule_ref("array"),
                rule_ref("string"),
                rule_ref("number"),
                one_of(&["true", "false", "null"]),
            ]),
        ),
        Rule::new(
            "object",
            Expression::sequence([
                lit("{"),
                rule_ref("ws"),
                Expression::optional(Expression::sequence([
                    rule_ref("member"),
                    Expression::zero_or_more(Expression::sequence([lit(","), rule_ref("member")])),
                ])),
                lit("}"),
            ]),
        ),
        Rule::new(
            "member",
            Expression::sequence([rule_ref("ws"), rule_ref("string"), rule_ref("ws"), lit(":"), rule_ref("value")]),
        ),
        Rule::new(
            "array",
            Expression::sequence([
                lit("["),
                rule_ref("ws"),
                Expression::optional(Expression::sequence([
                    rule_ref("value"),
                    Expression::zero_or_more(Expression::sequence([lit(","), rule_ref("value")])),
                ])),
                lit("]"),
            ]),
        ),
        Rule::new(
            "string",
            Expression::sequence([
                lit("\""),
                Expression::zero_or_more(Expression::choice([
                    Expression::sequence([lit("\\"), Expression::wildcard()]),
                    Expression::sequence([Expression::not_predicate(lit("\"")), Expression::wildcard()]),
                ])),
                lit("\""),
            ]),
        ),
        Rule::new(
            "number",
            Expression::sequence([
                Expression::optional(lit("-")),
                Expression::one_or_more(one_of(&digits())),
                Expression::optional(Expression::sequence([lit("."), Expression::one_or_more(one_of(&digits()))])),
            ]),
        ),
        Rule::new("ws", ws),
    ])
}

/// An expression language with precedence levels, calls and keywords.
pub fn medium_grammar() -> Grammar {
    let binary = |name: &str, operand: &str, operators: &[&str]| {
        Rule::new(
            name,
            Expression::sequence([
                rule_ref(operand),
                Expression::zero_or_more(Expression::sequence([
                    rule_ref("_"),
                    one_of(operators),
                    rule_ref("_"),
                    rule_ref(operand),
                ])),
            ]),
        )
    };
    let letters: Vec<String> = ('a'..='z').chain('A'..='Z').map(String::from).collect();
    let letters: Vec<&str> = letters.iter().map(String::as_str).collect();

    Grammar::new(vec![
        Rule::new(
            "program",
            Expression::sequence([
                Expression::zero_or_more(rule_ref("statement")),
                rule_ref("_"),
                Expression::not_predicate(Expression::wildcard()),
            ]),
        ),
        Rule::new(
            "statement",
            Expression::sequence([
                rule_ref("_"),
                Expression::choice([
                    Expression::sequence([lit("let"), rule_ref("_"), rule_ref("ident"), rule_ref("_"), lit("="), rule_ref("_"), rule_ref("expr")]),
                    Expression::sequence([lit("return"), rule_ref("_"), rule_ref("expr")]),
                    rule_ref("expr"),
                ]),
                rule_ref("_"),
                lit(";"),
            ]),
        ),
        Rule::new("expr", rule_ref("or")),
        binary("or", "and", &["||"]),
        binary("and", "equality", &["&&"]),
        binary("equality", "comparison", &["==", "!="]),
        binary("comparison", "sum", &["<=", ">=", "<", ">"]),
        binary("sum", "product", &["+", "-"]),
        binary("product", "unary", &["*", "/", "%"]),
        Rule::new(
            "unary",
            Expression::choice([
                Expression::sequence([one_of(&["-", "!"]), rule_ref("unary")]),
                rule_ref("call"),
            ]),
        ),
        Rule::new(
            "call",
            Expression::sequence([
                rule_ref("primary"),
                Expression::zero_or_more(Expression::sequence([
                    lit("("),
                    Expression::optional(Expression::sequence([
                        rule_ref("expr"),
                        Expression::zero_or_more(Expression::sequence([lit(","), rule_ref("_"), rule_ref("expr")])),
                    ])),
                    lit(")"),
                ])),
            ]),
        ),
        Rule::new(
            "primary",
            Expression::choice([
                rule_ref("number"),
                Expression::sequence([rule_ref("keyword"), Expression::not_predicate(rule_ref("ident_char"))]),
                rule_ref("ident"),
                Expression::sequence([lit("("), rule_ref("_"), rule_ref("expr"), rule_ref("_"), lit(")")]),
            ]),
        ),
        Rule::new("keyword", one_of(&["true", "false", "nil"])),
        Rule::new(
            "ident",
            Expression::sequence([
                Expression::not_predicate(Expression::sequence([rule_ref("keyword"), Expression::not_predicate(rule_ref("ident_char"))])),
                one_of(&letters),
                Expression::zero_or_more(rule_ref("ident_char")),
            ]),
        ),
        Rule::new("ident_char", Expression::choice([one_of(&letters), one_of(&digits()), lit("_")])),
        Rule::new("number", Expression::one_or_more(one_of(&digits()))),
        Rule::new("_", Expression::zero_or_more(one_of(&[" ", "\t", "\n"]))),
    ])
}

/// `rule_count` rules, each a choice over literals and the next rule.
pub fn synthetic_grammar(rule_count: usize) -> Grammar {
    let rules = (0..rule_count)
        .map(|i| {
            let mut alternatives = vec![
                Expression::sequence([lit(&format!("k{i}")), Expression::optional(lit("?"))]),
                Expression::and_predicate(lit("x")),
            ];
            if i + 1 < rule_count {
                alternatives.push(Expression::one_or_more(rule_ref(&format!("r{}", i + 1))));
            }
            Rule::new(format!("r{i}"), Expression::choice(alternatives))
        })
        .collect();
    Grammar::new(rules)
}

pub fn complex_grammar() -> Grammar {
    synthetic_grammar(200)
}
