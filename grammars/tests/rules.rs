//! Generated parsers whose rules call each other.

use peggen_grammars::{arithmetic, greeting, keyword_rules};

fn value(result: Option<peggen_runtime::Match<String>>) -> Option<String> {
    result.map(|m| m.value)
}

#[test]
fn test_greeting() {
    assert_eq!(value(greeting::Parser.parse("hello world")), Some("hello world".into()));
    assert_eq!(value(greeting::Parser.parse("hi there friend")), Some("hi there".into()));
    assert_eq!(value(greeting::Parser.parse("hey you")), None);
    assert_eq!(value(greeting::Parser.parse("hello ")), None);
}

#[test]
fn test_arithmetic() {
    assert_eq!(value(arithmetic::Parser.parse("1+2*3")), Some("1+2*3".into()));
    assert_eq!(value(arithmetic::Parser.parse("42/7-10")), Some("42/7-10".into()));
    // A dangling operator is left unconsumed.
    assert_eq!(value(arithmetic::Parser.parse("12+")), Some("12".into()));
    assert_eq!(value(arithmetic::Parser.parse("+1")), None);
}

#[test]
fn test_arithmetic_length_is_byte_count() {
    let matched = arithmetic::Parser.parse("100*20 rest").expect("prefix matches");
    assert_eq!(matched.length, 6);
    assert_eq!(matched.value, "100*20");
}

#[test]
fn test_keyword_rule_names() {
    assert_eq!(value(keyword_rules::Parser.parse("int")), Some("int".into()));
    assert_eq!(value(keyword_rules::Parser.parse("m")), Some("m".into()));
    assert_eq!(value(keyword_rules::Parser.parse("x")), None);
}

#[test]
fn test_parser_constructors_agree() {
    let subject = "hello peggen";
    assert_eq!(greeting::Parser::new().parse(subject), greeting::Parser.parse(subject));
    assert_eq!(greeting::Parser::default().parse(subject), greeting::Parser.parse(subject));
}
