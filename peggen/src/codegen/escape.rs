//! Making grammar text safe to embed in generated Rust source.

use crate::error::{CompileError, Result};

/// Escape `text` for the inside of a Rust string literal.
///
/// Quotes, backslashes and every control or bidirectional-override
/// character are escaped, so the literal evaluates to exactly `text` and the
/// generated file never trips the compiler's bidi-codepoint lints.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() || is_bidi_control(c) => {
                escaped.push_str(&format!("\\u{{{:x}}}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// `text` as a complete Rust string literal, quotes included.
pub fn string_literal(text: &str) -> String {
    format!("\"{}\"", escape_literal(text))
}

fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}')
}

/// Replace line breaks and other control characters so `text` stays on one
/// comment line.
pub fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() || is_bidi_control(c) { ' ' } else { c })
        .collect()
}

const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self", "static",
    "struct", "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual",
    "where", "while", "yield",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// ASCII Rust identifier that is neither `_` nor a keyword.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_well && name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !is_keyword(name)
}

/// Rule names become the suffix of a `parse_` method, so any non-empty run of
/// ASCII alphanumerics and underscores works, keywords and leading digits
/// included.
pub fn is_rule_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn check_identifier(context: &'static str, name: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(CompileError::InvalidIdentifier {
            context,
            name: name.to_string(),
        })
    }
}

pub(crate) fn check_rule_name(name: &str) -> Result<()> {
    if is_rule_name(name) {
        Ok(())
    } else {
        Err(CompileError::InvalidIdentifier {
            context: "rule name",
            name: name.to_string(),
        })
    }
}

/// `a::b::c`, where a leading `crate`, `self` or `super` is allowed.
pub(crate) fn check_path(context: &'static str, path: &str) -> Result<()> {
    let valid = path.split("::").enumerate().all(|(i, segment)| {
        is_identifier(segment) || (i == 0 && matches!(segment, "crate" | "self" | "super"))
    });
    if valid {
        Ok(())
    } else {
        Err(CompileError::InvalidIdentifier {
            context,
            name: path.to_string(),
        })
    }
}
