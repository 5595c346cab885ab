//! The accumulator every compile pass reads from and appends to.

use std::fmt;

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A message about the grammar produced by a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Rule the message is about, if any.
    pub rule: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            rule: None,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            rule: None,
            message: message.into(),
        }
    }

    pub fn for_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "{}[{}]: {}", self.severity, rule, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Output of one compile invocation: generated source plus diagnostics.
///
/// Created once per compile and passed by `&mut` through every pass, so a
/// pass sees everything the passes before it produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileResult {
    code: String,
    diagnostics: Vec<Diagnostic>,
}

impl CompileResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source generated so far.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn append_code(&mut self, code: &str) {
        self.code.push_str(code);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn into_code(self) -> String {
        self.code
    }
}
