//! Warn about rules nothing refers to.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::expressions::Grammar;
use crate::pass::CompilePass;
use crate::result::{CompileResult, Diagnostic};
use crate::walker::ExpressionWalker;

/// Reports a warning for every non-entry rule that no expression references.
///
/// A reference from another unused rule still counts as a use.
pub struct ReportUnusedRulesPass;

impl CompilePass for ReportUnusedRulesPass {
    fn name(&self) -> &'static str {
        "report-unused-rules"
    }

    fn run(&self, grammar: &Grammar, result: &mut CompileResult) -> Result<()> {
        let mut references = ReferenceCollector::default();
        references.walk_grammar(grammar);

        for rule in grammar.rules().iter().skip(1) {
            if !references.names.contains(rule.name.as_str()) {
                result.report(
                    Diagnostic::warning(format!("rule `{}` is never used", rule.name)).for_rule(&rule.name),
                );
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct ReferenceCollector {
    names: BTreeSet<String>,
}

impl ExpressionWalker for ReferenceCollector {
    fn walk_rule_reference(&mut self, name: &str) {
        self.names.insert(name.to_owned());
    }
}
