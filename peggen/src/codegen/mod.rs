//! Code generation pass.
//!
//! Translates a grammar into a single Rust source file:
//!
//! - a fixed auto-generated header naming the tool and version
//! - an optional `pub mod` wrapper
//! - a `use` of the runtime types and the matchers the grammar needs
//! - a parser struct with a public `parse(&self, subject)` entry point and a
//!   private `parse_{rule}(&self, cursor)` method per rule
//!
//! The generated code depends only on the runtime crate.

pub mod escape;
mod generator;
pub mod writer;

use tracing::debug;

use crate::config::CodegenConfig;
use crate::error::{CompileError, Result};
use crate::expressions::Grammar;
use crate::pass::CompilePass;
use crate::result::CompileResult;
use crate::walker::ExpressionWalker;

use escape::{check_identifier, check_path, check_rule_name};
use generator::ParserGenerator;

/// Appends the generated parser source to the compile result.
///
/// Assumes the grammar already passed validation: rule names are unique and
/// every reference resolves. Only target-language naming is checked here.
pub struct GenerateCodePass {
    config: CodegenConfig,
}

impl GenerateCodePass {
    pub fn new(config: CodegenConfig) -> Self {
        GenerateCodePass { config }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    fn check_names(&self, grammar: &Grammar) -> Result<()> {
        check_identifier("parser name", &self.config.parser_name)?;
        if let Some(module) = &self.config.module_name {
            check_identifier("module name", module)?;
        }
        check_path("runtime crate", &self.config.runtime_crate)?;
        for rule in grammar.rules() {
            check_rule_name(&rule.name)?;
        }
        Ok(())
    }
}

impl CompilePass for GenerateCodePass {
    fn name(&self) -> &'static str {
        "generate-code"
    }

    fn run(&self, grammar: &Grammar, result: &mut CompileResult) -> Result<()> {
        let entry = grammar.entry_rule().ok_or(CompileError::NoEntryRule)?;
        self.check_names(grammar)?;

        let mut generator = ParserGenerator::new(&self.config, &entry.name);
        generator.walk_grammar(grammar);
        let code = generator.finish();

        debug!(entry = %entry.name, bytes = code.len(), "generated parser source");
        result.append_code(&code);
        Ok(())
    }
}
