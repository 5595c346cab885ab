//! Compile pass pipeline.
//!
//! A [`Pipeline`] is an ordered list of [`CompilePass`]es folded over one
//! grammar and one [`CompileResult`]:
//!
//! ```text
//! Grammar ──┬──→ [ReportUnusedRules] ──→ [GenerateCode] ──→ ...
//!           │            │                     │
//! CompileResult ◀────────┴──── diagnostics ────┴──── code
//! ```
//!
//! Each pass runs exactly once, in list order, and sees everything earlier
//! passes appended to the result. A pass may rely on the passes before it
//! having completed and on nothing after it. Code generation in particular
//! never re-checks what an earlier pass is responsible for.

use tracing::{debug, instrument, warn};

use crate::codegen::GenerateCodePass;
use crate::config::CodegenConfig;
use crate::error::Result;
use crate::expressions::Grammar;
use crate::report_unused::ReportUnusedRulesPass;
use crate::result::CompileResult;

/// One sequential step over a grammar.
pub trait CompilePass {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Read `grammar` and append output or diagnostics to `result`.
    ///
    /// Returning `Err` aborts the pipeline; grammar problems should be
    /// reported as diagnostics instead.
    fn run(&self, grammar: &Grammar, result: &mut CompileResult) -> Result<()>;
}

/// Ordered list of passes.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn CompilePass>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default pipeline: unused-rule warnings, then code generation.
    pub fn standard(config: CodegenConfig) -> Self {
        Pipeline::new()
            .with_pass(ReportUnusedRulesPass)
            .with_pass(GenerateCodePass::new(config))
    }

    pub fn with_pass(mut self, pass: impl CompilePass + 'static) -> Self {
        self.push(pass);
        self
    }

    pub fn push(&mut self, pass: impl CompilePass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Pass names in execution order.
    pub fn passes(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Run every pass once, in order, against the same result.
    #[instrument(skip_all, fields(rules = grammar.rules().len(), passes = self.passes.len()))]
    pub fn run(&self, grammar: &Grammar, result: &mut CompileResult) -> Result<()> {
        for pass in &self.passes {
            let reported = result.diagnostics().len();
            debug!(pass = pass.name(), "running compile pass");
            pass.run(grammar, result)?;
            for diagnostic in &result.diagnostics()[reported..] {
                warn!(pass = pass.name(), "{}", diagnostic);
            }
            debug!(pass = pass.name(), "compile pass finished");
        }
        Ok(())
    }
}

/// Compile `grammar` with the standard pipeline.
pub fn compile(grammar: &Grammar, config: &CodegenConfig) -> Result<CompileResult> {
    let mut result = CompileResult::new();
    Pipeline::standard(config.clone()).run(grammar, &mut result)?;
    Ok(result)
}
