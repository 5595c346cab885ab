//! Code generation settings.
//!
//! The tool name and version written into the generated header are plain
//! configuration. Their defaults are this crate's package name and version,
//! fixed when the generator itself is compiled.

use serde::{Deserialize, Serialize};

/// Settings recognised by the code generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Tool name written into the generated header.
    pub tool_name: String,
    /// Tool version written into the generated header.
    pub tool_version: String,
    /// Wrap the output in `pub mod {module_name} { ... }` when set.
    pub module_name: Option<String>,
    /// Name of the generated parser type.
    pub parser_name: String,
    /// Path of the runtime crate the generated code imports from.
    pub runtime_crate: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            module_name: None,
            parser_name: "Parser".to_string(),
            runtime_crate: "peggen_runtime".to_string(),
        }
    }
}

impl CodegenConfig {
    pub fn with_tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self.tool_version = version.into();
        self
    }

    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    pub fn with_parser_name(mut self, parser_name: impl Into<String>) -> Self {
        self.parser_name = parser_name.into();
        self
    }

    pub fn with_runtime_crate(mut self, runtime_crate: impl Into<String>) -> Self {
        self.runtime_crate = runtime_crate.into();
        self
    }
}
