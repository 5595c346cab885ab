//! Build script that compiles every grammar under `defs/` into a parser module.
//!
//! Each `defs/<name>.json` file holds a serialized [`peggen::Grammar`]. It is
//! compiled with `module_name = <name>` and written to `$OUT_DIR/<name>.rs`;
//! `$OUT_DIR/grammars.rs` then includes all of them so `src/lib.rs` exposes
//! one `pub mod <name>` per grammar. Diagnostics from the compiler surface as
//! cargo warnings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use peggen::{compile, CodegenConfig, Grammar};

fn main() {
    let defs_dir = Path::new("defs");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let mut defs: Vec<PathBuf> = fs::read_dir(defs_dir)
        .expect("Failed to read defs directory")
        .map(|entry| entry.expect("Failed to read defs entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    defs.sort();

    let mut index = String::new();
    for path in &defs {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .expect("grammar file names must be UTF-8");
        let code = compile_grammar(path, stem);

        let target = out_dir.join(format!("{stem}.rs"));
        fs::write(&target, code).unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
        index.push_str(&format!("include!(concat!(env!(\"OUT_DIR\"), \"/{stem}.rs\"));\n"));

        println!("cargo:rerun-if-changed={}", path.display());
    }

    fs::write(out_dir.join("grammars.rs"), index).expect("Failed to write grammars.rs");
    println!("cargo:rerun-if-changed={}", defs_dir.display());
    println!("cargo:rerun-if-changed=build.rs");
}

fn compile_grammar(path: &Path, module: &str) -> String {
    let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    let grammar: Grammar =
        serde_json::from_str(&source).unwrap_or_else(|e| panic!("Invalid grammar in {}: {e}", path.display()));

    let config = CodegenConfig::default().with_module_name(module);
    let result = compile(&grammar, &config).unwrap_or_else(|e| panic!("Failed to compile {}: {e}", path.display()));
    for diagnostic in result.diagnostics() {
        println!("cargo:warning={}: {diagnostic}", path.display());
    }
    result.into_code()
}
