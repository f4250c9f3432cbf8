mod source_compiler;
mod version;

pub use source_compiler::{
    unit_key, CompilationUnit, CompilationUnits, CompileError, CompilerVersionInfo, ContractInfo,
    SourceCompiler,
};
pub use version::{extract_release_version, extract_semantic_version};
