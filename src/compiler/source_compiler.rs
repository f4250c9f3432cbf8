use crate::consts::STDIN_UNIT_PREFIX;
use async_trait::async_trait;
use std::{collections::BTreeMap, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("couldn't run the compiler: {0}")]
    Io(#[from] std::io::Error),
    #[error("compiler exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("couldn't parse compiler output: {0}")]
    InvalidOutput(#[from] serde_json::Error),
    #[error("compiler version not found in {0:?}")]
    UnknownVersion(String),
    #[error("compilation did not finish in {0:?}")]
    Timeout(Duration),
}

/// Metadata the compiler echoes back for every compiled contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInfo {
    pub source: String,
    pub compiler_version: String,
}

/// A single contract of the compiled source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    /// `0x` prefixed hex of the runtime (deployed) bytecode.
    pub runtime_code: String,
    pub info: ContractInfo,
}

/// Compilation units keyed by [`unit_key`].
pub type CompilationUnits = BTreeMap<String, CompilationUnit>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerVersionInfo {
    /// Everything the compiler printed on version request.
    pub full_version: String,
    pub version: semver::Version,
}

#[async_trait]
pub trait SourceCompiler: Send + Sync {
    async fn compile(&self, source: &str) -> Result<CompilationUnits, CompileError>;
    async fn version(&self) -> Result<CompilerVersionInfo, CompileError>;
}

/// Key under which the compiler puts the contract with the given name.
pub fn unit_key(contract_name: &str) -> String {
    format!("{STDIN_UNIT_PREFIX}{contract_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_key_uses_stdin_marker() {
        assert_eq!(unit_key("Foo"), "<stdin>:Foo");
        assert_eq!(unit_key(""), "<stdin>:");
    }
}
