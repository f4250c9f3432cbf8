//! [`SourceCompiler`] backed by the `solc` binary.
//!
//! The source is passed through stdin and the output is requested
//! in `--combined-json` format, so every contract is returned under
//! the `<stdin>:ContractName` key.

use crate::compiler::{
    extract_release_version, CompilationUnit, CompilationUnits, CompileError,
    CompilerVersionInfo, ContractInfo, SourceCompiler,
};
use async_trait::async_trait;
use std::{path::PathBuf, process::Stdio};
use tokio::{io::AsyncWriteExt, process::Command};

mod types {
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Deserialize)]
    pub struct OutputContract {
        #[serde(rename = "bin-runtime", default)]
        pub bin_runtime: String,
    }

    impl OutputContract {
        pub fn keys() -> Vec<&'static str> {
            vec!["bin-runtime"]
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct OutputJson {
        #[serde(default)]
        pub contracts: BTreeMap<String, OutputContract>,
    }
}

#[derive(Debug, Clone)]
pub struct SolcCli {
    solc: PathBuf,
}

impl SolcCli {
    pub fn new(solc: impl Into<PathBuf>) -> Self {
        Self { solc: solc.into() }
    }

    async fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<Vec<u8>, CompileError> {
        let mut child = Command::new(&self.solc)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // dropping the future (e.g. on timeout) must not leave solc running
            .kill_on_drop(true)
            .spawn()?;

        let pipe = child.stdin.take();
        let write_input = async move {
            if let (Some(mut pipe), Some(input)) = (pipe, stdin) {
                pipe.write_all(input.as_bytes()).await?;
            }
            Ok::<_, std::io::Error>(())
        };
        let (write_result, output) = futures::join!(write_input, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            return Err(CompileError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        write_result?;
        Ok(output.stdout)
    }
}

#[async_trait]
impl SourceCompiler for SolcCli {
    async fn compile(&self, source: &str) -> Result<CompilationUnits, CompileError> {
        let version = self.version().await?;

        let keys = types::OutputContract::keys().join(",");
        let stdout = self
            .run(&["--combined-json", &keys, "--optimize", "-"], Some(source))
            .await?;
        let output: types::OutputJson = serde_json::from_slice(&stdout)?;

        let units = output
            .contracts
            .into_iter()
            .map(|(key, contract)| {
                // abstract contracts and interfaces have no runtime code
                let runtime_code = if contract.bin_runtime.is_empty() {
                    String::new()
                } else {
                    format!("0x{}", contract.bin_runtime)
                };
                let unit = CompilationUnit {
                    runtime_code,
                    info: ContractInfo {
                        source: source.to_string(),
                        compiler_version: version.version.to_string(),
                    },
                };
                (key, unit)
            })
            .collect();
        Ok(units)
    }

    async fn version(&self) -> Result<CompilerVersionInfo, CompileError> {
        let stdout = self.run(&["--version"], None).await?;
        let full_version = String::from_utf8_lossy(&stdout).to_string();
        let version = extract_release_version(&full_version)
            .ok_or_else(|| CompileError::UnknownVersion(full_version.clone()))?;
        Ok(CompilerVersionInfo {
            full_version,
            version,
        })
    }
}
