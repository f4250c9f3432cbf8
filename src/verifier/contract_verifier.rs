use super::{canonicalize, VerifyError};
use crate::{
    compiler::{extract_semantic_version, unit_key, CompileError, SourceCompiler},
    store::{ContractRecord, ContractStore},
    types::display_address,
};
use chrono::Utc;
use ethers_core::types::Address;
use std::{future::Future, sync::Arc, time::Duration};
use tracing::instrument;

pub struct ContractVerifier {
    store: Arc<dyn ContractStore>,
    compiler: Arc<dyn SourceCompiler>,
    compile_timeout: Duration,
}

impl ContractVerifier {
    pub fn new(
        store: Arc<dyn ContractStore>,
        compiler: Arc<dyn SourceCompiler>,
        compile_timeout: Duration,
    ) -> Self {
        Self {
            store,
            compiler,
            compile_timeout,
        }
    }

    pub async fn get_contract(&self, address: &Address) -> Result<ContractRecord, VerifyError> {
        self.store
            .find_by_address(address)
            .await
            .ok_or(VerifyError::NotFound)
    }

    /// Compiles `source_code` and marks the contract at `address` as verified
    /// if the runtime bytecode of `contract_name` matches the deployed one.
    ///
    /// The stored contract is modified only on success, and only if nobody
    /// else has modified it since it was read.
    #[instrument(skip(self, source_code), level = "debug")]
    pub async fn verify_contract(
        &self,
        address: Address,
        contract_name: &str,
        source_code: &str,
    ) -> Result<ContractRecord, VerifyError> {
        let mut contract = self.get_contract(&address).await?;
        if contract.valid {
            return Err(VerifyError::AlreadyVerified);
        }

        let mut units = self
            .with_timeout(self.compiler.compile(source_code))
            .await
            .map_err(VerifyError::CompilationFailed)?;
        let unit = units
            .remove(&unit_key(contract_name))
            .ok_or(VerifyError::UnknownContractName)?;

        let runtime_code = unit
            .runtime_code
            .strip_prefix("0x")
            .unwrap_or(&unit.runtime_code);
        if runtime_code.is_empty() {
            return Err(VerifyError::EmptyBytecode);
        }

        let compiled = canonicalize(runtime_code);
        let deployed = canonicalize(&contract.bytecode);
        if compiled != deployed {
            tracing::debug!(
                address = %display_address(&address),
                contract_name,
                "compiled bytecode does not match the deployed one"
            );
            return Err(VerifyError::BytecodeMismatch(address));
        }

        // TODO: take the flag from the actual compiler settings once
        // they can be passed with the request; solc is run with `--optimize`.
        contract.valid = true;
        contract.optimization = true;
        contract.contract_name = Some(contract_name.to_string());
        contract.source_code = Some(unit.info.source);
        contract.compiler_version = Some(unit.info.compiler_version);
        contract.updated_at = Some(Utc::now());
        if !self.store.update(&mut contract).await {
            return Err(VerifyError::PersistenceFailed);
        }

        tracing::info!(
            address = %display_address(&address),
            contract_name,
            "contract verified"
        );
        Ok(contract)
    }

    /// Returns the compiler version in `MAJOR.MINOR.PATCH+commit.<hash>` form.
    pub async fn compiler_version(&self) -> Result<String, VerifyError> {
        let info = self
            .with_timeout(self.compiler.version())
            .await
            .map_err(VerifyError::VersionQueryFailed)?;
        extract_semantic_version(&info.full_version)
            .map(str::to_string)
            .ok_or_else(|| VerifyError::VersionParseFailed(info.full_version.clone()))
    }

    async fn with_timeout<T>(
        &self,
        call: impl Future<Output = Result<T, CompileError>>,
    ) -> Result<T, CompileError> {
        tokio::time::timeout(self.compile_timeout, call)
            .await
            .map_err(|_| CompileError::Timeout(self.compile_timeout))?
    }
}
