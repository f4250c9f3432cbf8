use chrono::{DateTime, Utc};
use ethers_core::types::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub address: Address,
    /// Deployed bytecode, lowercase hex without `0x` prefix.
    pub bytecode: String,
    pub valid: bool,
    pub optimization: bool,
    pub contract_name: Option<String>,
    pub source_code: Option<String>,
    pub compiler_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub revision: u64,
}

impl ContractRecord {
    pub fn new(address: Address, bytecode: String) -> Self {
        Self {
            address,
            bytecode,
            valid: false,
            optimization: false,
            contract_name: None,
            source_code: None,
            compiler_version: None,
            created_at: Utc::now(),
            updated_at: None,
            revision: 0,
        }
    }
}

/// Brings bytecode observed on chain into the stored form.
pub fn normalize_bytecode(bytecode: &str) -> Result<String, hex::FromHexError> {
    let bytecode = bytecode.trim();
    let bytecode = bytecode.strip_prefix("0x").unwrap_or(bytecode);
    hex::decode(bytecode)?;
    Ok(bytecode.to_lowercase())
}
