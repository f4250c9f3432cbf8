use crate::{store::ContractRecord, types::display_address};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct VerificationResponse {
    pub message: String,
    pub result: Option<ContractResponse>,
    pub status: VerificationStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContractResponse {
    pub address: String,
    pub bytecode: String,
    pub valid: bool,
    pub optimization: bool,
    pub contract_name: Option<String>,
    pub source_code: Option<String>,
    pub compiler_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ContractRecord> for ContractResponse {
    fn from(record: ContractRecord) -> Self {
        Self {
            address: display_address(&record.address),
            bytecode: record.bytecode,
            valid: record.valid,
            optimization: record.optimization,
            contract_name: record.contract_name,
            source_code: record.source_code,
            compiler_version: record.compiler_version,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum VerificationStatus {
    #[serde(rename = "0")]
    Ok,
    #[serde(rename = "1")]
    Failed,
}

impl VerificationResponse {
    pub fn ok(result: ContractResponse) -> Self {
        Self {
            message: "OK".to_string(),
            result: Some(result),
            status: VerificationStatus::Ok,
        }
    }

    pub fn err(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
            result: None,
            status: VerificationStatus::Failed,
        }
    }
}
