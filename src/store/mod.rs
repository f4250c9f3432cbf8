mod memory;
mod record;

pub use memory::MemoryContractStore;
pub use record::{normalize_bytecode, ContractRecord};

use crate::types::AddressError;
use async_trait::async_trait;
use ethers_core::types::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("bytecode is not a valid hex string: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),
    #[error("invalid contract address: {0}")]
    InvalidAddress(#[from] AddressError),
    #[error("couldn't read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("couldn't parse seed file: {0}")]
    Seed(#[from] serde_json::Error),
}

#[async_trait]
pub trait ContractStore: Send + Sync {
    async fn find_by_address(&self, address: &Address) -> Option<ContractRecord>;

    /// Atomically replaces the stored record if it was not modified since
    /// `record` has been read (revisions are equal). On success the revision
    /// of `record` is advanced to the stored one.
    ///
    /// Returns `false` if the record is missing or was changed concurrently.
    async fn update(&self, record: &mut ContractRecord) -> bool;

    /// Registers a newly deployed contract, or refreshes the bytecode of
    /// an already known one keeping its verification state.
    async fn import_contract(
        &self,
        address: Address,
        bytecode: &str,
    ) -> Result<ContractRecord, StoreError>;
}
