use super::{normalize_bytecode, ContractRecord, ContractStore, StoreError};
use crate::types::parse_address;
use async_trait::async_trait;
use ethers_core::types::Address;
use parking_lot::RwLock;
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

#[derive(Debug, Deserialize)]
struct SeedEntry {
    address: String,
    bytecode: String,
}

/// Keeps contracts in memory. Updates are compare-and-set on
/// [`ContractRecord::revision`].
#[derive(Debug, Default)]
pub struct MemoryContractStore {
    contracts: RwLock<HashMap<Address, ContractRecord>>,
}

impl MemoryContractStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the store and imports every contract listed in the
    /// JSON seed file.
    pub async fn from_seed_file(path: &Path) -> Result<Self, StoreError> {
        let content = tokio::fs::read(path).await?;
        let entries: Vec<SeedEntry> = serde_json::from_slice(&content)?;

        let store = Self::new();
        for entry in entries {
            let address = parse_address(&entry.address)?;
            store.import_contract(address, &entry.bytecode).await?;
        }
        tracing::info!(
            path = %path.display(),
            contracts = store.len(),
            "contract store seeded"
        );
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.contracts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.read().is_empty()
    }
}

#[async_trait]
impl ContractStore for MemoryContractStore {
    async fn find_by_address(&self, address: &Address) -> Option<ContractRecord> {
        self.contracts.read().get(address).cloned()
    }

    async fn update(&self, record: &mut ContractRecord) -> bool {
        let mut contracts = self.contracts.write();
        match contracts.get_mut(&record.address) {
            Some(stored) if stored.revision == record.revision => {
                record.revision += 1;
                *stored = record.clone();
                true
            }
            _ => false,
        }
    }

    async fn import_contract(
        &self,
        address: Address,
        bytecode: &str,
    ) -> Result<ContractRecord, StoreError> {
        let bytecode = normalize_bytecode(bytecode)?;
        let mut contracts = self.contracts.write();
        let record = contracts
            .entry(address)
            .and_modify(|record| {
                if record.bytecode != bytecode {
                    record.bytecode = bytecode.clone();
                    record.revision += 1;
                }
            })
            .or_insert_with(|| ContractRecord::new(address, bytecode.clone()));
        Ok(record.clone())
    }
}
