mod bytecode;
mod contract_verifier;
mod errors;

pub use bytecode::{canonicalize, strip_metadata_hash};
pub use contract_verifier::ContractVerifier;
pub use errors::VerifyError;
