use crate::{compiler::CompileError, types::display_address};
use ethers_core::types::Address;
use thiserror::Error;

/// Every error is terminal for the request. None of them leaves
/// the stored contract partially updated.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("contract with given address not found")]
    NotFound,
    #[error("contract with given address is already verified")]
    AlreadyVerified,
    #[error("error occurred while compiling source code: {0}")]
    CompilationFailed(#[source] CompileError),
    #[error("invalid contract name")]
    UnknownContractName,
    #[error("contract binary is empty")]
    EmptyBytecode,
    #[error(
        "the compiled result does not match the deployed bytecode located at {}",
        display_address(.0)
    )]
    BytecodeMismatch(Address),
    #[error("error occurred while processing data")]
    PersistenceFailed,
    #[error("error occurred while querying compiler version: {0}")]
    VersionQueryFailed(#[source] CompileError),
    #[error("compiler version not found in {0:?}")]
    VersionParseFailed(String),
}
