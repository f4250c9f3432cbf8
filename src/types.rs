use ethers_core::types::Address;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressError {
    #[error("address must be 20 bytes long, got {0} hex characters")]
    InvalidLength(usize),
    #[error("address is not a valid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Parses an account address given in any letter case,
/// with or without the `0x` prefix.
pub fn parse_address(value: &str) -> Result<Address, AddressError> {
    let value = value.trim();
    let value = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if value.len() != 40 {
        return Err(AddressError::InvalidLength(value.len()));
    }
    let bytes = hex::decode(value)?;
    Ok(Address::from_slice(&bytes))
}

/// EIP-55 representation used whenever an address is shown to the caller.
pub fn display_address(address: &Address) -> String {
    ethers_core::utils::to_checksum(address, None)
}
