pub mod compiler_version;
pub mod contract;
pub mod verification;
