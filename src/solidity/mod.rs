mod solc_cli;

pub use solc_cli::SolcCli;
