mod cli;
mod compiler;
mod consts;
mod http_server;
mod recaptcha;
mod settings;
mod solidity;
mod store;
mod tracer;
mod types;
mod verifier;

pub use cli::Args;
pub use compiler::{
    extract_semantic_version, unit_key, CompilationUnit, CompilationUnits, CompileError,
    CompilerVersionInfo, ContractInfo, SourceCompiler,
};
pub use http_server::{
    configure_router,
    handlers::compiler_version::CompilerVersionResponse,
    run as run_http_server,
    verification_response::{ContractResponse, VerificationResponse, VerificationStatus},
    AppRouter, Router,
};
pub use recaptcha::{ReCaptcha, ReCaptchaError};
pub use settings::{
    CompilerSettings, JaegerSettings, MetricsSettings, ReCaptchaSettings, ServerSettings,
    Settings, StoreSettings,
};
pub use solidity::SolcCli;
pub use store::{ContractRecord, ContractStore, MemoryContractStore, StoreError};
pub use tracer::init_logs;
pub use types::{display_address, parse_address, AddressError};
pub use verifier::{canonicalize, strip_metadata_hash, ContractVerifier, VerifyError};
