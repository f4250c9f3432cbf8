use super::{configure_router, ContractsRouter, Router};
use crate::{
    recaptcha::ReCaptcha,
    settings::Settings,
    solidity::SolcCli,
    store::{ContractStore, MemoryContractStore},
    verifier::ContractVerifier,
};
use actix_web::{web, HttpResponse};
use std::sync::Arc;

pub struct AppRouter {
    contracts: ContractsRouter,
}

impl AppRouter {
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let store: Arc<dyn ContractStore> = match settings.store.seed_file {
            Some(path) => Arc::new(MemoryContractStore::from_seed_file(&path).await?),
            None => Arc::new(MemoryContractStore::new()),
        };
        let compiler = Arc::new(SolcCli::new(settings.compiler.solc_path));
        let verifier = ContractVerifier::new(store, compiler, settings.compiler.compile_timeout);
        Ok(Self::from_parts(verifier, ReCaptcha::new(settings.recaptcha)))
    }

    pub fn from_parts(verifier: ContractVerifier, recaptcha: ReCaptcha) -> Self {
        Self {
            contracts: ContractsRouter::new(verifier, recaptcha),
        }
    }
}

impl Router for AppRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .route(
                "/health",
                web::get().to(|| async { HttpResponse::Ok().finish() }),
            )
            .service(web::scope("/api/v1").configure(configure_router(&self.contracts)));
    }
}
