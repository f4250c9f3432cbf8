use super::Router;
use crate::{
    http_server::handlers::{compiler_version, contract, verification},
    recaptcha::ReCaptcha,
    verifier::ContractVerifier,
};
use actix_web::web;

pub struct ContractsRouter {
    verifier: web::Data<ContractVerifier>,
    recaptcha: web::Data<ReCaptcha>,
}

impl ContractsRouter {
    pub fn new(verifier: ContractVerifier, recaptcha: ReCaptcha) -> Self {
        Self {
            verifier: web::Data::new(verifier),
            recaptcha: web::Data::new(recaptcha),
        }
    }
}

impl Router for ContractsRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        service_config
            .app_data(self.verifier.clone())
            .app_data(self.recaptcha.clone())
            .service(
                web::scope("/contracts")
                    .route("/verify", web::post().to(verification::verify))
                    .route("/{address}", web::get().to(contract::get_contract)),
            )
            .route(
                "/compiler/version",
                web::get().to(compiler_version::get_version),
            );
    }
}
