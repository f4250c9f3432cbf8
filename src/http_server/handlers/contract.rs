use crate::{
    http_server::verification_response::ContractResponse, types::parse_address,
    verifier::ContractVerifier,
};
use actix_web::{error, web, web::Json};
use tracing::instrument;

#[instrument(skip(verifier), level = "debug")]
pub async fn get_contract(
    verifier: web::Data<ContractVerifier>,
    address: web::Path<String>,
) -> Result<Json<ContractResponse>, actix_web::Error> {
    let address = parse_address(&address).map_err(error::ErrorBadRequest)?;
    let contract = verifier
        .get_contract(&address)
        .await
        .map_err(error::ErrorNotFound)?;
    Ok(Json(contract.into()))
}
