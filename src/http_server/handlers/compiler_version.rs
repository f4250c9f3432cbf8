use crate::verifier::ContractVerifier;
use actix_web::{error, web, web::Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CompilerVersionResponse {
    pub version: String,
}

#[instrument(skip(verifier), level = "debug")]
pub async fn get_version(
    verifier: web::Data<ContractVerifier>,
) -> Result<Json<CompilerVersionResponse>, actix_web::Error> {
    let version = verifier
        .compiler_version()
        .await
        .map_err(error::ErrorInternalServerError)?;
    Ok(Json(CompilerVersionResponse { version }))
}
