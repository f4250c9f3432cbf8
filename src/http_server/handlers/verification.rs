use crate::{
    http_server::{
        metrics,
        verification_response::{VerificationResponse, VerificationStatus},
    },
    recaptcha::ReCaptcha,
    types::parse_address,
    verifier::{ContractVerifier, VerifyError},
};
use actix_web::{error, web, web::Json, HttpRequest};
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct VerificationRequest {
    pub address: String,
    pub contract_name: String,
    pub source_code: String,
    #[serde(default)]
    pub recaptcha_token: Option<String>,
}

#[instrument(skip(request, verifier, recaptcha, params), level = "debug")]
pub async fn verify(
    request: HttpRequest,
    verifier: web::Data<ContractVerifier>,
    recaptcha: web::Data<ReCaptcha>,
    params: Json<VerificationRequest>,
) -> Result<Json<VerificationResponse>, actix_web::Error> {
    let params = params.into_inner();
    let address = parse_address(&params.address).map_err(error::ErrorBadRequest)?;

    let remote_ip = request.peer_addr().map(|addr| addr.ip().to_string());
    recaptcha
        .verify(
            params.recaptcha_token.as_deref().unwrap_or_default(),
            remote_ip.as_deref(),
        )
        .await
        .map_err(error::ErrorForbidden)?;

    let result = verifier
        .verify_contract(address, &params.contract_name, &params.source_code)
        .await;
    let response = match result {
        Ok(contract) => VerificationResponse::ok(contract.into()),
        Err(err @ VerifyError::NotFound) => {
            metrics::count_verify_contract(&VerificationStatus::Failed);
            return Err(error::ErrorNotFound(err));
        }
        Err(err @ VerifyError::PersistenceFailed) => {
            metrics::count_verify_contract(&VerificationStatus::Failed);
            return Err(error::ErrorInternalServerError(err));
        }
        Err(err) => VerificationResponse::err(err),
    };
    metrics::count_verify_contract(&response.status);
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_request() {
        let input = r#"{
            "address": "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "contract_name": "Foo",
            "source_code": "pragma solidity ^0.4.24;\n\ncontract Foo {}\n"
        }"#;
        let deserialized: VerificationRequest = serde_json::from_str(input).expect("Valid json");
        assert_eq!(
            deserialized,
            VerificationRequest {
                address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".into(),
                contract_name: "Foo".into(),
                source_code: "pragma solidity ^0.4.24;\n\ncontract Foo {}\n".into(),
                recaptcha_token: None,
            }
        );
    }
}
