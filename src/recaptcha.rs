use crate::settings::ReCaptchaSettings;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ReCaptchaError {
    #[error("error occurred during processing your request. please try again")]
    Request(#[from] reqwest::Error),
    #[error("error occurred during anti-bot checking. please try again")]
    Unsuccessful,
    #[error("not handling bot request")]
    LowScore(f64),
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default)]
    score: f64,
}

/// Client of the reCAPTCHA v3 `siteverify` endpoint.
pub struct ReCaptcha {
    client: reqwest::Client,
    secret: Option<String>,
    url: Url,
    min_score: f64,
}

impl ReCaptcha {
    pub fn new(settings: ReCaptchaSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret: settings.secret.filter(|secret| !secret.is_empty()),
            url: settings.url,
            min_score: settings.min_score,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    /// Succeeds immediately if no secret is configured.
    #[tracing::instrument(skip(self, token), level = "debug")]
    pub async fn verify(&self, token: &str, remote_ip: Option<&str>) -> Result<(), ReCaptchaError> {
        let secret = match &self.secret {
            Some(secret) => secret,
            None => return Ok(()),
        };

        let mut params = vec![("secret", secret.as_str()), ("response", token)];
        if let Some(remote_ip) = remote_ip {
            params.push(("remoteip", remote_ip));
        }
        let response: SiteVerifyResponse = self
            .client
            .post(self.url.clone())
            .form(&params)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                tracing::error!(err = %err, "recaptcha request failed");
                err
            })?
            .json()
            .await?;

        if !response.success {
            return Err(ReCaptchaError::Unsuccessful);
        }
        if response.score < self.min_score {
            return Err(ReCaptchaError::LowScore(response.score));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn recaptcha(server: &MockServer) -> ReCaptcha {
        ReCaptcha::new(ReCaptchaSettings {
            secret: Some("top-secret".into()),
            url: Url::parse(&format!("{}/siteverify", server.uri())).unwrap(),
            min_score: 0.5,
        })
    }

    async fn mock_response(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/siteverify"))
            .and(body_string_contains("secret=top-secret"))
            .and(body_string_contains("response=token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn disabled_without_secret() {
        let recaptcha = ReCaptcha::new(ReCaptchaSettings {
            secret: Some("".into()),
            ..Default::default()
        });
        assert!(!recaptcha.is_enabled());
        recaptcha
            .verify("token", None)
            .await
            .expect("disabled check always passes");
    }

    #[tokio::test]
    async fn human_passes() {
        let server = MockServer::start().await;
        mock_response(&server, json!({"success": true, "score": 0.9})).await;
        recaptcha(&server)
            .verify("token", Some("127.0.0.1"))
            .await
            .expect("score is high enough");
    }

    #[tokio::test]
    async fn unsuccessful_check() {
        let server = MockServer::start().await;
        mock_response(&server, json!({"success": false})).await;
        let err = recaptcha(&server)
            .verify("token", None)
            .await
            .expect_err("check is not successful");
        assert!(matches!(err, ReCaptchaError::Unsuccessful), "{err:?}");
    }

    #[tokio::test]
    async fn bot_is_rejected() {
        let server = MockServer::start().await;
        mock_response(&server, json!({"success": true, "score": 0.1})).await;
        let err = recaptcha(&server)
            .verify("token", None)
            .await
            .expect_err("score is too low");
        assert!(matches!(err, ReCaptchaError::LowScore(_)), "{err:?}");
    }

    #[tokio::test]
    async fn server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let err = recaptcha(&server)
            .verify("token", None)
            .await
            .expect_err("siteverify is down");
        assert!(matches!(err, ReCaptchaError::Request(_)), "{err:?}");
    }
}
