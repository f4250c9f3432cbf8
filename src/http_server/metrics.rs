use super::verification_response::VerificationStatus;
use actix_web::{dev::Server, App, HttpServer};
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};
use std::net::SocketAddr;

lazy_static! {
    pub static ref VERIFICATION: IntCounterVec = register_int_counter_vec!(
        "explorer_verifier_verify_contract",
        "number of contract verifications",
        &["status"],
    )
    .unwrap();
}

pub fn count_verify_contract(status: &VerificationStatus) {
    let status = match status {
        VerificationStatus::Ok => "ok",
        VerificationStatus::Failed => "fail",
    };
    VERIFICATION.with_label_values(&[status]).inc();
}

#[derive(Clone)]
pub struct Metrics {
    metrics_middleware: PrometheusMetrics,
    http_middleware: PrometheusMetrics,
}

impl Metrics {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let registry = prometheus::default_registry();
        let metrics_middleware = PrometheusMetricsBuilder::new("explorer_verifier_metrics")
            .registry(registry.clone())
            .endpoint(endpoint)
            .build()
            .map_err(|err| anyhow::anyhow!("couldn't build metrics middleware: {err}"))?;
        // http middleware has no endpoint, it only counts requests to the main server
        let http_middleware = PrometheusMetricsBuilder::new("explorer_verifier")
            .registry(registry.clone())
            .build()
            .map_err(|err| anyhow::anyhow!("couldn't build http middleware: {err}"))?;

        Ok(Self {
            metrics_middleware,
            http_middleware,
        })
    }

    pub fn middleware(&self) -> &PrometheusMetrics {
        &self.http_middleware
    }

    pub fn run_server(&self, addr: SocketAddr) -> std::io::Result<Server> {
        let metrics_middleware = self.metrics_middleware.clone();
        let server = HttpServer::new(move || App::new().wrap(metrics_middleware.clone()))
            .bind(addr)?
            .run();
        Ok(server)
    }
}
