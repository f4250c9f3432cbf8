pub mod handlers;
mod metrics;
mod routers;
pub mod verification_response;

pub use self::routers::{configure_router, AppRouter, Router};

use crate::settings::Settings;
use actix_web::{App, HttpServer};
use futures::future;
use metrics::Metrics;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let socket_addr = settings.server.addr;
    let metrics_settings = settings.metrics.clone();

    tracing::info!("explorer verifier is starting at {}", socket_addr);
    let app_router = Arc::new(AppRouter::new(settings).await?);
    let metrics = Metrics::new(&metrics_settings.endpoint)?;

    let server_future = {
        let middleware = metrics.middleware().clone();
        HttpServer::new(move || {
            App::new()
                .wrap(middleware.clone())
                .wrap(TracingLogger::default())
                .configure(configure_router(&*app_router))
        })
        .bind(socket_addr)?
        .run()
    };

    let mut futures = vec![tokio::spawn(server_future)];
    if metrics_settings.enabled {
        tracing::info!("metrics server is starting at {}", metrics_settings.addr);
        futures.push(tokio::spawn(metrics.run_server(metrics_settings.addr)?));
    }
    for result in future::try_join_all(futures).await? {
        result?;
    }
    Ok(())
}
