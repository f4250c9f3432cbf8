use crate::settings::JaegerSettings;
use opentelemetry::{
    global,
    sdk::{self, propagation::TraceContextPropagator},
    trace::TraceError,
};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, prelude::*, Layer};

pub fn init_logs(settings: &JaegerSettings) -> anyhow::Result<()> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .boxed();
    let mut layers = vec![stdout_layer];

    if settings.enabled {
        let tracer = init_jaeger_tracer(&settings.agent_endpoint)?;
        // jaeger receives everything down to DEBUG regardless of RUST_LOG
        let jaeger_layer = tracing_opentelemetry::layer()
            .with_tracer(tracer)
            .with_filter(LevelFilter::DEBUG)
            .boxed();
        layers.push(jaeger_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

fn init_jaeger_tracer(endpoint: &str) -> Result<sdk::trace::Tracer, TraceError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    opentelemetry_jaeger::new_pipeline()
        .with_service_name("explorer_verifier")
        .with_agent_endpoint(endpoint)
        .install_batch(opentelemetry::runtime::Tokio)
}
