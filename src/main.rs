use anyhow::Context;
use clap::Parser;
use explorer_verifier::{init_logs, run_http_server, Args, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = Settings::new(args.config_path).context("failed to parse config")?;
    init_logs(&settings.jaeger).context("failed to initialize logs")?;
    run_http_server(settings).await
}
