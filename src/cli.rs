use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the toml config. `EXPLORER_VERIFIER__CONFIG` is used when not set.
    #[clap(short, long)]
    pub config_path: Option<std::path::PathBuf>,
}
