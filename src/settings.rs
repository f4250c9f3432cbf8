use crate::consts::{DEFAULT_RECAPTCHA_URL, DEFAULT_SOLC_PATH};
use anyhow::anyhow;
use config::{Config, File};
use serde::{de::IgnoredAny, Deserialize};
use serde_with::{serde_as, DurationSeconds};
use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub server: ServerSettings,
    pub compiler: CompilerSettings,
    pub store: StoreSettings,
    pub recaptcha: ReCaptchaSettings,
    pub metrics: MetricsSettings,
    pub jaeger: JaegerSettings,

    // Is required as we deny unknown fields, but allow users provide
    // path to config through PREFIX__CONFIG env variable. If removed,
    // the setup would fail with `unknown field `config`, expected one of...`
    pub config: IgnoredAny,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub addr: SocketAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from_str("0.0.0.0:8050").expect("should be valid url"),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerSettings {
    /// Path (or a name resolved through `PATH`) of the `solc` binary.
    pub solc_path: PathBuf,
    /// Upper bound for a single compilation. The compiler process
    /// is killed when it is exceeded.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub compile_timeout: Duration,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            solc_path: PathBuf::from(DEFAULT_SOLC_PATH),
            compile_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSettings {
    /// JSON file with `[{"address": .., "bytecode": ..}]` entries
    /// imported into the store on startup.
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReCaptchaSettings {
    /// Checks are skipped when no secret is provided.
    pub secret: Option<String>,
    pub url: Url,
    pub min_score: f64,
}

impl Default for ReCaptchaSettings {
    fn default() -> Self {
        Self {
            secret: None,
            url: Url::try_from(DEFAULT_RECAPTCHA_URL).expect("valid url"),
            min_score: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsSettings {
    pub enabled: bool,
    pub endpoint: String,
    pub addr: SocketAddr,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "/metrics".to_string(),
            addr: SocketAddr::from_str("0.0.0.0:6060").expect("should be valid url"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JaegerSettings {
    pub enabled: bool,
    pub agent_endpoint: String,
}

impl Default for JaegerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            agent_endpoint: "localhost:6831".to_string(),
        }
    }
}

impl Settings {
    /// Builds settings from the optional config file and `EXPLORER_VERIFIER__*`
    /// environment variables. Falls back to `EXPLORER_VERIFIER__CONFIG` when
    /// no explicit path is given.
    pub fn new(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.or_else(|| {
            std::env::var("EXPLORER_VERIFIER__CONFIG")
                .ok()
                .map(PathBuf::from)
        });

        let mut builder = Config::builder();
        if let Some(config_path) = config_path {
            builder = builder.add_source(File::from(config_path));
        };
        builder = builder
            .add_source(config::Environment::with_prefix("EXPLORER_VERIFIER").separator("__"));

        builder
            .build()?
            .try_deserialize()
            .map_err(|err| anyhow!(err))
    }
}
