use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use eyre::{WrapErr, bail, eyre};
use rowad_genai::provider::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, redact_api_key};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Log output selected by `ROWAD_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub bind: SocketAddr,
    pub timeout: Option<Duration>,
    pub log_format: LogFormat,
    /// Footer line of the exported document.
    pub credit: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = var("GEMINI_API_KEY")
            .or_else(|| var("API_KEY"))
            .ok_or_else(|| eyre!("GEMINI_API_KEY is not set"))?;

        let bind_raw = var("ROWAD_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("ROWAD_BIND is not a socket address: {bind_raw}"))?;

        let timeout = match var("ROWAD_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .wrap_err_with(|| format!("ROWAD_TIMEOUT_SECS is not a number: {raw}"))?;
                if secs == 0 {
                    bail!("ROWAD_TIMEOUT_SECS must be greater than zero");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let log_format = match var("ROWAD_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("unknown ROWAD_LOG_FORMAT: {other}"),
        };

        Ok(Self {
            api_key,
            model: var("ROWAD_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: var("ROWAD_API_BASE").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind,
            timeout,
            log_format,
            credit: var("ROWAD_CREDIT"),
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact_api_key(&self.api_key))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("bind", &self.bind)
            .field("timeout", &self.timeout)
            .field("log_format", &self.log_format)
            .field("credit", &self.credit)
            .finish()
    }
}
