use crate::analyzer::{BandingStrategy, CoordinatePolicy, PacingPolicy};
use crate::error::{SolarError, SolarResult};
use crate::insights::{Endpoint, SolarClient, DEFAULT_PROVIDER_URL};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Pause between provider calls in milliseconds (0 disables pacing)
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// quantile-rank | min-max
    #[arg(long, default_value = "quantile-rank")]
    pub banding: BandingStrategy,

    /// Handling of invalid coordinates: passthrough | skip | reject
    #[arg(long = "invalid-coordinates", default_value = "passthrough")]
    pub coordinates: CoordinatePolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            banding: BandingStrategy::default(),
            coordinates: CoordinatePolicy::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn pacing(&self) -> PacingPolicy {
        PacingPolicy::from_millis(self.delay_ms)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ClientConfig {
    /// Route lookups through a running proxy (e.g. http://localhost:3001/api/solar)
    #[arg(long, env = "SOLAR_PROXY_URL")]
    pub proxy_url: Option<String>,

    /// Call the provider directly with this key
    #[arg(long, env = "GOOGLE_SOLAR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "SOLAR_PROVIDER_URL", default_value = DEFAULT_PROVIDER_URL)]
    pub provider_url: String,

    /// Per-request timeout in seconds (transport default when unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            api_key: None,
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Proxy wins when both a proxy URL and a key are supplied.
    pub fn endpoint(&self) -> SolarResult<Endpoint> {
        if let Some(base_url) = non_blank(&self.proxy_url) {
            return Ok(Endpoint::Proxy { base_url });
        }
        if let Some(api_key) = non_blank(&self.api_key) {
            return Ok(Endpoint::Provider {
                base_url: self.provider_url.clone(),
                api_key,
            });
        }
        Err(SolarError::Configuration(
            "Either --proxy-url or --api-key (GOOGLE_SOLAR_API_KEY) must be provided".into(),
        ))
    }

    pub fn build_client(&self) -> SolarResult<SolarClient> {
        let endpoint = self.endpoint()?;
        match self.timeout_secs {
            Some(secs) => SolarClient::with_timeout(endpoint, Duration::from_secs(secs)),
            None => Ok(SolarClient::new(endpoint)),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServerConfig {
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Provider credential injected into every upstream request
    #[arg(long, env = "GOOGLE_SOLAR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Origins allowed to call the proxy from a browser
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "SOLAR_PROVIDER_URL", default_value = DEFAULT_PROVIDER_URL)]
    pub provider_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .split(',')
                .map(String::from)
                .collect(),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// The configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<String> {
        non_blank(&self.api_key)
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
