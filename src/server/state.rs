use super::error::ProxyError;
use crate::config::ServerConfig;
use reqwest::Client;

#[derive(Clone)]
pub struct ProxyState {
    pub http: Client,
    pub provider_url: String,
    api_key: Option<String>,
}

impl ProxyState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: Client::new(),
            provider_url: config.provider_url.trim_end_matches('/').to_string(),
            api_key: config.api_key(),
        }
    }

    pub fn api_key(&self) -> Result<&str, ProxyError> {
        self.api_key.as_deref().ok_or(ProxyError::MissingApiKey)
    }
}
