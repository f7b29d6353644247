use std::env;
use std::net::SocketAddr;

const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Process-wide configuration, read once at startup.
#[derive(Clone)]
pub struct Settings {
    pub xai_api_key: Option<String>,
    pub xai_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn bind_address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

pub fn load() -> Settings {
    let xai_api_key = env::var("XAI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let xai_base_url = env::var("XAI_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    Settings {
        xai_api_key,
        xai_base_url,
        host,
        port,
    }
}
