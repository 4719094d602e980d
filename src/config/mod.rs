use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the shortening backend this front end proxies to.
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Path to a directory containing the form page
    /// If None, uses the embedded page
    #[serde(default)]
    pub static_dir: Option<String>,
    /// Public base URL used when rendering short links
    /// If None, falls back to the bind address
    #[serde(default)]
    pub public_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let backend_base_url =
            std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let static_dir = std::env::var("STATIC_DIR").ok();
        let public_base_url = std::env::var("PUBLIC_BASE_URL").ok();

        Ok(Config {
            server: ServerConfig { host, port },
            backend: BackendConfig {
                base_url: backend_base_url,
            },
            frontend: FrontendConfig {
                static_dir,
                public_base_url,
            },
        })
    }

    /// Base URL short links are rendered under.
    pub fn public_base_url(&self) -> String {
        self.frontend
            .public_base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.server.host, self.server.port))
    }
}
