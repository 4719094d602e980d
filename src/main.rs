use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use shortgate::api::{self, AppState};
use shortgate::config::Config;
use shortgate::redirect::{self, Resolver};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");
    info!("Shortening backend at {}", config.backend.base_url);

    // Outbound client for the shorten proxy (default redirect handling);
    // the resolver builds its own client with redirects disabled.
    let http = reqwest::Client::builder()
        .user_agent("shortgate/0.1.0")
        .build()
        .context("failed to build HTTP client for the shorten proxy")?;

    let state = Arc::new(AppState {
        http,
        backend_url: config.backend.base_url.clone(),
        static_dir: config.frontend.static_dir.clone(),
    });
    let resolver = Arc::new(Resolver::new(config.backend.base_url.clone())?);

    if let Some(ref static_dir) = config.frontend.static_dir {
        info!("🎨 Serving form page from directory: {}", static_dir);
    } else {
        info!("🎨 Serving embedded form page");
    }

    // One server: the form page and proxy endpoint, plus short-code
    // resolution at the root path.
    let app = api::create_api_router(state).merge(redirect::create_redirect_router(resolver));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 shortgate listening on http://{}", addr);
    info!("   - Shorten form at http://{}/", addr);
    info!("   - Create endpoint at http://{}/api/shorten", addr);
    info!("   - Short links resolve at http://{}/<code>", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
