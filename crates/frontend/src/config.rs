//! Backend location for the browser build.

use api_client::{BossBoardClient, ClientConfig, DEFAULT_BASE_URL};

/// Base URL baked in at build time, e.g. `BOSSBOARD_API_URL=https://... trunk build`.
pub fn api_base_url() -> &'static str {
    option_env!("BOSSBOARD_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Client every page talks to.
pub fn api_client() -> BossBoardClient {
    BossBoardClient::new(ClientConfig::new(api_base_url()))
}
