//! Environment-driven configuration for the API binary.

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP server binds.
    pub bind_addr: String,
    /// Upstream chat assistant endpoint. When unset the chat endpoint
    /// answers every message with the fallback reply.
    pub chat_upstream: Option<String>,
    /// URL handed out by the newsletter endpoint for the catalog PDF.
    pub catalog_download_url: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("APMED_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let chat_upstream = std::env::var("APMED_CHAT_UPSTREAM").ok();
        if chat_upstream.is_none() {
            tracing::warn!("APMED_CHAT_UPSTREAM not set; chat will answer with the fallback reply");
        }

        let catalog_download_url = std::env::var("APMED_CATALOG_URL").ok();
        if catalog_download_url.is_none() {
            tracing::warn!("APMED_CATALOG_URL not set; newsletter responses omit the download link");
        }

        Self {
            bind_addr,
            chat_upstream,
            catalog_download_url,
        }
    }
}
