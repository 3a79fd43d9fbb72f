use std::sync::Arc;

use apmed_catalog::Product;
use apmed_leads::{AnalyticsSink, ChatClient, TracingSink};
use apmed_locale::CountrySelectionStore;

use crate::config::ApiConfig;

/// Shared per-process state injected into every handler.
pub struct AppServices {
    /// The built-in catalog. Static for the process lifetime.
    pub catalog: &'static [Product],
    /// Current country selection (session-scoped in the UI, process-wide here).
    pub countries: CountrySelectionStore,
    /// Upstream chat assistant; `None` runs the chat endpoint in
    /// fallback-only mode.
    pub chat: Option<ChatClient>,
    /// Interaction tracking. Fire-and-forget.
    pub analytics: Arc<dyn AnalyticsSink>,
    /// Catalog PDF link handed out by the newsletter endpoint.
    pub catalog_download_url: Option<String>,
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    AppServices {
        catalog: apmed_catalog::data::builtin(),
        countries: CountrySelectionStore::new(),
        chat: config.chat_upstream.as_deref().map(ChatClient::new),
        analytics: Arc::new(TracingSink),
        catalog_download_url: config.catalog_download_url.clone(),
    }
}
