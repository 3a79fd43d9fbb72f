use axum::{routing::post, Router};

pub mod catalog;
pub mod chat;
pub mod contact;
pub mod locale;
pub mod newsletter;
pub mod system;

/// Router for all site-facing endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/locale", locale::router())
        .route("/api/contact", post(contact::submit))
        .route("/api/newsletter", post(newsletter::subscribe))
        .route("/api/chat", post(chat::relay))
}
