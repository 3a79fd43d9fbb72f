use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use apmed_leads::{fallback_reply, AnalyticsEvent, ChatReply, ChatRequest};

use crate::app::services::AppServices;

/// Relay one widget message to the upstream assistant.
///
/// Any upstream failure collapses into the fixed fallback reply with a
/// 200, so the widget always has something to render. A broken assistant
/// must never surface as an error state.
pub async fn relay(
    Extension(services): Extension<Arc<AppServices>>,
    Json(request): Json<ChatRequest>,
) -> axum::response::Response {
    let reply = match &services.chat {
        Some(client) => match client.reply(&request).await {
            Ok(reply) => {
                services.analytics.track(AnalyticsEvent::ChatbotInteraction {
                    outcome: "replied",
                });
                reply
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat upstream failed; serving fallback");
                services.analytics.track(AnalyticsEvent::ChatbotInteraction {
                    outcome: "fallback",
                });
                fallback_reply()
            }
        },
        None => {
            services.analytics.track(AnalyticsEvent::ChatbotInteraction {
                outcome: "fallback",
            });
            fallback_reply()
        }
    };

    Json(ChatReply { reply }).into_response()
}
