use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use apmed_leads::AnalyticsEvent;
use apmed_locale::directory;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/selected", get(selected).put(select))
}

pub async fn list_countries() -> axum::response::Response {
    Json(directory()).into_response()
}

pub async fn selected(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(services.countries.selected()).into_response()
}

/// Replace the selection. Codes outside the fixed directory are rejected;
/// the selector UI only offers directory entries, so anything else is a
/// caller error.
pub async fn select(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SelectCountryRequest>,
) -> axum::response::Response {
    match services.countries.select_code(&body.code) {
        Ok(country) => {
            tracing::info!(code = %country.code, "country selected");
            services.analytics.track(AnalyticsEvent::ButtonClicked {
                label: format!("country-selector:{}", country.code),
            });
            Json(country).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
