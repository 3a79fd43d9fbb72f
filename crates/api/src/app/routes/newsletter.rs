use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use apmed_leads::{AnalyticsEvent, LeadRef, NewsletterSignup};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// Accept a newsletter/catalog signup.
///
/// The response carries `catalogDownloadUrl` only when the server is
/// configured with one; the widget triggers the file download off it.
pub async fn subscribe(
    Extension(services): Extension<Arc<AppServices>>,
    Json(signup): Json<NewsletterSignup>,
) -> axum::response::Response {
    if let Err(e) = signup.validate() {
        return errors::form_error_to_response(e);
    }

    let reference = LeadRef::new();
    tracing::info!(%reference, company = %signup.company, "newsletter signup accepted");
    services.analytics.track(AnalyticsEvent::FormSubmitted {
        form: "newsletter",
        reference: reference.to_string(),
    });

    let catalog_download_url = services.catalog_download_url.clone();
    if catalog_download_url.is_some() {
        services.analytics.track(AnalyticsEvent::CatalogDownloaded);
    }

    Json(dto::NewsletterAccepted {
        data: dto::NewsletterData {
            reference,
            catalog_download_url,
        },
    })
    .into_response()
}
