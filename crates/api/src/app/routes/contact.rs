use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use apmed_leads::{AnalyticsEvent, ContactForm, LeadRef};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// Accept a contact-form submission.
///
/// Validation failures answer 400 with the offending field for inline
/// rendering. Accepted submissions get a reference id; the CRM upstream
/// owns everything after that.
pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Json(form): Json<ContactForm>,
) -> axum::response::Response {
    if let Err(e) = form.validate() {
        return errors::form_error_to_response(e);
    }

    let reference = LeadRef::new();
    tracing::info!(
        %reference,
        organization = %form.organization,
        product_interest = %form.product_interest,
        "contact inquiry accepted"
    );
    services.analytics.track(AnalyticsEvent::FormSubmitted {
        form: "contact",
        reference: reference.to_string(),
    });

    Json(dto::ContactAccepted { reference }).into_response()
}
