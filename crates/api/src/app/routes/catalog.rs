use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use apmed_catalog::{classify, expand, CategoryKind, Product};
use apmed_catalog::category::ALL_KINDS;
use apmed_core::DomainError;
use apmed_locale::resolve;

use crate::app::{content, dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:kind/items", get(category_items))
        .route("/products", get(list_products))
        .route("/products/:slug", get(get_product))
}

/// The category buttons, labels localized for the current selection.
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let country = services.countries.selected();

    let categories: Vec<dto::CategoryDto> = ALL_KINDS
        .into_iter()
        .map(|kind| {
            let table = content::category_label_translations(kind);
            dto::CategoryDto {
                key: kind.key(),
                label: resolve(&country, kind.label(), &table).to_string(),
            }
        })
        .collect();

    Json(categories).into_response()
}

/// One category view: classifier output run through the variant expander.
/// An empty view is a 200 with an empty list, not an error.
pub async fn category_items(
    Extension(services): Extension<Arc<AppServices>>,
    Path(kind): Path<String>,
) -> axum::response::Response {
    let kind: CategoryKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let filtered = classify(kind, services.catalog);
    let items = expand(kind, &filtered);
    let payload: Vec<dto::DisplayItemDto> =
        items.iter().map(dto::DisplayItemDto::from_item).collect();

    tracing::debug!(kind = %kind, items = payload.len(), "category view computed");
    Json(payload).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let payload: Vec<dto::ProductSummaryDto> = services
        .catalog
        .iter()
        .map(dto::ProductSummaryDto::from_product)
        .collect();
    Json(payload).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    match Product::find_by_slug(services.catalog, &slug) {
        Some(product) => Json(product).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}
