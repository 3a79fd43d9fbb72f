use serde::{Deserialize, Serialize};

use apmed_catalog::{DisplayItem, Product, ProductId};
use apmed_leads::LeadRef;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SelectCountryRequest {
    pub code: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub key: &'static str,
    pub label: String,
}

/// One card of a category view. Variant-backed cards carry the variant's
/// commercial fields; product-backed cards leave them out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItemDto {
    pub key: String,
    pub display_name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packing_per_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsn_code: Option<String>,
}

impl DisplayItemDto {
    pub fn from_item(item: &DisplayItem<'_>) -> Self {
        Self {
            key: item.key().to_string(),
            display_name: item.display_name().to_string(),
            slug: item.product.slug.clone(),
            category: item.product.category.clone(),
            description: item.product.description.clone(),
            product_code: item.variant.map(|v| v.product_code.clone()),
            packing_per_box: item.variant.map(|v| v.packing_per_box.clone()),
            gst_percentage: item.variant.map(|v| v.gst_percentage.clone()),
            hsn_code: item.variant.map(|v| v.hsn_code.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryDto {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
}

impl ProductSummaryDto {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub reference: LeadRef,
}

#[derive(Debug, Serialize)]
pub struct NewsletterAccepted {
    pub data: NewsletterData,
}

/// The download URL is only present when the server is configured with
/// one; callers branch on it to trigger the file download.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterData {
    pub reference: LeadRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_download_url: Option<String>,
}
