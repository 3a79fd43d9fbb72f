use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use apmed_core::{DomainError, DomainResult};

/// Product identifier (stable across the catalog).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A sub-variant of a product, keyed by `product_code`.
///
/// When a category view expands variants, each variant becomes a standalone
/// card displayed under its own `product_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub product_code: String,
    pub product_name: String,
    pub packing_per_box: String,
    pub gst_percentage: String,
    pub hsn_code: String,
}

/// An immutable catalog record, authored at build time.
///
/// `name` and `category` are free text; category views match substrings of
/// them rather than an explicit tag field, so the catalog content and the
/// classification rules evolve together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub slug: String,
    pub variants: Vec<ProductVariant>,
    pub specs: Vec<String>,
    pub features: Vec<String>,
    pub applications: Vec<String>,
    pub certifications: Vec<String>,
    pub keywords: Vec<String>,
}

impl Product {
    /// Look up a product by its detail-page slug.
    pub fn find_by_slug<'a>(products: &'a [Product], slug: &str) -> Option<&'a Product> {
        products.iter().find(|p| p.slug == slug)
    }
}

/// Check catalog invariants: unique ids, unique slugs, and unique variant
/// codes within each product.
pub fn verify_catalog(products: &[Product]) -> DomainResult<()> {
    let mut ids = BTreeSet::new();
    let mut slugs = BTreeSet::new();

    for product in products {
        if !ids.insert(product.id) {
            return Err(DomainError::validation(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if !slugs.insert(product.slug.as_str()) {
            return Err(DomainError::validation(format!(
                "duplicate product slug {:?}",
                product.slug
            )));
        }

        let mut codes = BTreeSet::new();
        for variant in &product.variants {
            if !codes.insert(variant.product_code.as_str()) {
                return Err(DomainError::validation(format!(
                    "duplicate variant code {:?} in product {}",
                    variant.product_code, product.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(id: u32, slug: &str) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: String::new(),
            category: String::new(),
            slug: slug.to_string(),
            variants: Vec::new(),
            specs: Vec::new(),
            features: Vec::new(),
            applications: Vec::new(),
            certifications: Vec::new(),
            keywords: Vec::new(),
        }
    }

    #[test]
    fn verify_accepts_distinct_records() {
        let products = vec![bare(1, "one"), bare(2, "two")];
        assert!(verify_catalog(&products).is_ok());
    }

    #[test]
    fn verify_rejects_duplicate_id() {
        let products = vec![bare(1, "one"), bare(1, "two")];
        let err = verify_catalog(&products).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("id")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn verify_rejects_duplicate_slug() {
        let products = vec![bare(1, "same"), bare(2, "same")];
        assert!(verify_catalog(&products).is_err());
    }

    #[test]
    fn verify_rejects_duplicate_variant_code() {
        let mut product = bare(1, "one");
        let variant = ProductVariant {
            product_code: "AP X 01".to_string(),
            product_name: "Variant".to_string(),
            packing_per_box: "100 pcs/box".to_string(),
            gst_percentage: "12%".to_string(),
            hsn_code: "63079090".to_string(),
        };
        product.variants = vec![variant.clone(), variant];
        assert!(verify_catalog(&[product]).is_err());
    }

    #[test]
    fn find_by_slug_hits_and_misses() {
        let products = vec![bare(1, "one"), bare(2, "two")];
        assert_eq!(Product::find_by_slug(&products, "two").map(|p| p.id), Some(ProductId(2)));
        assert!(Product::find_by_slug(&products, "three").is_none());
    }

    #[test]
    fn variant_serializes_with_camel_case_keys() {
        let variant = ProductVariant {
            product_code: "AP FM 01".to_string(),
            product_name: "3 Ply Face Mask with Ear Loops".to_string(),
            packing_per_box: "100 pcs/box".to_string(),
            gst_percentage: "12%".to_string(),
            hsn_code: "63079090".to_string(),
        };
        let json = serde_json::to_value(&variant).unwrap();
        assert_eq!(json["productCode"], "AP FM 01");
        assert_eq!(json["packingPerBox"], "100 pcs/box");
        assert_eq!(json["hsnCode"], "63079090");
    }
}
