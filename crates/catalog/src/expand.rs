use apmed_core::{contains_any_ci, contains_ci};

use crate::category::CategoryKind;
use crate::product::{Product, ProductId, ProductVariant};

/// N95 variants sold as standalone cards. Other N95 variants exist in the
/// catalog records but are not offered individually.
const N95_VARIANT_CODES: [&str; 3] = ["AP N95 01", "AP N95 02", "AP N95 03"];

/// Shoe-cover/legging variants sold as standalone cards.
const SHOE_VARIANT_CODES: [&str; 3] = ["AP SC 01", "AP SC 02", "AP SL 01"];

/// One card in a rendered category view: a product as-is, or a single
/// variant displayed under its own name.
///
/// Display items borrow from the catalog and are recomputed per request;
/// they carry no identity beyond [`DisplayItem::key`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayItem<'a> {
    pub product: &'a Product,
    pub variant: Option<&'a ProductVariant>,
}

/// Stable identity of a display item within one rendered list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayKey<'a> {
    pub product: ProductId,
    pub variant_code: Option<&'a str>,
}

impl<'a> DisplayItem<'a> {
    fn whole(product: &'a Product) -> Self {
        Self { product, variant: None }
    }

    fn of_variant(product: &'a Product, variant: &'a ProductVariant) -> Self {
        Self { product, variant: Some(variant) }
    }

    /// Name shown on the card: the variant's name when expanded, the
    /// product's otherwise.
    pub fn display_name(&self) -> &'a str {
        match self.variant {
            Some(variant) => &variant.product_name,
            None => &self.product.name,
        }
    }

    pub fn key(&self) -> DisplayKey<'a> {
        DisplayKey {
            product: self.product.id,
            variant_code: self.variant.map(|v| v.product_code.as_str()),
        }
    }
}

impl core::fmt::Display for DisplayKey<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.variant_code {
            Some(code) => write!(f, "{}/{}", self.product, code),
            None => write!(f, "{}", self.product),
        }
    }
}

/// Turn a classified product list into the final card sequence.
///
/// Three views expand matching products into one card per variant
/// (`face-masks`, `surgical-caps`, `shoe-covers`), each with its own
/// inclusion rules. Every other view passes the classifier output through
/// one-card-per-product.
pub fn expand<'a>(kind: CategoryKind, products: &[&'a Product]) -> Vec<DisplayItem<'a>> {
    match kind {
        CategoryKind::FaceMasks => products.iter().copied().flat_map(face_mask_items).collect(),
        CategoryKind::SurgicalCaps => products.iter().copied().flat_map(cap_items).collect(),
        CategoryKind::ShoeCovers => products.iter().copied().flat_map(shoe_items).collect(),
        _ => products.iter().copied().map(DisplayItem::whole).collect(),
    }
}

/// Face-mask cards for one product.
///
/// Caps/hoods and goggles never show under face masks, whatever else they
/// match. N95 products only expose the allow-listed variants; a product
/// whose variants all get filtered out yields no cards at all (no fallback
/// to a single product card).
fn face_mask_items<'a>(product: &'a Product) -> Vec<DisplayItem<'a>> {
    if contains_any_ci(&product.name, &["cap", "hood"]) {
        return Vec::new();
    }
    if contains_ci(&product.name, "goggle") || contains_ci(&product.category, "goggle") {
        return Vec::new();
    }

    let is_mask =
        contains_ci(&product.name, "mask") || contains_ci(&product.category, "mask");
    if !is_mask || product.variants.is_empty() {
        return vec![DisplayItem::whole(product)];
    }

    let is_n95 = contains_ci(&product.name, "n95")
        || product.variants.iter().any(|v| contains_ci(&v.product_name, "n95"));

    product
        .variants
        .iter()
        .filter(|v| !is_n95 || N95_VARIANT_CODES.contains(&v.product_code.as_str()))
        .filter(|v| !contains_ci(&v.product_name, "goggle"))
        .map(|v| DisplayItem::of_variant(product, v))
        .collect()
}

/// Surgical-cap cards for one product: cap products expand every variant,
/// everything else stays a single card.
fn cap_items<'a>(product: &'a Product) -> Vec<DisplayItem<'a>> {
    let is_cap =
        contains_ci(&product.name, "cap") || contains_ci(&product.category, "cap");
    if !is_cap || product.variants.is_empty() {
        return vec![DisplayItem::whole(product)];
    }

    product
        .variants
        .iter()
        .map(|v| DisplayItem::of_variant(product, v))
        .collect()
}

/// Shoe-cover cards for one product.
///
/// Unlike the other two expanding views, a matching product without
/// variants is skipped outright: only the allow-listed variant codes are
/// sold standalone.
fn shoe_items<'a>(product: &'a Product) -> Vec<DisplayItem<'a>> {
    let is_shoe = contains_ci(&product.name, "shoe")
        || contains_ci(&product.category, "shoe")
        || contains_ci(&product.name, "legging");
    if !is_shoe {
        return vec![DisplayItem::whole(product)];
    }

    product
        .variants
        .iter()
        .filter(|v| SHOE_VARIANT_CODES.contains(&v.product_code.as_str()))
        .map(|v| DisplayItem::of_variant(product, v))
        .collect()
}
