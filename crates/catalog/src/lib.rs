//! Products/catalog domain module.
//!
//! This crate contains the product catalog and the category views over it,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Category membership and variant expansion are recomputed on
//! every call; the catalog is small and the views are cheap.

pub mod category;
pub mod classify;
pub mod data;
pub mod expand;
pub mod product;

pub use category::CategoryKind;
pub use classify::classify;
pub use expand::{expand, DisplayItem, DisplayKey};
pub use product::{Product, ProductId, ProductVariant};
