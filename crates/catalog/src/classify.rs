use crate::category::CategoryKind;
use crate::product::Product;

/// Return the members of one category view, in catalog order.
///
/// Pure and deterministic: the same kind over the same catalog always yields
/// the same ordered subsequence. Views are computed independently, so a
/// product satisfying several predicates appears in each of those views.
pub fn classify(kind: CategoryKind, products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| kind.matches(p)).collect()
}
