use std::str::FromStr;

use serde::{Deserialize, Serialize};

use apmed_core::{contains_any_ci, contains_ci, DomainError};

use crate::product::Product;

/// The fixed set of category views over the catalog.
///
/// Each kind names a predicate over product records. Kinds are views, not
/// stored entities: a product may satisfy several predicates at once and
/// legitimately appears in each matching view (no cross-category
/// deduplication). `Miscellaneous` is the complement of the specific kinds,
/// and `All` matches everything.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    All,
    Razors,
    FaceMasks,
    SurgicalCaps,
    ShoeCovers,
    SurgicalGowns,
    MedicalCoveralls,
    Drapes,
    Sheets,
    Gloves,
    Miscellaneous,
}

/// Presentation order of the category buttons.
pub const ALL_KINDS: [CategoryKind; 11] = [
    CategoryKind::All,
    CategoryKind::Razors,
    CategoryKind::FaceMasks,
    CategoryKind::SurgicalCaps,
    CategoryKind::ShoeCovers,
    CategoryKind::SurgicalGowns,
    CategoryKind::MedicalCoveralls,
    CategoryKind::Drapes,
    CategoryKind::Sheets,
    CategoryKind::Gloves,
    CategoryKind::Miscellaneous,
];

/// The kinds with a predicate of their own. `Miscellaneous` is defined as
/// matching none of these.
const SPECIFIC_KINDS: [CategoryKind; 9] = [
    CategoryKind::Razors,
    CategoryKind::FaceMasks,
    CategoryKind::SurgicalCaps,
    CategoryKind::ShoeCovers,
    CategoryKind::SurgicalGowns,
    CategoryKind::MedicalCoveralls,
    CategoryKind::Drapes,
    CategoryKind::Sheets,
    CategoryKind::Gloves,
];

impl CategoryKind {
    /// Stable key used in URLs and wire payloads.
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Razors => "razors",
            Self::FaceMasks => "face-masks",
            Self::SurgicalCaps => "surgical-caps",
            Self::ShoeCovers => "shoe-covers",
            Self::SurgicalGowns => "surgical-gowns",
            Self::MedicalCoveralls => "medical-coveralls",
            Self::Drapes => "drapes",
            Self::Sheets => "sheets",
            Self::Gloves => "gloves",
            Self::Miscellaneous => "miscellaneous",
        }
    }

    /// English display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Razors => "Razors",
            Self::FaceMasks => "Face Masks",
            Self::SurgicalCaps => "Surgical Caps",
            Self::ShoeCovers => "Shoe Covers",
            Self::SurgicalGowns => "Surgical Gowns",
            Self::MedicalCoveralls => "Medical Coveralls",
            Self::Drapes => "Drapes",
            Self::Sheets => "Sheets",
            Self::Gloves => "Gloves",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Category membership predicate.
    ///
    /// Matching is case-insensitive substring matching against the product's
    /// free-text `name` and `category` fields. Overlaps between kinds are
    /// intended behavior: a bouffant cap matches `face-masks` by category
    /// and `surgical-caps` by name, and shows under both.
    pub fn matches(self, product: &Product) -> bool {
        let name = product.name.as_str();
        let category = product.category.as_str();

        match self {
            Self::All => true,
            Self::Razors => contains_ci(name, "razor"),
            Self::FaceMasks => contains_ci(name, "mask") || contains_ci(category, "masks"),
            Self::SurgicalCaps => contains_ci(name, "cap"),
            Self::ShoeCovers => contains_ci(name, "shoe cover") || contains_ci(name, "shoe"),
            Self::SurgicalGowns => contains_ci(name, "gown"),
            Self::MedicalCoveralls => {
                contains_any_ci(name, &["coverall", "labcoat", "scrub", "scrub suit"])
            }
            Self::Drapes => {
                let categorized =
                    contains_any_ci(category, &["drapes", "linens", "underpads"]);
                !contains_ci(name, "wrap")
                    && (contains_ci(name, "drape")
                        || categorized
                        || (contains_any_ci(name, &["pack", "kit"]) && categorized))
            }
            Self::Sheets => {
                contains_any_ci(name, &["sheet", "underpad", "wrap"])
                    && !contains_ci(name, "gown")
            }
            Self::Gloves => contains_ci(name, "glove"),
            Self::Miscellaneous => !SPECIFIC_KINDS.iter().any(|kind| kind.matches(product)),
        }
    }
}

impl core::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryKind {
    type Err = DomainError;

    /// Parse a category key. Unrecognized keys are rejected; the UI is
    /// driven by a fixed button list, so anything else is a caller error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| DomainError::invalid_category(s))
    }
}
