use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use apmed_core::{DomainError, DomainResult};

/// A market the site is localized for.
///
/// `use_english_content` marks countries served English copy regardless of
/// their `language` field; their pages never consult translation tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    pub name: String,
    pub language: String,
    pub use_english_content: bool,
}

fn country(code: &str, name: &str, language: &str, use_english_content: bool) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        language: language.to_string(),
        use_english_content,
    }
}

/// The fixed country directory, in selector order. The first entry is the
/// default selection at startup.
pub fn directory() -> &'static [Country] {
    static DIRECTORY: OnceLock<Vec<Country>> = OnceLock::new();
    DIRECTORY
        .get_or_init(|| {
            vec![
                country("in", "India", "en", true),
                country("us", "United States", "en", true),
                country("gb", "United Kingdom", "en", true),
                country("ae", "United Arab Emirates", "en", true),
                country("de", "Germany", "de", false),
                country("fr", "France", "fr", false),
                country("jp", "Japan", "ja", false),
                country("cn", "China", "zh", false),
                country("br", "Brazil", "pt", false),
            ]
        })
        .as_slice()
}

/// Look up a directory entry by its code.
pub fn find(code: &str) -> DomainResult<&'static Country> {
    directory()
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| DomainError::unknown_country(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_leads_with_the_default_market() {
        let first = &directory()[0];
        assert_eq!(first.code, "in");
        assert!(first.use_english_content);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = directory().iter().map(|c| c.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), directory().len());
    }

    #[test]
    fn find_rejects_codes_outside_the_directory() {
        assert_eq!(find("de").unwrap().language, "de");
        match find("zz") {
            Err(DomainError::UnknownCountry(code)) => assert_eq!(code, "zz"),
            other => panic!("expected UnknownCountry, got {other:?}"),
        }
    }
}
