use std::sync::{Arc, RwLock};

use apmed_core::DomainResult;

use crate::country::{directory, find, Country};

/// Process-wide country selection.
///
/// Cloneable handle over shared state; exactly one country is selected at
/// any time, initialized to the first directory entry. Replacement is a
/// single assignment: concurrent selections are last-write-wins. The
/// selection lives for the process and is not persisted.
#[derive(Debug, Clone)]
pub struct CountrySelectionStore {
    inner: Arc<RwLock<Country>>,
}

impl CountrySelectionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory()[0].clone())),
        }
    }

    /// Current selection. Never empty.
    pub fn selected(&self) -> Country {
        self.inner.read().expect("country selection lock poisoned").clone()
    }

    /// Replace the selection. No directory check here: callers own boundary
    /// validation (see [`select_code`](Self::select_code)).
    pub fn select(&self, country: Country) {
        *self.inner.write().expect("country selection lock poisoned") = country;
    }

    /// Replace the selection by directory code, rejecting unknown codes.
    pub fn select_code(&self, code: &str) -> DomainResult<Country> {
        let country = find(code)?.clone();
        self.select(country.clone());
        Ok(country)
    }
}

impl Default for CountrySelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
