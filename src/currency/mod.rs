//! Currency lookup provider
//!
//! Builds a location → currency mapping from an external country catalog
//! (restcountries-shaped: each entry carries a common display name and a map
//! of currency codes; only the first listed code is used).
//!
//! The fetch happens once per form mount and is fire-and-forget relative to
//! form readiness. On any failure the provider returns a **degraded** catalog:
//! the mapping stays empty, currency derivation silently no-ops, and the only
//! trace is a logged warning. No caching across mounts, no retry.

use crate::core::error::RequestError;
use indexmap::IndexMap;
use serde::Deserialize;

/// One country entry as returned by the external catalog
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: CountryName,

    /// Currency code → details; key order as listed by the provider
    #[serde(default)]
    pub currencies: Option<IndexMap<String, serde_json::Value>>,
}

/// Name block of a country entry; only the common display name is used
#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// A selectable location paired with its derived currency code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    pub name: String,
    pub currency: String,
}

/// Location → currency mapping plus the ordered location list
///
/// `degraded` marks a catalog whose fetch failed: the mapping is empty and
/// currency fields stay visibly blank rather than stale.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    mapping: IndexMap<String, String>,
    degraded: bool,
}

impl CurrencyCatalog {
    /// An empty, non-degraded catalog (the state before the fetch completes)
    pub fn empty() -> Self {
        Self::default()
    }

    /// An empty catalog marking a failed fetch
    pub fn degraded() -> Self {
        Self {
            mapping: IndexMap::new(),
            degraded: true,
        }
    }

    /// Build the catalog from a list of country entries
    ///
    /// Countries with no currency entry map to the empty string so they still
    /// appear in the selector.
    pub fn from_countries(countries: Vec<Country>) -> Self {
        let mut mapping = IndexMap::with_capacity(countries.len());

        for country in countries {
            let currency = country
                .currencies
                .as_ref()
                .and_then(|c| c.keys().next().cloned())
                .unwrap_or_default();
            mapping.insert(country.name.common, currency);
        }

        Self {
            mapping,
            degraded: false,
        }
    }

    /// Fetch the catalog from the external provider
    ///
    /// Never fails: a transport or decode error logs a warning and yields a
    /// degraded catalog.
    pub async fn fetch(http: &reqwest::Client, url: &str) -> Self {
        match Self::try_fetch(http, url).await {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(error = %err, url, "currency catalog fetch failed, degrading");
                Self::degraded()
            }
        }
    }

    async fn try_fetch(http: &reqwest::Client, url: &str) -> Result<Self, RequestError> {
        let response = http.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Rejected { status, body });
        }

        let countries: Vec<Country> = response.json().await?;
        Ok(Self::from_countries(countries))
    }

    /// Look up the currency code for a location name
    pub fn currency_for(&self, location: &str) -> Option<&str> {
        self.mapping.get(location).map(String::as_str)
    }

    /// The selectable locations, in the provider's listing order
    pub fn locations(&self) -> Vec<LocationEntry> {
        self.mapping
            .iter()
            .map(|(name, currency)| LocationEntry {
                name: name.clone(),
                currency: currency.clone(),
            })
            .collect()
    }

    /// Whether the catalog fetch failed and derivation is disabled
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
