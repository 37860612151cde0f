//! Web-specific catalog loading from embedded static assets.

use a11ytips_core::{CatalogLoader, TipCatalog, TipStore};
use once_cell::sync::Lazy;

/// Loads the tip records embedded in the binary at build time.
pub struct WebCatalogLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogLoader for WebCatalogLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<TipCatalog, Self::Error> {
        let json = include_str!("../static/assets/data/tips.json");
        TipCatalog::from_json(json).map_err(WebDataError::Json)
    }
}

/// Load and validate the embedded catalog.
///
/// # Errors
///
/// Returns an error when the embedded JSON is malformed or contains
/// duplicate record ids.
pub fn load_embedded_catalog() -> anyhow::Result<TipCatalog> {
    TipStore::new(WebCatalogLoader).load()
}

static CATALOG: Lazy<TipCatalog> = Lazy::new(|| {
    load_embedded_catalog().unwrap_or_else(|err| {
        log::error!("tip catalog failed to load: {err}");
        TipCatalog::empty()
    })
});

/// The embedded catalog, loaded and validated once per session.
#[must_use]
pub fn catalog() -> &'static TipCatalog {
    &CATALOG
}
