//! a11ytips core
//!
//! Platform-agnostic domain logic for the a11ytips teaching site: the
//! theme state machine and its environment-sync observer, the design-token
//! palettes, and the tip catalog with its filtering rules. No DOM and no
//! platform dependencies live here.

pub mod catalog;
pub mod controller;
pub mod filter;
pub mod theme;
pub mod tip;
pub mod tokens;

// Re-export commonly used types
pub use catalog::TipCatalog;
pub use controller::{ThemeController, ThemeEnvironment, initial_mode};
pub use filter::{CategoryFilter, DifficultyFilter, TipFilter};
pub use theme::ThemeMode;
pub use tip::{Category, Difficulty, Resource, ResourceKind, Tip, wcag_quickref_url};
pub use tokens::Palette;

/// Trait for abstracting catalog loading operations.
/// Platform-specific implementations should provide this.
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the tip records from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be loaded or parsed.
    fn load_catalog(&self) -> Result<TipCatalog, Self::Error>;
}

/// Catalog validation failure.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate tip id: {0}")]
    DuplicateId(String),
}

/// Loads and validates the catalog through a [`CatalogLoader`].
pub struct TipStore<L: CatalogLoader> {
    loader: L,
}

impl<L: CatalogLoader> TipStore<L> {
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load the catalog and validate it: record ids route detail pages,
    /// so they must be unique.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or two records share
    /// an id.
    pub fn load(&self) -> anyhow::Result<TipCatalog>
    where
        L::Error: Into<anyhow::Error>,
    {
        let catalog = self.loader.load_catalog().map_err(Into::into)?;
        let mut seen = std::collections::HashSet::new();
        for tip in catalog.tips() {
            if !seen.insert(tip.id.as_str()) {
                return Err(CatalogError::DuplicateId(tip.id.clone()).into());
            }
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn record(id: &str) -> Tip {
        Tip {
            id: id.to_string(),
            title: "Provide alternative text".to_string(),
            category: Category::Images,
            difficulty: Difficulty::Beginner,
            description: "d".to_string(),
            bad_code: "b".to_string(),
            good_code: "g".to_string(),
            explanation: "e".to_string(),
            wcag_criteria: Vec::new(),
            tags: Vec::new(),
            resources: Vec::new(),
            created: "2025-06-01".to_string(),
            updated: "2025-06-01".to_string(),
        }
    }

    #[derive(Clone, Default)]
    struct FixtureLoader {
        tips: Vec<Tip>,
    }

    impl CatalogLoader for FixtureLoader {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<TipCatalog, Self::Error> {
            Ok(TipCatalog::new(self.tips.clone()))
        }
    }

    #[test]
    fn store_loads_a_valid_catalog() {
        let store = TipStore::new(FixtureLoader {
            tips: vec![record("alt-text"), record("headings")],
        });
        let catalog = store.load().expect("catalog loads");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.tip_by_id("alt-text").is_some());
    }

    #[test]
    fn store_rejects_duplicate_ids() {
        let store = TipStore::new(FixtureLoader {
            tips: vec![record("alt-text"), record("alt-text")],
        });
        let err = store.load().expect_err("duplicate ids should fail");
        assert!(format!("{err}").contains("duplicate tip id"));
    }
}
