use crate::tip::{Category, Difficulty, Tip};

/// In-memory collection of tip records, kept in authoring order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipCatalog {
    tips: Vec<Tip>,
}

impl TipCatalog {
    #[must_use]
    pub const fn new(tips: Vec<Tip>) -> Self {
        Self { tips }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { tips: Vec::new() }
    }

    /// Parse a catalog from a JSON array of tip records.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or a record fails to
    /// deserialize.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            tips: serde_json::from_str(json)?,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    #[must_use]
    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    #[must_use]
    pub fn tip_by_id(&self, id: &str) -> Option<&Tip> {
        self.tips.iter().find(|tip| tip.id == id)
    }

    /// Distinct categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for tip in &self.tips {
            if !seen.contains(&tip.category) {
                seen.push(tip.category);
            }
        }
        seen
    }

    /// Distinct difficulties in catalog order.
    #[must_use]
    pub fn difficulties(&self) -> Vec<Difficulty> {
        let mut seen = Vec::new();
        for tip in &self.tips {
            if !seen.contains(&tip.difficulty) {
                seen.push(tip.difficulty);
            }
        }
        seen
    }

    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        self.tips
            .iter()
            .filter(|tip| tip.category == category)
            .count()
    }

    /// Distinct categories paired with their record counts, in catalog
    /// order. Drives the category browse page.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.categories()
            .into_iter()
            .map(|category| (category, self.count_in(category)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(id: &str, category: Category, difficulty: Difficulty) -> Tip {
        Tip {
            id: id.to_string(),
            title: format!("tip {id}"),
            category,
            difficulty,
            description: String::new(),
            bad_code: String::new(),
            good_code: String::new(),
            explanation: String::new(),
            wcag_criteria: Vec::new(),
            tags: Vec::new(),
            resources: Vec::new(),
            created: "2025-06-01".to_string(),
            updated: "2025-06-01".to_string(),
        }
    }

    fn sample() -> TipCatalog {
        TipCatalog::new(vec![
            fixture("one", Category::Html, Difficulty::Beginner),
            fixture("two", Category::Images, Difficulty::Beginner),
            fixture("three", Category::Html, Difficulty::Advanced),
        ])
    }

    #[test]
    fn lookup_by_id_finds_records() {
        let catalog = sample();
        assert_eq!(catalog.tip_by_id("two").map(|t| t.category), Some(Category::Images));
        assert!(catalog.tip_by_id("missing").is_none());
    }

    #[test]
    fn distinct_values_keep_catalog_order() {
        let catalog = sample();
        assert_eq!(catalog.categories(), vec![Category::Html, Category::Images]);
        assert_eq!(
            catalog.difficulties(),
            vec![Difficulty::Beginner, Difficulty::Advanced]
        );
    }

    #[test]
    fn category_counts_match_records() {
        let catalog = sample();
        assert_eq!(
            catalog.category_counts(),
            vec![(Category::Html, 2), (Category::Images, 1)]
        );
        assert_eq!(catalog.count_in(Category::Keyboard), 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TipCatalog::from_json("not json").is_err());
        assert!(TipCatalog::from_json("{}").is_err());
        let empty = TipCatalog::from_json("[]").unwrap();
        assert!(empty.is_empty());
    }
}
