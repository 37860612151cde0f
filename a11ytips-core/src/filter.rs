//! Listing filters: category, difficulty, and free-text search combined
//! as a conjunction over the in-memory catalog.

use crate::tip::{Category, Difficulty, Tip};

/// Value of the category select: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse the select-control value; anything that is not a known
    /// category (including `"all"`) selects everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Category::parse(raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

/// Value of the difficulty select: everything, or one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Difficulty::parse(raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(difficulty) => difficulty.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == difficulty,
        }
    }
}

/// The listing filter. A tip is shown when all three predicates hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipFilter {
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub query: String,
}

impl TipFilter {
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        Self {
            category: CategoryFilter::Only(category),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All
            && self.difficulty == DifficultyFilter::All
            && self.query.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, tip: &Tip) -> bool {
        self.category.matches(tip.category)
            && self.difficulty.matches(tip.difficulty)
            && self.matches_query(tip)
    }

    /// Case-insensitive substring search over title, description, and
    /// tags. A blank query matches everything.
    fn matches_query(&self, tip: &Tip) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        tip.title.to_lowercase().contains(&needle)
            || tip.description.to_lowercase().contains(&needle)
            || tip
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Tips passing the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, tips: &'a [Tip]) -> Vec<&'a Tip> {
        tips.iter().filter(|tip| self.matches(tip)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tip(id: &str, category: Category, difficulty: Difficulty, tags: &[&str]) -> Tip {
        Tip {
            id: id.to_string(),
            title: format!("Use {id} correctly"),
            category,
            difficulty,
            description: format!("How to handle {id} for assistive technology."),
            bad_code: String::new(),
            good_code: String::new(),
            explanation: String::new(),
            wcag_criteria: Vec::new(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            resources: Vec::new(),
            created: "2025-06-01".to_string(),
            updated: "2025-06-01".to_string(),
        }
    }

    fn tips() -> Vec<Tip> {
        vec![
            tip("buttons", Category::Html, Difficulty::Beginner, &["semantics"]),
            tip("alt text", Category::Images, Difficulty::Beginner, &["alt"]),
            tip("focus order", Category::Keyboard, Difficulty::Advanced, &["tabindex", "focus"]),
        ]
    }

    #[test]
    fn default_filter_matches_everything() {
        let tips = tips();
        let filter = TipFilter::default();
        assert!(filter.is_unfiltered());
        assert_eq!(filter.apply(&tips).len(), tips.len());
    }

    #[test]
    fn category_narrows_the_listing() {
        let tips = tips();
        let filter = TipFilter::for_category(Category::Images);
        let visible = filter.apply(&tips);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "alt text");
    }

    #[test]
    fn difficulty_and_category_combine_as_conjunction() {
        let tips = tips();
        let filter = TipFilter {
            category: CategoryFilter::Only(Category::Html),
            difficulty: DifficultyFilter::Only(Difficulty::Advanced),
            query: String::new(),
        };
        assert!(filter.apply(&tips).is_empty());
    }

    #[test]
    fn query_searches_title_description_and_tags() {
        let tips = tips();
        let by_title = TipFilter {
            query: "BUTTONS".to_string(),
            ..TipFilter::default()
        };
        assert_eq!(by_title.apply(&tips).len(), 1);

        let by_description = TipFilter {
            query: "assistive".to_string(),
            ..TipFilter::default()
        };
        assert_eq!(by_description.apply(&tips).len(), tips.len());

        let by_tag = TipFilter {
            query: "tabindex".to_string(),
            ..TipFilter::default()
        };
        assert_eq!(by_tag.apply(&tips)[0].id, "focus order");
    }

    #[test]
    fn blank_and_whitespace_queries_match_everything() {
        let tips = tips();
        let filter = TipFilter {
            query: "   ".to_string(),
            ..TipFilter::default()
        };
        assert_eq!(filter.apply(&tips).len(), tips.len());
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Images"),
            CategoryFilter::Only(Category::Images)
        );
        assert_eq!(CategoryFilter::parse("nonsense"), CategoryFilter::All);
        assert_eq!(CategoryFilter::Only(Category::Images).value(), "Images");

        assert_eq!(DifficultyFilter::parse("all"), DifficultyFilter::All);
        assert_eq!(
            DifficultyFilter::parse("Advanced"),
            DifficultyFilter::Only(Difficulty::Advanced)
        );
        assert_eq!(DifficultyFilter::All.value(), "all");
    }

    #[test]
    fn clear_resets_to_the_unfiltered_state() {
        let mut filter = TipFilter {
            category: CategoryFilter::Only(Category::Css),
            difficulty: DifficultyFilter::Only(Difficulty::Beginner),
            query: "contrast".to_string(),
        };
        filter.clear();
        assert!(filter.is_unfiltered());
    }
}
