use serde::{Deserialize, Serialize};

/// Topic a tip belongs to. Closed set; the wire strings are the display
/// names used in the data file and the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    JavaScript,
    #[serde(rename = "ARIA")]
    Aria,
    Forms,
    Images,
    Navigation,
    Semantics,
    Color,
    Keyboard,
}

impl Category {
    pub const ALL: [Self; 10] = [
        Self::Html,
        Self::Css,
        Self::JavaScript,
        Self::Aria,
        Self::Forms,
        Self::Images,
        Self::Navigation,
        Self::Semantics,
        Self::Color,
        Self::Keyboard,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::JavaScript => "JavaScript",
            Self::Aria => "ARIA",
            Self::Forms => "Forms",
            Self::Images => "Images",
            Self::Navigation => "Navigation",
            Self::Semantics => "Semantics",
            Self::Color => "Color",
            Self::Keyboard => "Keyboard",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == raw)
    }

    /// Decorative glyph shown on the category browse cards.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Html => "🏗️",
            Self::Css => "🎨",
            Self::JavaScript => "⚙️",
            Self::Aria => "🔊",
            Self::Forms => "📝",
            Self::Images => "🖼️",
            Self::Navigation => "🧭",
            Self::Semantics => "🧩",
            Self::Color => "🌈",
            Self::Keyboard => "⌨️",
        }
    }

    /// Translucent tint behind the category browse cards.
    #[must_use]
    pub const fn tint(self) -> &'static str {
        match self {
            Self::Html => "rgba(229,77,38,0.2)",
            Self::Css => "rgba(38,77,228,0.2)",
            Self::JavaScript => "rgba(240,219,79,0.2)",
            Self::Aria => "rgba(0,121,107,0.2)",
            Self::Forms => "rgba(156,39,176,0.2)",
            Self::Images => "rgba(121,85,72,0.2)",
            Self::Navigation => "rgba(33,150,243,0.2)",
            Self::Semantics => "rgba(76,175,80,0.2)",
            Self::Color => "rgba(244,67,54,0.2)",
            Self::Keyboard => "rgba(255,152,0,0.2)",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reader level a tip targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == raw)
    }

    /// Translation key suffix, e.g. `difficulty.beginner`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Badge class for the listing cards and the detail page.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Beginner => "badge-success",
            Self::Intermediate => "badge-warning",
            Self::Advanced => "badge-danger",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Video,
    Tool,
    Documentation,
}

/// External reading linked from a tip's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// One accessibility tip: a bad-code/good-code pair with explanation,
/// WCAG references, and the metadata the filter runs over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub description: String,
    pub bad_code: String,
    pub good_code: String,
    pub explanation: String,
    #[serde(default)]
    pub wcag_criteria: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    pub created: String,
    pub updated: String,
}

/// Quickref anchor for a WCAG criterion string such as
/// `"1.1.1 Non-text Content"` (the number is the anchor).
#[must_use]
pub fn wcag_quickref_url(criterion: &str) -> String {
    let anchor = criterion
        .split_whitespace()
        .next()
        .unwrap_or(criterion)
        .to_lowercase();
    format!("https://www.w3.org/WAI/WCAG21/quickref/#{anchor}")
}
