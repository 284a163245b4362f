use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::builder::RecipeDescriptorBuilder;
use crate::error::ValidationError;

/// Audience skill level for a recipe, rendered by hosting sites as the
/// listing badge. Ordering follows skill: beginner < intermediate < advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Canonical lowercase label, as stored in the catalog data
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(ValidationError::UnknownDifficulty {
                value: other.to_string(),
            }),
        }
    }
}

/// Filter values attached to a catalog entry.
///
/// `difficulty` is the only recognised filter; unknown filter names are
/// unrepresentable rather than checked at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
}

impl Filters {
    /// Filter set carrying only a difficulty badge
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Filters {
            difficulty: Some(difficulty),
        }
    }

    /// Difficulty badge, when the entry declares one
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

/// One catalog entry for a tutorial recipe.
///
/// A descriptor is immutable once built: fields are private, there are no
/// setters, and every accessor returns exactly the value the entry was built
/// with. Construction goes through [`RecipeDescriptor::builder`], which
/// checks all field contracts before the value exists.
///
/// Serialisation uses the catalog's canonical field names (`createdAt`,
/// `playgroundLink`, ...), the names hosting site generators consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDescriptor {
    pub(crate) slug: String,
    pub(crate) title: String,
    pub(crate) created_at: NaiveDate,
    pub(crate) author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) playground_link: Option<String>,
    pub(crate) excerpt: String,
    pub(crate) filters: Filters,
}

impl RecipeDescriptor {
    /// Start building a descriptor. Validation happens in
    /// [`RecipeDescriptorBuilder::build`].
    pub fn builder() -> RecipeDescriptorBuilder {
        RecipeDescriptorBuilder::default()
    }

    /// Unique identifier of the entry within the catalog
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Human-readable display name
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Publication date, used for listing order
    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// Attribution line
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Link to an external playground, when the entry has one
    pub fn playground_link(&self) -> Option<&str> {
        self.playground_link.as_deref()
    }

    /// Short summary shown in listings
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Filter values for the entry
    pub fn filters(&self) -> &Filters {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_labels_round_trip() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            assert_eq!(difficulty.as_str().parse::<Difficulty>().unwrap(), difficulty);
            assert_eq!(difficulty.to_string(), difficulty.as_str());
        }
    }

    #[test]
    fn test_difficulty_rejects_values_outside_enumeration() {
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnknownDifficulty { ref value } if value == "expert"
        ));
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn test_difficulty_labels_are_case_sensitive() {
        assert!("Intermediate".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_orders_by_skill() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn test_filters_default_has_no_difficulty() {
        assert_eq!(Filters::default().difficulty(), None);
    }

    #[test]
    fn test_filters_with_difficulty() {
        let filters = Filters::with_difficulty(Difficulty::Advanced);
        assert_eq!(filters.difficulty(), Some(Difficulty::Advanced));
    }

    #[test]
    fn test_difficulty_serialises_as_lowercase_label() {
        let json = serde_json::to_value(Difficulty::Intermediate).unwrap();
        assert_eq!(json, serde_json::json!("intermediate"));
    }
}
