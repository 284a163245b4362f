use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::model::{Filters, RecipeDescriptor};

/// Builder for assembling and validating a [`RecipeDescriptor`].
///
/// Setters collect raw values; every field contract is checked in
/// [`build`](Self::build), so a descriptor that exists is always valid.
#[derive(Debug, Default)]
pub struct RecipeDescriptorBuilder {
    slug: Option<String>,
    title: Option<String>,
    created_at: Option<(i32, u32, u32)>,
    author: Option<String>,
    playground_link: Option<String>,
    excerpt: Option<String>,
    difficulty: Option<String>,
}

impl RecipeDescriptorBuilder {
    /// Set the entry's slug: its unique, URL-safe identifier
    ///
    /// # Example
    /// ```
    /// use cookbook_catalog::RecipeDescriptor;
    ///
    /// let builder = RecipeDescriptor::builder()
    ///     .slug("implementing-series-for-nfts");
    /// ```
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set the human-readable display name
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the publication date from raw calendar components
    ///
    /// The components are validated as a whole in [`build`](Self::build);
    /// a date like February 30th is rejected there.
    ///
    /// # Example
    /// ```
    /// use cookbook_catalog::RecipeDescriptor;
    ///
    /// let builder = RecipeDescriptor::builder()
    ///     .created_at(2022, 10, 14);
    /// ```
    pub fn created_at(mut self, year: i32, month: u32, day: u32) -> Self {
        self.created_at = Some((year, month, day));
        self
    }

    /// Set the attribution line
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the link to an external playground
    ///
    /// The link is optional; when set it must be a syntactically valid URL.
    /// The stored value is the string passed here, not a normalised form.
    pub fn playground_link(mut self, link: impl Into<String>) -> Self {
        self.playground_link = Some(link.into());
        self
    }

    /// Set the short summary shown in listings
    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set the `difficulty` filter from its raw label
    ///
    /// The label is optional; when set it must be one of `beginner`,
    /// `intermediate` or `advanced`.
    ///
    /// # Example
    /// ```
    /// use cookbook_catalog::RecipeDescriptor;
    ///
    /// let builder = RecipeDescriptor::builder()
    ///     .difficulty("intermediate");
    /// ```
    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Validate every field contract and produce the immutable descriptor
    ///
    /// Fields are checked in catalog order (slug, title, createdAt, author,
    /// playgroundLink, excerpt, difficulty), so the reported error is
    /// deterministic when several fields are invalid.
    ///
    /// # Errors
    /// Returns [`ValidationError`] if:
    /// - `slug`, `title`, `author` or `excerpt` is missing, empty or
    ///   whitespace
    /// - `slug` is not lowercase-with-hyphens
    /// - the `created_at` components are missing or form no real date
    /// - `playground_link` is set but not a syntactically valid URL
    /// - `difficulty` is set but outside the enumeration
    ///
    /// # Example
    /// ```
    /// use cookbook_catalog::RecipeDescriptor;
    ///
    /// # fn main() -> Result<(), cookbook_catalog::ValidationError> {
    /// let recipe = RecipeDescriptor::builder()
    ///     .slug("series-overview")
    ///     .title("Series Overview")
    ///     .created_at(2022, 10, 14)
    ///     .author("Flow Blockchain")
    ///     .excerpt("A short tour of series and sets.")
    ///     .difficulty("beginner")
    ///     .build()?;
    ///
    /// assert_eq!(recipe.slug(), "series-overview");
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<RecipeDescriptor, ValidationError> {
        let slug = required(self.slug, "slug")?;
        validate_slug(&slug)?;

        let title = required(self.title, "title")?;

        let (year, month, day) = self
            .created_at
            .ok_or(ValidationError::MissingField { field: "createdAt" })?;
        let created_at = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ValidationError::InvalidDate { year, month, day })?;

        let author = required(self.author, "author")?;

        if let Some(link) = &self.playground_link {
            validate_url("playgroundLink", link)?;
        }

        let excerpt = required(self.excerpt, "excerpt")?;

        let filters = match self.difficulty {
            Some(value) => Filters::with_difficulty(value.parse()?),
            None => Filters::default(),
        };

        Ok(RecipeDescriptor {
            slug,
            title,
            created_at,
            author,
            playground_link: self.playground_link,
            excerpt,
            filters,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let is_valid = !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if is_valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidSlug {
            value: slug.to_string(),
        })
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    // The parsed Url is dropped: Url normalises its input, and accessors must
    // return the string the entry was defined with.
    url::Url::parse(value).map_err(|source| ValidationError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })?;
    Ok(())
}
