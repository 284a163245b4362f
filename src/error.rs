use thiserror::Error;

/// Errors that can occur while constructing or aggregating catalog entries
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was never supplied
    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },

    /// A required field was supplied but is empty or whitespace
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    /// Slug does not follow the lowercase-with-hyphens convention
    #[error("invalid slug `{value}`: expected lowercase letters, digits and single hyphens")]
    InvalidSlug { value: String },

    /// The createdAt components do not form a real calendar date
    #[error("invalid calendar date {year:04}-{month:02}-{day:02} for field `createdAt`")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Difficulty value outside the closed enumeration
    #[error("unknown difficulty `{value}`: expected `beginner`, `intermediate` or `advanced`")]
    UnknownDifficulty { value: String },

    /// URL field present but not syntactically valid
    #[error("invalid URL `{value}` for field `{field}`: {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },

    /// Two catalog entries share a slug
    #[error("duplicate slug `{slug}`: catalog entries must have unique slugs")]
    DuplicateSlug { slug: String },
}
