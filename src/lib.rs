//! Typed, validated catalog entries for cookbook tutorial recipes.
//!
//! Each entry is a [`RecipeDescriptor`]: an immutable record of the metadata
//! a hosting site needs to render a listing (title, excerpt, author, date,
//! difficulty badge) and link out to an external playground. Entries are
//! defined in code and validated when constructed; a [`Catalog`] aggregates
//! them by slug for lookup and listing order.
//!
//! ```
//! use cookbook_catalog::Catalog;
//!
//! # fn main() -> Result<(), cookbook_catalog::ValidationError> {
//! let catalog = Catalog::builtin()?;
//! let recipe = catalog.get("implementing-series-for-nfts").unwrap();
//! assert_eq!(recipe.title(), "Implementing Series for NFTs");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod entries;
pub mod error;
pub mod model;

pub use builder::RecipeDescriptorBuilder;
pub use catalog::Catalog;
pub use entries::implementing_series_for_nfts;
pub use error::ValidationError;
pub use model::{Difficulty, Filters, RecipeDescriptor};
