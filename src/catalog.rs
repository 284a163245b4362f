use std::collections::BTreeMap;

use log::{debug, error};
use serde::Serialize;

use crate::entries;
use crate::error::ValidationError;
use crate::model::RecipeDescriptor;

/// Slug-keyed collection of recipe descriptors.
///
/// The catalog is append-only while a host loads entries at startup and
/// read-only afterwards: there is no removal and no mutable access to a
/// stored descriptor. Any number of concurrent readers can share it without
/// locking.
///
/// Serialises as a slug-keyed map, the shape a site generator consumes for
/// its listing pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, RecipeDescriptor>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every built-in entry.
    ///
    /// This is the aggregation step a hosting site runs once at startup. A
    /// [`ValidationError`] from any entry propagates to the caller so a
    /// malformed definition fails the load instead of silently dropping the
    /// entry.
    pub fn builtin() -> Result<Self, ValidationError> {
        let mut catalog = Catalog::new();
        catalog.insert(entries::implementing_series_for_nfts()?)?;
        Ok(catalog)
    }

    /// Register a descriptor under its slug.
    ///
    /// Slugs are unique across the catalog: re-registering a slug is
    /// rejected and the existing entry kept.
    pub fn insert(&mut self, descriptor: RecipeDescriptor) -> Result<(), ValidationError> {
        let slug = descriptor.slug().to_string();
        if self.entries.contains_key(&slug) {
            error!("duplicate catalog slug: {}", slug);
            return Err(ValidationError::DuplicateSlug { slug });
        }
        debug!("registered recipe entry: {}", slug);
        self.entries.insert(slug, descriptor);
        Ok(())
    }

    /// Look up an entry by slug
    pub fn get(&self, slug: &str) -> Option<&RecipeDescriptor> {
        self.entries.get(slug)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in slug order
    pub fn iter(&self) -> impl Iterator<Item = &RecipeDescriptor> {
        self.entries.values()
    }

    /// Entries in listing order: newest first, ties broken by slug
    pub fn sorted_by_date(&self) -> Vec<&RecipeDescriptor> {
        let mut sorted: Vec<&RecipeDescriptor> = self.entries.values().collect();
        sorted.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.slug().cmp(b.slug()))
        });
        sorted
    }
}
