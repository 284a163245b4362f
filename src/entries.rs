//! Built-in catalog entries.
//!
//! Each entry is a factory function producing the entry's immutable
//! descriptor. The hosting collaborator (usually through `Catalog::builtin`)
//! calls these once at startup; because the definitions live in code, a
//! validation failure here means the entry itself is wrong and must fail the
//! load step rather than be dropped.

use crate::error::ValidationError;
use crate::model::RecipeDescriptor;

/// Tutorial on implementing series and sets in an NFT project.
pub fn implementing_series_for_nfts() -> Result<RecipeDescriptor, ValidationError> {
    RecipeDescriptor::builder()
        .slug("implementing-series-for-nfts")
        .title("Implementing Series for NFTs")
        .created_at(2022, 10, 14)
        .author("Flow Blockchain")
        .playground_link(
            "https://play.onflow.org/a7d190b6-e0f1-4acc-b34c-f37b39fbab33?type=tx&id=c252ea40-397c-43b0-acfb-c504a7268175&storage=none",
        )
        .excerpt(
            "This cadence code will help you being to understand how to implement series and sets into your NFT project.",
        )
        .difficulty("intermediate")
        .build()
}
