use cookbook_catalog::{implementing_series_for_nfts, Difficulty};
use serde_json::json;

/// The built-in series entry constructs and carries the catalog data
/// field-for-field
#[test]
fn test_series_entry_constructs_with_catalog_data() {
    let recipe = implementing_series_for_nfts().unwrap();

    assert_eq!(recipe.slug(), "implementing-series-for-nfts");
    assert_eq!(recipe.title(), "Implementing Series for NFTs");
    assert_eq!(recipe.created_at().to_string(), "2022-10-14");
    assert_eq!(recipe.author(), "Flow Blockchain");
    assert_eq!(
        recipe.playground_link(),
        Some("https://play.onflow.org/a7d190b6-e0f1-4acc-b34c-f37b39fbab33?type=tx&id=c252ea40-397c-43b0-acfb-c504a7268175&storage=none")
    );
    assert_eq!(
        recipe.excerpt(),
        "This cadence code will help you being to understand how to implement series and sets into your NFT project."
    );
    assert_eq!(recipe.filters().difficulty(), Some(Difficulty::Intermediate));
}

/// Two calls to the factory produce equal values
#[test]
fn test_series_entry_is_idempotent() {
    let first = implementing_series_for_nfts().unwrap();
    let second = implementing_series_for_nfts().unwrap();
    assert_eq!(first, second);
}

/// The serialised entry uses the canonical catalog field names, the shape a
/// hosting site generator consumes
#[test]
fn test_series_entry_serialises_with_catalog_field_names() {
    let recipe = implementing_series_for_nfts().unwrap();
    let value = serde_json::to_value(&recipe).unwrap();

    assert_eq!(
        value,
        json!({
            "slug": "implementing-series-for-nfts",
            "title": "Implementing Series for NFTs",
            "createdAt": "2022-10-14",
            "author": "Flow Blockchain",
            "playgroundLink": "https://play.onflow.org/a7d190b6-e0f1-4acc-b34c-f37b39fbab33?type=tx&id=c252ea40-397c-43b0-acfb-c504a7268175&storage=none",
            "excerpt": "This cadence code will help you being to understand how to implement series and sets into your NFT project.",
            "filters": { "difficulty": "intermediate" }
        })
    );
}

/// Entries without optional fields leave them out of the serialised form
#[test]
fn test_absent_optional_fields_are_omitted_from_serialisation() {
    let recipe = cookbook_catalog::RecipeDescriptor::builder()
        .slug("series-overview")
        .title("Series Overview")
        .created_at(2022, 10, 14)
        .author("Flow Blockchain")
        .excerpt("A short tour of series and sets.")
        .build()
        .unwrap();

    let value = serde_json::to_value(&recipe).unwrap();
    assert_eq!(
        value,
        json!({
            "slug": "series-overview",
            "title": "Series Overview",
            "createdAt": "2022-10-14",
            "author": "Flow Blockchain",
            "excerpt": "A short tour of series and sets.",
            "filters": {}
        })
    );
}
