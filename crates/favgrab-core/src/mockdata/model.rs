//! Minimal structures for the mock-data literal. Unknown fields are ignored.

use serde::Deserialize;

/// Top-level collection: `{ categories: [ ... ] }`.
#[derive(Debug, Default, Deserialize)]
pub struct MockData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// One category; attributes beyond `sites` are not interpreted here.
#[derive(Debug, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub sites: Vec<Site>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
}
