//! Spreadshirt shop API response types for the `productTypes` endpoints.
//!
//! Requests are made with `mediaType=json`. Ids are JSON strings. Each
//! product type carries a `resources` array of image links; the first entry
//! is the default preview. Fields the picker does not use (sizes,
//! appearances, print areas, ...) are ignored during deserialization.

use serde::Deserialize;

/// Response from `GET /shops/{shopId}/productTypes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypesResponse {
    /// Total number of product types in the shop, across all pages.
    pub count: u64,

    #[serde(default)]
    pub product_types: Vec<RawProductType>,
}

/// A single product type, from the list endpoint or
/// `GET /shops/{shopId}/productTypes/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProductType {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Canonical API URL of this product type.
    #[serde(default)]
    pub href: String,

    /// Image resources. Absent and empty are treated alike.
    #[serde(default)]
    pub resources: Vec<RawResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawResource {
    pub href: String,
}
