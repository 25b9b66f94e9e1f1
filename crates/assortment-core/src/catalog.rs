//! Catalog records handed to the SKU picker.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A product type from the shop assortment, reshaped for the picker.
///
/// `sku` always mirrors `id`: the Spreadshirt product-type id is the value
/// stored when a product is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: String,
    /// URL of the first image resource of the product type.
    pub image: String,
    pub name: String,
    pub sku: String,
    /// Canonical API URL of the product type.
    pub external_link: String,
}

/// One entry of a reconciled preview set.
///
/// A previously selected sku either resolves to a [`CatalogRecord`] or is
/// reported as missing from the assortment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Resolved(CatalogRecord),
    Missing(String),
}

impl Preview {
    #[must_use]
    pub fn sku(&self) -> &str {
        match self {
            Preview::Resolved(record) => &record.sku,
            Preview::Missing(sku) => sku,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Preview::Missing(_))
    }
}

/// Serializes to the flat record the picker renders. Missing skus become a
/// placeholder with `isMissing: true` and empty display fields.
impl Serialize for Preview {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Preview::Resolved(record) => record.serialize(serializer),
            Preview::Missing(sku) => {
                let mut state = serializer.serialize_struct("PlaceholderRecord", 5)?;
                state.serialize_field("sku", sku)?;
                state.serialize_field("isMissing", &true)?;
                state.serialize_field("image", "")?;
                state.serialize_field("name", "")?;
                state.serialize_field("id", "")?;
                state.end()
            }
        }
    }
}
