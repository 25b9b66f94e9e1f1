//! Shapes exchanged with the host SKU-picker widget.

use serde::Serialize;

use crate::catalog::CatalogRecord;

/// Pagination block returned alongside each browse page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Page size. The picker expects this to equal `limit`, not the number
    /// of products actually returned.
    pub count: u32,
    pub limit: u32,
    /// Total number of product types in the shop assortment.
    pub total: u64,
    pub offset: u64,
}

/// A single page of the shop assortment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPage {
    pub pagination: Pagination,
    pub products: Vec<CatalogRecord>,
}

/// Type of the content field the picker is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Symbol,
    Array,
}

impl FieldType {
    /// Call-to-action label for the picker button.
    #[must_use]
    pub fn make_cta(self) -> &'static str {
        match self {
            FieldType::Array => "Select products",
            FieldType::Symbol => "Select a product",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
}

/// Static description of the app as registered with the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub parameter_definitions: Vec<ParameterDefinition>,
}

impl Default for AppManifest {
    fn default() -> Self {
        Self {
            name: "Spreadgroup Assortment",
            description: "The Spreadgroup assortment app allows to pick product types from the Spreadgroup assortment.",
            color: "#212F3F",
            parameter_definitions: vec![
                ParameterDefinition {
                    id: "shopId",
                    name: "Shop Id",
                    description: "The shop Id",
                    kind: "Symbol",
                    required: true,
                },
                ParameterDefinition {
                    id: "apiKey",
                    name: "API Key",
                    description: "The api key",
                    kind: "Symbol",
                    required: true,
                },
            ],
        }
    }
}
