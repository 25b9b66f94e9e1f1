//! Reshaping of raw product types into [`assortment_core::CatalogRecord`].

use assortment_core::CatalogRecord;

use crate::error::ShapeError;
use crate::types::RawProductType;

/// Converts a [`RawProductType`] into the record shape the picker renders.
///
/// The first resource becomes the image; `sku` mirrors `id`; `href` becomes
/// the external link.
///
/// # Errors
///
/// Returns [`ShapeError`] if the product type has no resources. An empty
/// image URL is never produced silently.
pub fn to_catalog_record(product: RawProductType) -> Result<CatalogRecord, ShapeError> {
    let Some(first) = product.resources.into_iter().next() else {
        return Err(ShapeError { id: product.id });
    };

    Ok(CatalogRecord {
        sku: product.id.clone(),
        id: product.id,
        image: first.href,
        name: product.name,
        external_link: product.href,
    })
}
