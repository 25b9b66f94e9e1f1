//! Preview reconciliation for `SpreadshirtClient`.

use assortment_core::Preview;

use crate::error::ClientError;
use crate::reconcile::resolve;

use super::SpreadshirtClient;

impl SpreadshirtClient {
    /// Resolves previously selected skus into picker previews.
    ///
    /// Each sku is fetched with [`Self::fetch_product_type`], all requests in
    /// flight at once. Skus the API answers 404 for come back as
    /// [`Preview::Missing`] after the resolved records.
    ///
    /// **All-or-nothing semantics**: if any request fails, the whole batch
    /// fails with [`ClientError::Lookup`] once every request has settled.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Lookup`] wrapping the first failed request.
    /// - [`ClientError::Shape`] if a resolved product type has no images.
    pub async fn fetch_product_previews(
        &self,
        skus: &[String],
    ) -> Result<Vec<Preview>, ClientError> {
        let previews = resolve(skus, move |sku: String| async move {
            self.fetch_product_type(&sku).await
        })
        .await?;
        Ok(previews)
    }
}
