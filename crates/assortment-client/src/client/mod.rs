//! HTTP client for the Spreadshirt shop `productTypes` API.

mod previews;

use std::time::Duration;

use assortment_core::{
    validate_parameters, AppConfig, InstallationParameters, Pagination, ProductPage,
};
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::transform::to_catalog_record;
use crate::types::{ProductTypesResponse, RawProductType};

/// HTTP client for one shop's product-type assortment.
///
/// Authentication is the `apiKey` query parameter. Non-2xx responses are
/// returned as typed errors; nothing is retried. Error values and log
/// events carry the request path only, never the query string.
pub struct SpreadshirtClient {
    pub(super) client: Client,
    pub(super) base_url: Url,
    pub(super) params: InstallationParameters,
}

impl SpreadshirtClient {
    /// Creates a client for the shop named in `params`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if the shop id or api key is empty. This
    ///   check runs before anything touches the network.
    /// - [`ClientError::InvalidPathSegment`] if the shop id is `.` or `..`.
    /// - [`ClientError::InvalidBaseUrl`] if `base_url` cannot carry a path.
    /// - [`ClientError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        params: InstallationParameters,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        validate_parameters(&params)?;
        if !is_addressable(&params.shop_id) {
            return Err(ClientError::InvalidPathSegment {
                segment: params.shop_id,
            });
        }

        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
            params,
        })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_base_url,
            config.installation.clone(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches one page of the shop's product types.
    ///
    /// Every product type is reshaped into a catalog record; a single
    /// malformed entry fails the page.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] on HTTP 404 (unknown shop).
    /// - [`ClientError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ClientError::Http`] on network or TLS failure.
    /// - [`ClientError::Deserialize`] if the body is not the expected JSON.
    /// - [`ClientError::Shape`] if a product type has no image resources.
    pub async fn fetch_product_types_page(
        &self,
        limit: u32,
        offset: u64,
    ) -> Result<ProductPage, ClientError> {
        let url = self.product_types_url(limit, offset)?;
        let path = url.path().to_owned();

        let Some(body) = self.get_body(url).await? else {
            return Err(ClientError::NotFound { path });
        };

        let parsed = serde_json::from_str::<ProductTypesResponse>(&body).map_err(|e| {
            ClientError::Deserialize {
                context: format!("product types page at offset {offset}"),
                source: e,
            }
        })?;

        let products = parsed
            .product_types
            .into_iter()
            .map(to_catalog_record)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            offset,
            limit,
            returned = products.len(),
            total = parsed.count,
            "fetched product types page"
        );

        Ok(ProductPage {
            pagination: Pagination {
                count: limit,
                limit,
                total: parsed.count,
                offset,
            },
            products,
        })
    }

    /// Fetches a single product type by sku.
    ///
    /// Returns `Ok(None)` when the API answers 404, and without a request for
    /// skus that cannot be a path segment (`""`, `"."`, `".."`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status except 404.
    /// - [`ClientError::Http`] on network or TLS failure.
    /// - [`ClientError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_product_type(
        &self,
        sku: &str,
    ) -> Result<Option<RawProductType>, ClientError> {
        if !is_addressable(sku) {
            tracing::debug!(sku, "sku is not addressable, treating as not found");
            return Ok(None);
        }

        let url = self.product_type_url(sku)?;

        let Some(body) = self.get_body(url).await? else {
            return Ok(None);
        };

        let parsed = serde_json::from_str::<RawProductType>(&body).map_err(|e| {
            ClientError::Deserialize {
                context: format!("product type {sku}"),
                source: e,
            }
        })?;

        Ok(Some(parsed))
    }

    /// Issues a GET and returns the body of a 2xx response, or `None` on 404.
    async fn get_body(&self, url: Url) -> Result<Option<String>, ClientError> {
        let path = url.path().to_owned();
        tracing::debug!(path = %path, "GET product types API");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                path,
            });
        }

        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(Some(body))
    }

    /// Builds the list URL:
    /// `{base}/shops/{shopId}/productTypes?limit=..&offset=..&mediaType=json&apiKey=..`.
    fn product_types_url(&self, limit: u32, offset: u64) -> Result<Url, ClientError> {
        let mut url = self.shop_url(&["productTypes"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        self.append_auth(&mut url);
        Ok(url)
    }

    /// Builds the single-item URL:
    /// `{base}/shops/{shopId}/productTypes/{sku}?mediaType=json&apiKey=..`.
    fn product_type_url(&self, sku: &str) -> Result<Url, ClientError> {
        let mut url = self.shop_url(&["productTypes", sku])?;
        self.append_auth(&mut url);
        Ok(url)
    }

    /// `{base}/shops/{shopId}/{segments...}` with each segment percent-encoded.
    ///
    /// `url` silently drops `.` and `..` segments, so those are rejected here
    /// rather than producing a URL for a parent endpoint.
    fn shop_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        if let Some(bad) = segments.iter().find(|s| !is_addressable(s)) {
            return Err(ClientError::InvalidPathSegment {
                segment: (*bad).to_owned(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_owned(),
            })?
            .pop_if_empty()
            .push("shops")
            .push(&self.params.shop_id)
            .extend(segments);
        Ok(url)
    }

    fn append_auth(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair("mediaType", "json")
            .append_pair("apiKey", &self.params.api_key);
    }
}

fn is_addressable(segment: &str) -> bool {
    !matches!(segment, "" | "." | "..")
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
