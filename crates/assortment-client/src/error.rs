use thiserror::Error;

/// A product type could not be reshaped into a catalog record.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("product type {id} has no image resources")]
pub struct ShapeError {
    pub id: String,
}

/// Failure of a batch reconciliation.
///
/// There is no partial result: one failed lookup fails the whole batch.
#[derive(Debug, Error)]
pub enum ResolveError<E>
where
    E: std::error::Error + 'static,
{
    #[error("lookup failed for sku {sku}: {source}")]
    Lookup {
        sku: String,
        #[source]
        source: E,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// `path` never includes the query string, which carries the api key.
    #[error("endpoint not found: {path}")]
    NotFound { path: String },

    #[error("unexpected HTTP status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// `""`, `"."` and `".."` cannot name a shop or product type: URL
    /// normalization would drop them and address a different endpoint.
    #[error("\"{segment}\" cannot be used as a URL path segment")]
    InvalidPathSegment { segment: String },

    #[error(transparent)]
    Config(#[from] assortment_core::ConfigError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("lookup failed for sku {sku}: {source}")]
    Lookup {
        sku: String,
        #[source]
        source: Box<ClientError>,
    },
}

impl From<ResolveError<ClientError>> for ClientError {
    fn from(err: ResolveError<ClientError>) -> Self {
        match err {
            ResolveError::Lookup { sku, source } => ClientError::Lookup {
                sku,
                source: Box::new(source),
            },
            ResolveError::Shape(shape) => ClientError::Shape(shape),
        }
    }
}
