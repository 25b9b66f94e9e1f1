pub mod client;
pub mod error;
pub mod reconcile;
pub mod transform;
pub mod types;

pub use client::SpreadshirtClient;
pub use error::{ClientError, ResolveError, ShapeError};
pub use reconcile::resolve;
pub use transform::to_catalog_record;
pub use types::{ProductTypesResponse, RawProductType, RawResource};
