pub mod mock_catalog;
pub mod upstream;

pub use mock_catalog::{gateway_fallback, mock_catalog, FALLBACK_CATEGORIES};
pub use upstream::{UpstreamClient, UpstreamError};
