mod http_catalog;
mod mock_catalog;

pub use http_catalog::HttpProviderCatalog;
pub use mock_catalog::MockProviderCatalog;
