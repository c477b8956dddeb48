// Listing sources: where the cohort data comes from.

pub mod file;
pub mod rest;
pub mod traits;

pub use file::FileSource;
pub use rest::RestSource;
pub use traits::ListingSource;

use crate::config::SourceConfig;
use crate::model::SourceError;

/// Builds the source described by the configuration.
pub fn from_config(cfg: &SourceConfig) -> Result<Box<dyn ListingSource>, SourceError> {
    match cfg {
        SourceConfig::File { path } => Ok(Box::new(FileSource::new(path))),
        SourceConfig::Rest {
            base_url,
            table,
            api_key,
        } => Ok(Box::new(RestSource::new(base_url, table, api_key)?)),
    }
}
