use crate::model::{Listing, SourceError};
use crate::source::traits::ListingSource;
use std::path::PathBuf;
use tracing::info;

/// Reads listings from a JSON export of the backend table.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ListingSource for FileSource {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let listings: Vec<Listing> = serde_json::from_str(&content)?;
        info!("Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }
}
