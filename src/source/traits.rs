use crate::model::{Listing, SourceError};

#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, SourceError>;
}
