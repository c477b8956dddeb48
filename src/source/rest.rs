use crate::model::{Listing, SourceError};
use crate::source::traits::ListingSource;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Reads listings from the hosted backend's REST endpoint.
pub struct RestSource {
    client: Client,
    base_url: String,
    table: String,
    api_key: String,
}

impl RestSource {
    pub fn new(base_url: &str, table: &str, api_key: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent("car-price-scout/0.1")
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            table: table.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn build_url(&self) -> String {
        format!("{}/rest/v1/{}?select=*", self.base_url, self.table)
    }
}

#[async_trait::async_trait]
impl ListingSource for RestSource {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, SourceError> {
        let url = self.build_url();
        info!("Fetching listings from {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Backend responded [{}] for {}", status, url);
            return Err(SourceError::InvalidResponse(status.as_u16()));
        }

        let listings: Vec<Listing> = response.json().await?;
        info!("Fetched {} listings", listings.len());
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_trims_trailing_slash() {
        let source = RestSource::new("https://db.example.com/", "cars", "key").unwrap();
        assert_eq!(source.build_url(), "https://db.example.com/rest/v1/cars?select=*");
    }
}
