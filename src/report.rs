// JSON report of a batch run
use crate::analyzer::tiers::TierPolicy;
use crate::model::{ListingAnalysis, ReportError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub tier_policy: TierPolicy,
    pub analyses: &'a [ListingAnalysis],
}

impl<'a> Report<'a> {
    pub fn new(tier_policy: TierPolicy, analyses: &'a [ListingAnalysis]) -> Self {
        Self {
            generated_at: Utc::now(),
            tier_policy,
            analyses,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub async fn write(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        tokio::fs::write(path, self.to_json()?).await?;
        Ok(())
    }
}
