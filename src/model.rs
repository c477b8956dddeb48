// Core structs: Listing, analysis outputs and error types
use crate::analyzer::tiers::PriceTier;
use crate::label::Label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price: f64,
    #[serde(default)]
    pub mileage: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceMetrics {
    pub median_price: f64,
    pub percentile: u8,
    pub tier: PriceTier,
    pub color: &'static str,
    pub label: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTrend {
    pub trend: TrendDirection,
    pub percentage: f64,
    pub label: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Everything the analyzer knows about one listing's position in its cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingAnalysis {
    pub listing_id: String,
    pub price: f64,
    pub cohort_size: usize,
    pub metrics: PriceMetrics,
    pub trend: PriceTrend,
    pub range: PriceRange,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AnalyzerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response: status {0}")]
    InvalidResponse(u16),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
