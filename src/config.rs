use crate::analyzer::market_indicators::MedianConvention;
use crate::analyzer::tiers::TierPolicy;
use crate::label::Language;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    File {
        path: String,
    },
    Rest {
        base_url: String,
        table: String,
        api_key: String,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CohortConfig {
    /// Also require the same model, not just the same brand.
    pub match_model: bool,
    /// Maximum distance in model years from the target listing.
    pub year_window: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub tier_policy: TierPolicy,
    pub median_convention: MedianConvention,
    pub trend_threshold_percent: f64,
    pub cohort: CohortConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tier_policy: TierPolicy::default(),
            median_convention: MedianConvention::default(),
            trend_threshold_percent: 10.0,
            cohort: CohortConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub report_path: Option<String>,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    if !config.analysis.trend_threshold_percent.is_finite()
        || config.analysis.trend_threshold_percent < 0.0
    {
        return Err("trend_threshold_percent must be a non-negative number".into());
    }
    Ok(config)
}
