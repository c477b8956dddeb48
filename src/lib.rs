pub mod analyzer;
pub mod config;
pub mod label;
pub mod model;
pub mod report;
pub mod source;
pub mod utils;
pub mod validation;

pub use analyzer::{analyze_all, select_cohort, AnalyzerImpl, PriceAnalyzer};
pub use model::{Listing, ListingAnalysis, PriceMetrics, PriceRange, PriceTrend, TrendDirection};
