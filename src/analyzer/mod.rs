// Analyzer module: price position, cohort selection and the numeric helpers behind them.

pub mod batch;
pub mod cohort;
pub mod market_indicators;
pub mod price_analysis;
pub mod tiers;

// Re-export the main analyzer for ease of use.
pub use batch::analyze_all;
pub use cohort::select_cohort;
pub use price_analysis::{AnalyzerImpl, PriceAnalyzer};
