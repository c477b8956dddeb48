use crate::analyzer::market_indicators::{MarketAnalyzer, MedianConvention};
use crate::analyzer::tiers::{tier_for_percentile, tier_for_ratio, TierPolicy};
use crate::config::AnalysisConfig;
use crate::label::Label;
use crate::model::{
    AnalyzerError, Listing, ListingAnalysis, PriceMetrics, PriceRange, PriceTrend, TrendDirection,
};

const INCREASING: Label = Label::new("Above average", "Выше среднего", "Ortadan yuxarı");
const DECREASING: Label = Label::new("Below average", "Ниже среднего", "Ortadan aşağı");
const STABLE: Label = Label::new("Stable", "Стабильно", "Sabit");
const NO_DATA: Label = Label::new("No data", "Нет данных", "Məlumat yoxdur");

/// Trait defining the interface for a price analyzer.
///
/// All operations are pure functions of the target price and the cohort
/// prices. Cohort order does not matter.
pub trait PriceAnalyzer {
    fn compute_price_metrics(&self, target: f64, cohort: &[f64]) -> PriceMetrics;
    fn compute_price_trend(&self, target: f64, cohort: &[f64]) -> PriceTrend;
    fn compute_price_range(&self, cohort: &[f64]) -> PriceRange;
}

/// Implementation of the price analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerImpl {
    policy: TierPolicy,
    convention: MedianConvention,
    trend_threshold: f64,
}

impl Default for AnalyzerImpl {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl AnalyzerImpl {
    pub fn new(cfg: &AnalysisConfig) -> Self {
        Self {
            policy: cfg.tier_policy,
            convention: cfg.median_convention,
            trend_threshold: cfg.trend_threshold_percent,
        }
    }

    /// Runs all three computations for a listing against its cohort.
    ///
    /// Prices must be finite and non-negative; the first offending listing
    /// fails the whole call. Batch callers filter with
    /// [`has_valid_price`](crate::analyzer::batch::has_valid_price) first.
    pub fn analyze(
        &self,
        listing: &Listing,
        cohort: &[&Listing],
    ) -> Result<ListingAnalysis, AnalyzerError> {
        for l in std::iter::once(listing).chain(cohort.iter().copied()) {
            if !l.price.is_finite() || l.price < 0.0 {
                return Err(AnalyzerError::InvalidInput(format!(
                    "listing {} has price {}",
                    l.id, l.price
                )));
            }
        }

        let prices: Vec<f64> = cohort.iter().map(|l| l.price).collect();
        Ok(ListingAnalysis {
            listing_id: listing.id.clone(),
            price: listing.price,
            cohort_size: prices.len(),
            metrics: self.compute_price_metrics(listing.price, &prices),
            trend: self.compute_price_trend(listing.price, &prices),
            range: self.compute_price_range(&prices),
        })
    }

    fn ratio_to_cohort_median(&self, target: f64, cohort: &[f64]) -> f64 {
        let sorted = MarketAnalyzer::sorted(cohort);
        match MarketAnalyzer::median(&sorted, self.convention) {
            Some(median) if median > 0.0 => target / median,
            // A free cohort: only a free target sits at the median.
            _ if target == 0.0 => 1.0,
            _ => f64::INFINITY,
        }
    }
}

impl PriceAnalyzer for AnalyzerImpl {
    fn compute_price_metrics(&self, target: f64, cohort: &[f64]) -> PriceMetrics {
        if cohort.is_empty() {
            let tier = self.policy.middle();
            return PriceMetrics {
                median_price: target,
                percentile: 50,
                tier,
                color: tier.color(),
                label: tier.label(),
            };
        }

        let mut combined = Vec::with_capacity(cohort.len() + 1);
        combined.push(target);
        combined.extend_from_slice(cohort);
        let sorted = MarketAnalyzer::sorted(&combined);

        let median_price = MarketAnalyzer::median(&sorted, self.convention).unwrap_or(target);
        let percentile = MarketAnalyzer::percent_below(&sorted, target);

        let tier = match self.policy {
            TierPolicy::Percentile => tier_for_percentile(percentile),
            TierPolicy::Ratio => tier_for_ratio(self.ratio_to_cohort_median(target, cohort)),
        };

        PriceMetrics {
            median_price,
            percentile,
            tier,
            color: tier.color(),
            label: tier.label(),
        }
    }

    fn compute_price_trend(&self, target: f64, cohort: &[f64]) -> PriceTrend {
        let avg = match MarketAnalyzer::mean(cohort) {
            Some(avg) if avg > 0.0 => avg,
            _ => {
                return PriceTrend {
                    trend: TrendDirection::Stable,
                    percentage: 0.0,
                    label: NO_DATA,
                };
            }
        };

        let diff = 100.0 * (target - avg) / avg;
        if diff < -self.trend_threshold {
            PriceTrend {
                trend: TrendDirection::Decreasing,
                percentage: diff.abs(),
                label: DECREASING,
            }
        } else if diff > self.trend_threshold {
            PriceTrend {
                trend: TrendDirection::Increasing,
                percentage: diff.abs(),
                label: INCREASING,
            }
        } else {
            PriceTrend {
                trend: TrendDirection::Stable,
                percentage: 0.0,
                label: STABLE,
            }
        }
    }

    fn compute_price_range(&self, cohort: &[f64]) -> PriceRange {
        let (min, max) = MarketAnalyzer::min_max(cohort).unwrap_or((0.0, 0.0));
        PriceRange { min, max }
    }
}
