//! Behavior of the price analyzer against a cohort of comparable prices.

use car_price_scout::analyzer::market_indicators::MedianConvention;
use car_price_scout::analyzer::tiers::{PriceTier, TierPolicy};
use car_price_scout::config::AnalysisConfig;
use car_price_scout::{AnalyzerImpl, PriceAnalyzer, PriceRange, TrendDirection};

const COHORT: [f64; 3] = [28000.0, 52000.0, 65000.0];

fn analyzer_with(policy: TierPolicy, convention: MedianConvention) -> AnalyzerImpl {
    AnalyzerImpl::new(&AnalysisConfig {
        tier_policy: policy,
        median_convention: convention,
        ..AnalysisConfig::default()
    })
}

// ---------------------------------------------------------------------------
// Empty cohort
// ---------------------------------------------------------------------------

#[test]
fn empty_cohort_returns_neutral_metrics() {
    let analyzer = AnalyzerImpl::default();
    let metrics = analyzer.compute_price_metrics(12345.0, &[]);
    assert_eq!(metrics.percentile, 50);
    assert_eq!(metrics.median_price, 12345.0);
    assert_eq!(metrics.tier, PriceTier::MarketPrice);
    assert_eq!(metrics.color, PriceTier::MarketPrice.color());
}

#[test]
fn empty_cohort_under_ratio_policy_is_fair() {
    let analyzer = analyzer_with(TierPolicy::Ratio, MedianConvention::UpperMiddle);
    assert_eq!(analyzer.compute_price_metrics(500.0, &[]).tier, PriceTier::Fair);
}

#[test]
fn empty_cohort_trend_and_range() {
    let analyzer = AnalyzerImpl::default();
    let trend = analyzer.compute_price_trend(9000.0, &[]);
    assert_eq!(trend.trend, TrendDirection::Stable);
    assert_eq!(trend.percentage, 0.0);
    assert_eq!(trend.label.get("en"), Some("No data"));
    assert_eq!(analyzer.compute_price_range(&[]), PriceRange { min: 0.0, max: 0.0 });
}

// ---------------------------------------------------------------------------
// Reference scenario
// ---------------------------------------------------------------------------

#[test]
fn reference_scenario_metrics() {
    let analyzer = AnalyzerImpl::default();
    let metrics = analyzer.compute_price_metrics(35000.0, &COHORT);
    assert_eq!(metrics.median_price, 52000.0);
    assert_eq!(metrics.percentile, 25);
    assert_eq!(metrics.tier, PriceTier::MarketPrice);
    assert_eq!(metrics.label.get("en"), Some("Market Price"));
    assert_eq!(metrics.label.get("ru"), Some("Рыночная цена"));
    assert_eq!(metrics.label.get("az"), Some("Bazar qiyməti"));
}

#[test]
fn reference_scenario_trend_and_range() {
    let analyzer = AnalyzerImpl::default();
    let trend = analyzer.compute_price_trend(35000.0, &COHORT);
    assert_eq!(trend.trend, TrendDirection::Decreasing);
    assert!((trend.percentage - 27.586).abs() < 0.01, "got {}", trend.percentage);
    assert_eq!(
        analyzer.compute_price_range(&COHORT),
        PriceRange { min: 28000.0, max: 65000.0 }
    );
}

#[test]
fn average_of_middle_median_convention() {
    let analyzer = analyzer_with(TierPolicy::Percentile, MedianConvention::AverageOfMiddle);
    let metrics = analyzer.compute_price_metrics(35000.0, &COHORT);
    assert_eq!(metrics.median_price, 43500.0);
    assert_eq!(metrics.percentile, 25);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn percentile_stays_in_bounds_and_is_monotonic() {
    let analyzer = AnalyzerImpl::default();
    let cohort = [12000.0, 15500.0, 15500.0, 18000.0, 31000.0, 7000.0];
    let mut previous = 0;
    for step in 0..=40 {
        let target = step as f64 * 1000.0;
        let p = analyzer.compute_price_metrics(target, &cohort).percentile;
        assert!(p <= 100);
        assert!(p >= previous, "percentile fell from {} to {} at {}", previous, p, target);
        previous = p;
    }
}

#[test]
fn cheapest_and_priciest_tiers() {
    let analyzer = AnalyzerImpl::default();
    let cohort = [20000.0, 21000.0, 22000.0, 23000.0];
    assert_eq!(analyzer.compute_price_metrics(1000.0, &cohort).tier, PriceTier::GreatDeal);
    assert_eq!(analyzer.compute_price_metrics(90000.0, &cohort).tier, PriceTier::AboveMarket);
}

#[test]
fn range_bounds_every_price() {
    let analyzer = AnalyzerImpl::default();
    let cohort = [8800.0, 4300.0, 15000.0, 9100.0];
    let range = analyzer.compute_price_range(&cohort);
    assert!(cohort.iter().all(|&p| range.min <= p && p <= range.max));
    assert_eq!(range, PriceRange { min: 4300.0, max: 15000.0 });
}

#[test]
fn target_at_mean_is_stable() {
    let analyzer = AnalyzerImpl::default();
    let trend = analyzer.compute_price_trend(20000.0, &[10000.0, 30000.0]);
    assert_eq!(trend.trend, TrendDirection::Stable);
    assert_eq!(trend.percentage, 0.0);
}

#[test]
fn stable_band_reports_zero_percentage() {
    let analyzer = AnalyzerImpl::default();
    let trend = analyzer.compute_price_trend(10500.0, &[10000.0]);
    assert_eq!(trend.trend, TrendDirection::Stable);
    assert_eq!(trend.percentage, 0.0);
}

#[test]
fn above_band_is_increasing() {
    let analyzer = AnalyzerImpl::default();
    let trend = analyzer.compute_price_trend(12500.0, &[10000.0]);
    assert_eq!(trend.trend, TrendDirection::Increasing);
    assert!((trend.percentage - 25.0).abs() < 1e-9);
    assert_eq!(trend.label.get("ru"), Some("Выше среднего"));
}

#[test]
fn custom_trend_threshold() {
    let analyzer = AnalyzerImpl::new(&AnalysisConfig {
        trend_threshold_percent: 30.0,
        ..AnalysisConfig::default()
    });
    assert_eq!(
        analyzer.compute_price_trend(35000.0, &COHORT).trend,
        TrendDirection::Stable
    );
}

#[test]
fn repeated_calls_and_cohort_order_give_identical_results() {
    let analyzer = AnalyzerImpl::default();
    let shuffled = [65000.0, 28000.0, 52000.0];
    let first = analyzer.compute_price_metrics(35000.0, &COHORT);
    assert_eq!(first, analyzer.compute_price_metrics(35000.0, &COHORT));
    assert_eq!(first, analyzer.compute_price_metrics(35000.0, &shuffled));
    assert_eq!(
        analyzer.compute_price_trend(35000.0, &COHORT),
        analyzer.compute_price_trend(35000.0, &shuffled)
    );
}

// ---------------------------------------------------------------------------
// Ratio policy
// ---------------------------------------------------------------------------

#[test]
fn ratio_policy_uses_cohort_only_median() {
    let analyzer = analyzer_with(TierPolicy::Ratio, MedianConvention::UpperMiddle);
    // Cohort median 52000: 35000 / 52000 ≈ 0.67
    let metrics = analyzer.compute_price_metrics(35000.0, &COHORT);
    assert_eq!(metrics.tier, PriceTier::Excellent);
    assert_eq!(metrics.label.get("en"), Some("Excellent Price"));
    // Reported median still covers the combined set.
    assert_eq!(metrics.median_price, 52000.0);
}

#[test]
fn ratio_policy_bands() {
    let analyzer = analyzer_with(TierPolicy::Ratio, MedianConvention::UpperMiddle);
    let cohort = [10000.0];
    let tier = |target: f64| analyzer.compute_price_metrics(target, &cohort).tier;
    assert_eq!(tier(8400.0), PriceTier::Excellent);
    assert_eq!(tier(9000.0), PriceTier::Good);
    assert_eq!(tier(10000.0), PriceTier::Fair);
    assert_eq!(tier(11000.0), PriceTier::High);
    assert_eq!(tier(12000.0), PriceTier::Expensive);
}

#[test]
fn ratio_policy_respects_median_convention() {
    let cohort = [10000.0, 20000.0];
    // Upper-middle median 20000 -> ratio 0.75; averaged median 15000 -> ratio 1.0
    let upper = analyzer_with(TierPolicy::Ratio, MedianConvention::UpperMiddle);
    let average = analyzer_with(TierPolicy::Ratio, MedianConvention::AverageOfMiddle);
    assert_eq!(upper.compute_price_metrics(15000.0, &cohort).tier, PriceTier::Excellent);
    assert_eq!(average.compute_price_metrics(15000.0, &cohort).tier, PriceTier::Fair);
}
