use serde::{Deserialize, Serialize};

/// How the median of an even-length price set is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianConvention {
    /// Element at index `n / 2` of the sorted set.
    #[default]
    UpperMiddle,
    /// Mean of the two central elements for even `n`.
    AverageOfMiddle,
}

pub struct MarketAnalyzer;

impl MarketAnalyzer {
    /// Returns an ascending copy of the prices.
    pub fn sorted(prices: &[f64]) -> Vec<f64> {
        let mut sorted = prices.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }

    /// Median of an already sorted slice. `None` for an empty slice.
    pub fn median(sorted: &[f64], convention: MedianConvention) -> Option<f64> {
        if sorted.is_empty() {
            return None;
        }
        let mid = sorted.len() / 2;
        let median = match convention {
            MedianConvention::AverageOfMiddle if sorted.len() % 2 == 0 => {
                (sorted[mid - 1] + sorted[mid]) / 2.0
            }
            _ => sorted[mid],
        };
        Some(median)
    }

    pub fn mean(prices: &[f64]) -> Option<f64> {
        if prices.is_empty() {
            return None;
        }
        Some(prices.iter().sum::<f64>() / prices.len() as f64)
    }

    /// Share of `prices` strictly below `target`, as a rounded percentage.
    pub fn percent_below(prices: &[f64], target: f64) -> u8 {
        if prices.is_empty() {
            return 0;
        }
        let below = prices.iter().filter(|&&p| p < target).count();
        (100.0 * below as f64 / prices.len() as f64).round() as u8
    }

    pub fn min_max(prices: &[f64]) -> Option<(f64, f64)> {
        let first = *prices.first()?;
        Some(
            prices
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}
