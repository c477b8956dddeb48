use crate::label::Label;
use serde::{Deserialize, Serialize};

/// Which thresholds turn a price position into a tier.
///
/// Only one policy is active for a run; the two tier sets never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierPolicy {
    /// Three tiers keyed on the percentile within the combined price set.
    #[default]
    Percentile,
    /// Five tiers keyed on `target / median(cohort)`.
    Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTier {
    GreatDeal,
    MarketPrice,
    AboveMarket,
    Excellent,
    Good,
    Fair,
    High,
    Expensive,
}

impl TierPolicy {
    /// Tier reported when there is nothing to compare against.
    pub fn middle(&self) -> PriceTier {
        match self {
            TierPolicy::Percentile => PriceTier::MarketPrice,
            TierPolicy::Ratio => PriceTier::Fair,
        }
    }

    pub fn tiers(&self) -> &'static [PriceTier] {
        match self {
            TierPolicy::Percentile => &[
                PriceTier::GreatDeal,
                PriceTier::MarketPrice,
                PriceTier::AboveMarket,
            ],
            TierPolicy::Ratio => &[
                PriceTier::Excellent,
                PriceTier::Good,
                PriceTier::Fair,
                PriceTier::High,
                PriceTier::Expensive,
            ],
        }
    }
}

/// Percentile thresholds: `<25`, `[25, 75)`, `>=75`.
pub fn tier_for_percentile(percentile: u8) -> PriceTier {
    if percentile < 25 {
        PriceTier::GreatDeal
    } else if percentile < 75 {
        PriceTier::MarketPrice
    } else {
        PriceTier::AboveMarket
    }
}

/// Ratio thresholds around the cohort median, in 10% steps from 0.85 to 1.15.
pub fn tier_for_ratio(ratio: f64) -> PriceTier {
    if ratio < 0.85 {
        PriceTier::Excellent
    } else if ratio < 0.95 {
        PriceTier::Good
    } else if ratio < 1.05 {
        PriceTier::Fair
    } else if ratio < 1.15 {
        PriceTier::High
    } else {
        PriceTier::Expensive
    }
}

impl PriceTier {
    /// Gradient token used by the listing card badge.
    pub fn color(&self) -> &'static str {
        match self {
            PriceTier::GreatDeal | PriceTier::Excellent => "from-green-500 to-emerald-600",
            PriceTier::Good => "from-lime-500 to-green-600",
            PriceTier::MarketPrice | PriceTier::Fair => "from-blue-500 to-indigo-600",
            PriceTier::High => "from-orange-500 to-amber-600",
            PriceTier::AboveMarket | PriceTier::Expensive => "from-red-500 to-rose-600",
        }
    }

    pub fn label(&self) -> Label {
        match self {
            PriceTier::GreatDeal => Label::new("Great Deal", "Выгодная цена", "Sərfəli qiymət"),
            PriceTier::MarketPrice => Label::new("Market Price", "Рыночная цена", "Bazar qiyməti"),
            PriceTier::AboveMarket => Label::new("Above Market", "Выше рынка", "Bazardan yuxarı"),
            PriceTier::Excellent => Label::new("Excellent Price", "Отличная цена", "Əla qiymət"),
            PriceTier::Good => Label::new("Good Price", "Хорошая цена", "Yaxşı qiymət"),
            PriceTier::Fair => Label::new("Fair Price", "Справедливая цена", "Ədalətli qiymət"),
            PriceTier::High => Label::new("High Price", "Высокая цена", "Yüksək qiymət"),
            PriceTier::Expensive => Label::new("Expensive", "Дорого", "Bahalı"),
        }
    }
}
