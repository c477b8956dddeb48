use crate::analyzer::cohort::select_cohort;
use crate::analyzer::price_analysis::AnalyzerImpl;
use crate::config::AnalysisConfig;
use crate::model::{Listing, ListingAnalysis};
use tracing::warn;

/// Prices the analyzer accepts: finite and non-negative.
pub fn has_valid_price(listing: &Listing) -> bool {
    listing.price.is_finite() && listing.price >= 0.0
}

/// Analyzes every listing against its cohort.
///
/// Listings with an unusable price are logged and skipped up front, so they
/// never end up in another listing's cohort. Output keeps input order.
pub fn analyze_all(listings: &[Listing], cfg: &AnalysisConfig) -> Vec<ListingAnalysis> {
    let (valid, invalid): (Vec<Listing>, Vec<Listing>) =
        listings.iter().cloned().partition(has_valid_price);

    for listing in &invalid {
        warn!("Skipping listing {}: price {} is not usable", listing.id, listing.price);
    }

    let analyzer = AnalyzerImpl::new(cfg);
    valid
        .iter()
        .filter_map(|listing| {
            let cohort = select_cohort(listing, &valid, &cfg.cohort);
            match analyzer.analyze(listing, &cohort) {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    warn!("Skipping listing {}: {}", listing.id, e);
                    None
                }
            }
        })
        .collect()
}
