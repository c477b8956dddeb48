use car_price_scout::analyzer::analyze_all;
use car_price_scout::config::{load_config, AppConfig};
use car_price_scout::label::Language;
use car_price_scout::model::{Listing, ListingAnalysis};
use car_price_scout::report::Report;
use car_price_scout::source::{self, ListingSource};
use car_price_scout::utils::format_price;
use std::collections::HashMap;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", config_path, e);
            return;
        }
    };

    let listing_source: Box<dyn ListingSource> = match source::from_config(&config.source) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize listing source: {}", e);
            return;
        }
    };

    info!("Fetching listings...");
    let listings = match listing_source.fetch_listings().await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to fetch listings: {}", e);
            return;
        }
    };
    info!("Listings to analyze: {}", listings.len());

    let analyses = analyze_all(&listings, &config.analysis);

    let by_id: HashMap<&str, &Listing> = listings.iter().map(|l| (l.id.as_str(), l)).collect();
    for analysis in &analyses {
        if let Some(listing) = by_id.get(analysis.listing_id.as_str()) {
            log_analysis(listing, analysis, config.language);
        }
    }

    info!(
        "Analyzed {} of {} listings",
        analyses.len(),
        listings.len()
    );

    if let Some(path) = &config.report_path {
        match Report::new(config.analysis.tier_policy, &analyses).write(path).await {
            Ok(()) => info!("Saved report: {}", path),
            Err(e) => warn!("Failed to write report: {}", e),
        }
    }
}

fn log_analysis(listing: &Listing, analysis: &ListingAnalysis, lang: Language) {
    info!(
        "[{}] {} {} {} ({}) | {} | P{} | median {} | {} {:.1}% | range {}-{} | cohort {}",
        lang.code(),
        listing.brand,
        listing.model,
        listing.year,
        format_price(listing.price),
        analysis.metrics.label.text(lang),
        analysis.metrics.percentile,
        format_price(analysis.metrics.median_price),
        analysis.trend.label.text(lang),
        analysis.trend.percentage,
        format_price(analysis.range.min),
        format_price(analysis.range.max),
        analysis.cohort_size
    );
}
