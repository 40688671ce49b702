mod analyzer;
mod config;
mod model;
mod report;
mod source;
mod utils;

use analyzer::AnalyzerImpl;
use analyzer::yield_metrics::Analyzer;
use chrono::{Datelike, Utc};
use config::{AppConfig, load_config};
use futures::future::join_all;
use model::Etf;
use report::ReportTable;
use source::fetcher::HttpFetcher;
use source::traits::{DividendSource, PriceSource};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file, falling back to the built-in watchlist
    let config: AppConfig = if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        }
    } else {
        AppConfig::default()
    };

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
            return;
        }
    };

    let dividend_source = source::dividend_source(config.dividend_source, &fetcher, config.window_years);
    let price_source = source::price_source(config.price_source, &fetcher, config.window_years);
    let analyzer = AnalyzerImpl::new();

    info!("Starting ETF data scraping...");
    info!("ETFs to process: {}", config.symbols.len());

    // Process all ETFs concurrently
    let tasks: Vec<_> = config
        .symbols
        .iter()
        .map(|symbol| {
            process_etf(
                symbol,
                dividend_source.clone(),
                price_source.clone(),
                &analyzer,
            )
        })
        .collect();
    let etfs = join_all(tasks).await;

    info!("Rendering the results...");
    let table = ReportTable::new(
        Utc::now().year(),
        config.window_years,
        config.favorable_yield,
    );
    table.render(&etfs, &analyzer);
}

/// Populates one ETF: both series are fetched concurrently, a source
/// failure downgrades to an empty series for this run, and the yield is
/// derived only once both inputs are settled.
async fn process_etf(
    symbol: &str,
    dividend_source: Arc<dyn DividendSource>,
    price_source: Arc<dyn PriceSource>,
    analyzer: &AnalyzerImpl,
) -> Etf {
    info!("Processing ETF: {}", symbol);
    let mut etf = Etf::new(symbol);

    let (dividends, prices) = tokio::join!(
        dividend_source.fetch(symbol),
        price_source.fetch(symbol)
    );

    match dividends {
        Ok(series) => etf.dividends = series,
        Err(e) => warn!("Failed to fetch dividends for {}: {}", symbol, e),
    }
    match prices {
        Ok(series) => etf.closing_prices = series,
        Err(e) => warn!("Failed to fetch closing prices for {}: {}", symbol, e),
    }

    analyzer.derive_yield(&mut etf);

    info!(
        "Finished processing ETF: {} ({} dividend years, {} price years)",
        symbol,
        etf.dividends.len(),
        etf.closing_prices.len()
    );
    etf
}
