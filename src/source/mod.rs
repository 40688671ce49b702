// Acquisition backends behind the two capability traits.

pub mod fetcher;
pub mod traits;

mod dividend_history;
mod nasdaq;
mod status_invest;

pub use dividend_history::DividendHistoryCrawler;
pub use nasdaq::NasdaqApi;
pub use status_invest::StatusInvestCrawler;

use crate::config::{DividendSourceKind, PriceSourceKind};
use fetcher::HttpFetcher;
use std::sync::Arc;
use traits::{DividendSource, PriceSource};

/// Backend selection is a composition-time choice made from config; the
/// rest of the pipeline only sees the capability traits.
pub fn dividend_source(
    kind: DividendSourceKind,
    fetcher: &HttpFetcher,
    window_years: usize,
) -> Arc<dyn DividendSource> {
    match kind {
        DividendSourceKind::DividendHistory => {
            Arc::new(DividendHistoryCrawler::new(fetcher.clone()))
        }
        DividendSourceKind::StatusInvest => Arc::new(StatusInvestCrawler::new(fetcher.clone())),
        DividendSourceKind::Nasdaq => Arc::new(NasdaqApi::new(fetcher.clone(), window_years)),
    }
}

pub fn price_source(
    kind: PriceSourceKind,
    fetcher: &HttpFetcher,
    window_years: usize,
) -> Arc<dyn PriceSource> {
    match kind {
        PriceSourceKind::Nasdaq => Arc::new(NasdaqApi::new(fetcher.clone(), window_years)),
    }
}
