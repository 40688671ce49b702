use crate::model::{SourceError, YearSeries};

/// Produces the total cash dividend paid per year for one symbol.
#[async_trait::async_trait]
pub trait DividendSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<YearSeries, SourceError>;
}

/// Produces the average daily closing price per year for one symbol.
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<YearSeries, SourceError>;
}
