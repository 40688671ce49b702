// Nasdaq quote API backend; serves both capability roles.
use crate::model::{SourceError, YearSeries};
use crate::source::fetcher::HttpFetcher;
use crate::source::traits::{DividendSource, PriceSource};
use crate::utils::{parse_dollars, year_from_slash_date};

use chrono::{Datelike, Utc};
use serde::Deserialize;
use std::collections::HashMap;

const DAYS_PER_YEAR: usize = 365;

pub struct NasdaqApi {
    fetcher: HttpFetcher,
    window_years: usize,
}

impl NasdaqApi {
    pub fn new(fetcher: HttpFetcher, window_years: usize) -> Self {
        Self {
            fetcher,
            window_years,
        }
    }
}

// The API wraps everything in a `data` envelope that comes back null on
// unknown symbols, so every level decodes as optional.
#[derive(Debug, Deserialize)]
struct DividendsResponse {
    #[serde(default)]
    data: Option<DividendsData>,
}

#[derive(Debug, Deserialize)]
struct DividendsData {
    #[serde(default)]
    dividends: Option<DividendRows>,
}

#[derive(Debug, Deserialize)]
struct DividendRows {
    #[serde(default)]
    rows: Vec<DividendRow>,
}

#[derive(Debug, Deserialize)]
struct DividendRow {
    #[serde(default)]
    amount: String,
    #[serde(rename = "paymentDate", default)]
    payment_date: String,
}

#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    #[serde(default)]
    data: Option<HistoricalData>,
}

#[derive(Debug, Deserialize)]
struct HistoricalData {
    #[serde(rename = "tradesTable", default)]
    trades_table: Option<TradesTable>,
}

#[derive(Debug, Deserialize)]
struct TradesTable {
    #[serde(default)]
    rows: Vec<TradeRow>,
}

#[derive(Debug, Deserialize)]
struct TradeRow {
    #[serde(default)]
    close: String,
    #[serde(default)]
    date: String,
}

#[async_trait::async_trait]
impl DividendSource for NasdaqApi {
    async fn fetch(&self, symbol: &str) -> Result<YearSeries, SourceError> {
        let url = format!(
            "https://api.nasdaq.com/api/quote/{}/dividends?assetclass=etf",
            symbol
        );
        let response: DividendsResponse = self.fetcher.get_json(&url).await?;
        let rows = response
            .data
            .and_then(|data| data.dividends)
            .map(|dividends| dividends.rows)
            .unwrap_or_default();
        Ok(sum_dividends(&rows))
    }
}

#[async_trait::async_trait]
impl PriceSource for NasdaqApi {
    async fn fetch(&self, symbol: &str) -> Result<YearSeries, SourceError> {
        let end_year = Utc::now().year();
        let url = format!(
            "https://api.nasdaq.com/api/quote/{}/historical?assetclass=etf&fromdate={}-01-01&todate={}-12-31&limit={}&offset=0",
            symbol,
            end_year - self.window_years as i32,
            end_year,
            self.window_years * DAYS_PER_YEAR,
        );
        let response: HistoricalResponse = self.fetcher.get_json(&url).await?;
        let rows = response
            .data
            .and_then(|data| data.trades_table)
            .map(|table| table.rows)
            .unwrap_or_default();
        Ok(average_closes(&rows))
    }
}

/// Sums payout amounts per payment year; unparsable rows are skipped.
fn sum_dividends(rows: &[DividendRow]) -> YearSeries {
    let mut series = YearSeries::new();
    for row in rows {
        if let (Some(year), Some(amount)) = (
            year_from_slash_date(&row.payment_date),
            parse_dollars(&row.amount),
        ) {
            series.add(year, amount);
        }
    }
    series
}

/// Averages the daily closes per year, so the produced series holds one
/// average closing price per calendar year.
fn average_closes(rows: &[TradeRow]) -> YearSeries {
    let mut totals: HashMap<i32, (f64, u32)> = HashMap::new();
    for row in rows {
        if let (Some(year), Some(close)) = (year_from_slash_date(&row.date), parse_dollars(&row.close))
        {
            let entry = totals.entry(year).or_insert((0.0, 0));
            entry.0 += close;
            entry.1 += 1;
        }
    }

    let mut series = YearSeries::new();
    for (year, (sum, count)) in totals {
        series.add(year, sum / f64::from(count));
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dividends_sum_per_payment_year() {
        let payload = r#"{
            "data": {
                "dividends": {
                    "rows": [
                        {"amount": "$0.25", "paymentDate": "12/15/2023"},
                        {"amount": "$0.50", "paymentDate": "06/15/2023"},
                        {"amount": "$0.40", "paymentDate": "12/15/2022"},
                        {"amount": "N/A", "paymentDate": "12/15/2021"},
                        {"amount": "$0.10", "paymentDate": "N/A"}
                    ]
                }
            }
        }"#;
        let response: DividendsResponse = serde_json::from_str(payload).unwrap();
        let rows = response.data.unwrap().dividends.unwrap().rows;
        let series = sum_dividends(&rows);
        assert_eq!(series.get(2023), Some(0.75));
        assert_eq!(series.get(2022), Some(0.40));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn closes_average_per_year() {
        let payload = r#"{
            "data": {
                "tradesTable": {
                    "rows": [
                        {"close": "$10.00", "date": "01/03/2023"},
                        {"close": "$20.00", "date": "06/01/2023"},
                        {"close": "$15.00", "date": "01/03/2022"}
                    ]
                }
            }
        }"#;
        let response: HistoricalResponse = serde_json::from_str(payload).unwrap();
        let rows = response.data.unwrap().trades_table.unwrap().rows;
        let series = average_closes(&rows);
        assert_eq!(series.get(2023), Some(15.0));
        assert_eq!(series.get(2022), Some(15.0));
    }

    #[test]
    fn null_data_envelope_decodes_empty() {
        let response: DividendsResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(response.data.is_none());

        let response: HistoricalResponse =
            serde_json::from_str(r#"{"data": {"tradesTable": null}}"#).unwrap();
        assert!(response.data.unwrap().trades_table.is_none());
    }
}
