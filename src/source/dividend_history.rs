// dividendhistory.org payout-table crawler
use crate::model::{SourceError, YearSeries};
use crate::source::fetcher::HttpFetcher;
use crate::source::traits::DividendSource;
use crate::utils::{parse_dollars, year_from_iso};

use scraper::{Html, Selector};

pub struct DividendHistoryCrawler {
    fetcher: HttpFetcher,
}

impl DividendHistoryCrawler {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait::async_trait]
impl DividendSource for DividendHistoryCrawler {
    async fn fetch(&self, symbol: &str) -> Result<YearSeries, SourceError> {
        let url = format!("https://dividendhistory.org/payout/{}/", symbol);
        let html = self.fetcher.get_text(&url).await?;
        parse_payout_table(&html)
    }
}

/// Walks the payout table; column 2 holds the payout date (ISO), column 3
/// the cash amount. Rows that fail to parse are skipped, same-year payouts
/// accumulate.
fn parse_payout_table(html: &str) -> Result<YearSeries, SourceError> {
    let document = Html::parse_document(html);

    let row_selector = Selector::parse("table#dividend_table tbody tr")
        .map_err(|e| SourceError::Parse(e.to_string()))?;
    let date_selector =
        Selector::parse("td:nth-child(2)").map_err(|e| SourceError::Parse(e.to_string()))?;
    let amount_selector =
        Selector::parse("td:nth-child(3)").map_err(|e| SourceError::Parse(e.to_string()))?;

    let mut series = YearSeries::new();
    for row in document.select(&row_selector) {
        let date = row
            .select(&date_selector)
            .next()
            .map(|cell| cell.text().collect::<String>());
        let amount = row
            .select(&amount_selector)
            .next()
            .map(|cell| cell.text().collect::<String>());

        let (Some(date), Some(amount)) = (date, amount) else {
            continue;
        };
        if let (Some(year), Some(cash)) = (year_from_iso(date.trim()), parse_dollars(&amount)) {
            series.add(year, cash);
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYOUT_PAGE: &str = r#"
        <html><body>
        <table id="dividend_table">
          <tbody>
            <tr><td>1</td><td>2023-12-15</td><td>$0.40</td></tr>
            <tr><td>2</td><td>2023-06-15</td><td>$0.60</td></tr>
            <tr><td>3</td><td>2022-12-15</td><td>$0.55</td></tr>
            <tr><td>4</td><td>-</td><td>$0.10</td></tr>
            <tr><td>5</td><td>2022-06-15</td><td>N/A</td></tr>
          </tbody>
        </table>
        </body></html>"#;

    #[test]
    fn sums_payouts_per_year() {
        let series = parse_payout_table(PAYOUT_PAGE).unwrap();
        assert_eq!(series.get(2023), Some(1.0));
        assert_eq!(series.get(2022), Some(0.55));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn page_without_table_is_empty() {
        let series = parse_payout_table("<html><body><p>404</p></body></html>").unwrap();
        assert!(series.is_empty());
    }
}
