// statusinvest.com.br crawler; the earnings history is embedded in the
// page as a JSON attribute rather than table rows.
use crate::model::{SourceError, YearSeries};
use crate::source::fetcher::HttpFetcher;
use crate::source::traits::DividendSource;
use crate::utils::year_from_slash_date;

use scraper::{Html, Selector};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct EarningEntry {
    #[serde(rename = "v")]
    value: f64,
    #[serde(rename = "pd")]
    payment_date: String,
}

pub struct StatusInvestCrawler {
    fetcher: HttpFetcher,
}

impl StatusInvestCrawler {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait::async_trait]
impl DividendSource for StatusInvestCrawler {
    async fn fetch(&self, symbol: &str) -> Result<YearSeries, SourceError> {
        let url = format!("https://statusinvest.com.br/etf/eua/{}", symbol);
        let html = self.fetcher.get_text(&url).await?;
        parse_earnings(&html)
    }
}

/// Pulls the earnings JSON out of the hidden results input and sums the
/// payouts per year. Dates come as `DD/MM/YYYY`; unpaid rows carry `-` for
/// the payment date and are skipped.
fn parse_earnings(html: &str) -> Result<YearSeries, SourceError> {
    let document = Html::parse_document(html);

    let input_selector = Selector::parse("div#earning-section input#results")
        .map_err(|e| SourceError::Parse(e.to_string()))?;
    let input = document
        .select(&input_selector)
        .next()
        .ok_or_else(|| SourceError::Parse("earnings payload not found".into()))?;
    let payload = input
        .value()
        .attr("value")
        .ok_or_else(|| SourceError::Parse("earnings input has no value".into()))?;

    let entries: Vec<EarningEntry> =
        serde_json::from_str(payload).map_err(|e| SourceError::Decode(e.to_string()))?;

    let mut series = YearSeries::new();
    for entry in entries {
        if let Some(year) = year_from_slash_date(&entry.payment_date) {
            series.add(year, entry.value);
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARNINGS_PAGE: &str = r#"
        <html><body>
        <div id="earning-section">
          <input id="results" type="hidden"
            value="[{&quot;v&quot;:0.25,&quot;pd&quot;:&quot;15/12/2023&quot;},{&quot;v&quot;:0.50,&quot;pd&quot;:&quot;15/06/2023&quot;},{&quot;v&quot;:0.40,&quot;pd&quot;:&quot;15/12/2022&quot;},{&quot;v&quot;:0.20,&quot;pd&quot;:&quot;-&quot;}]" />
        </div>
        </body></html>"#;

    #[test]
    fn sums_embedded_payouts_per_year() {
        let series = parse_earnings(EARNINGS_PAGE).unwrap();
        assert_eq!(series.get(2023), Some(0.75));
        assert_eq!(series.get(2022), Some(0.40));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn missing_payload_is_a_parse_error() {
        let result = parse_earnings("<html><body></body></html>");
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let html = r#"<div id="earning-section"><input id="results" value="not json" /></div>"#;
        let result = parse_earnings(html);
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }
}
