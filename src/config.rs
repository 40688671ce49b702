use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividendSourceKind {
    DividendHistory,
    StatusInvest,
    Nasdaq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSourceKind {
    Nasdaq,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub symbols: Vec<String>,
    pub window_years: usize,
    pub favorable_yield: f64,
    pub dividend_source: DividendSourceKind,
    pub price_source: PriceSourceKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbols: ["HYGW", "RIET", "SDIV", "SVOL", "XYLD"]
                .map(String::from)
                .to_vec(),
            window_years: 5,
            favorable_yield: 9.0,
            dividend_source: DividendSourceKind::DividendHistory,
            price_source: PriceSourceKind::Nasdaq,
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_from_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"symbols": ["JEPI"], "dividend_source": "nasdaq"}"#).unwrap();
        assert_eq!(config.symbols, vec!["JEPI"]);
        assert_eq!(config.dividend_source, DividendSourceKind::Nasdaq);
        assert_eq!(config.window_years, 5);
        assert_eq!(config.favorable_yield, 9.0);
    }

    #[test]
    fn default_symbols_are_the_watched_etfs() {
        let config = AppConfig::default();
        assert_eq!(config.symbols.len(), 5);
        assert_eq!(config.dividend_source, DividendSourceKind::DividendHistory);
        assert_eq!(config.price_source, PriceSourceKind::Nasdaq);
    }
}
