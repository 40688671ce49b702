// Core structs: YearSeries, Etf
use std::collections::BTreeMap;
use thiserror::Error;

/// Sparse mapping from a four-digit calendar year to an observed value.
///
/// A missing year means "no observation", which is not the same thing as
/// an observed value of zero. Lookups go through `Option` so that the
/// distinction survives into averaging and formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearSeries {
    values: BTreeMap<i32, f64>,
}

impl YearSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    /// Accumulates onto any existing value for the year. Sources can emit
    /// several observations per year (e.g. quarterly payouts) that must sum.
    pub fn add(&mut self, year: i32, value: f64) {
        *self.values.entry(year).or_insert(0.0) += value;
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values.iter().map(|(year, value)| (*year, *value))
    }

    /// Returns `window` consecutive years ending at `end_year` inclusive,
    /// most recent first. Missing years carry `None`.
    pub fn windowed(&self, end_year: i32, window: usize) -> Vec<(i32, Option<f64>)> {
        (0..window)
            .map(|i| {
                let year = end_year - i as i32;
                (year, self.get(year))
            })
            .collect()
    }
}

impl FromIterator<(i32, f64)> for YearSeries {
    fn from_iter<T: IntoIterator<Item = (i32, f64)>>(iter: T) -> Self {
        let mut series = Self::new();
        for (year, value) in iter {
            series.add(year, value);
        }
        series
    }
}

/// One exchange-traded fund and its yearly series.
///
/// `dividend_yield` is derived state: the analyzer recomputes it wholesale
/// from `dividends` and `closing_prices`, it is never fetched.
#[derive(Debug, Clone)]
pub struct Etf {
    pub symbol: String,
    pub dividends: YearSeries,
    pub closing_prices: YearSeries,
    pub dividend_yield: YearSeries,
}

impl Etf {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            dividends: YearSeries::new(),
            closing_prices: YearSeries::new(),
            dividend_yield: YearSeries::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status code: {0}")]
    InvalidStatus(u16),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_same_year() {
        let mut series = YearSeries::new();
        series.add(2023, 0.25);
        series.add(2023, 0.50);
        series.add(2022, 1.0);
        assert_eq!(series.get(2023), Some(0.75));
        assert_eq!(series.get(2022), Some(1.0));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn get_missing_year_is_none() {
        let series: YearSeries = [(2020, 3.0)].into_iter().collect();
        assert_eq!(series.get(2021), None);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn windowed_is_descending_with_gaps() {
        let series: YearSeries = [(2023, 1.0), (2021, 3.0)].into_iter().collect();
        let window = series.windowed(2023, 4);
        assert_eq!(
            window,
            vec![
                (2023, Some(1.0)),
                (2022, None),
                (2021, Some(3.0)),
                (2020, None),
            ]
        );
    }

    #[test]
    fn windowed_zero_width_is_empty() {
        let series: YearSeries = [(2023, 1.0)].into_iter().collect();
        assert!(series.windowed(2023, 0).is_empty());
    }

    #[test]
    fn zero_value_is_an_observation() {
        let mut series = YearSeries::new();
        series.add(2022, 0.0);
        assert_eq!(series.get(2022), Some(0.0));
        assert!(!series.is_empty());
    }

    #[test]
    fn equality_is_by_pairs() {
        let a: YearSeries = [(2021, 2.0), (2022, 3.0)].into_iter().collect();
        let b: YearSeries = [(2022, 3.0), (2021, 2.0)].into_iter().collect();
        assert_eq!(a, b);
    }
}
