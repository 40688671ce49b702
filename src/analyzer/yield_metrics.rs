use crate::model::{Etf, YearSeries};

const PERCENTAGE_MULTIPLIER: f64 = 100.0;

/// Trait defining the aggregation operations over one instrument's series.
///
/// All operations are total: empty or partially populated series are valid
/// input and produce defined output, never an error.
pub trait Analyzer {
    fn window_average(&self, series: &YearSeries, end_year: i32, window: usize) -> f64;
    fn derive_yield(&self, etf: &mut Etf);
    fn average_yield(&self, etf: &Etf, end_year: i32, window: usize) -> f64;
}

pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for AnalyzerImpl {
    /// Mean of the values present inside the window. Years outside the
    /// window are never consulted; a window with no observations averages
    /// to 0.0 so callers always have a formattable number.
    fn window_average(&self, series: &YearSeries, end_year: i32, window: usize) -> f64 {
        let mut sum = 0.0;
        let mut count = 0u32;
        for (_, value) in series.windowed(end_year, window) {
            if let Some(value) = value {
                sum += value;
                count += 1;
            }
        }

        if count == 0 {
            return 0.0;
        }
        sum / f64::from(count)
    }

    /// Rebuilds the yield series from scratch: for every year with both a
    /// dividend and a non-zero price, yield = dividend / price * 100.
    /// Years failing either precondition stay absent rather than becoming
    /// zero, and any previously derived contents are discarded.
    fn derive_yield(&self, etf: &mut Etf) {
        let mut derived = YearSeries::new();
        for (year, dividend) in etf.dividends.iter() {
            match etf.closing_prices.get(year) {
                Some(price) if price != 0.0 => {
                    derived.add(year, dividend / price * PERCENTAGE_MULTIPLIER);
                }
                _ => {}
            }
        }
        etf.dividend_yield = derived;
    }

    fn average_yield(&self, etf: &Etf, end_year: i32, window: usize) -> f64 {
        self.window_average(&etf.dividend_yield, end_year, window)
    }
}
