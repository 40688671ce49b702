// Table presentation: cell formatting, tone classification, rendering.
use crate::analyzer::yield_metrics::Analyzer;
use crate::model::{Etf, YearSeries};

use crossterm::style::Stylize;

/// Cell shown for a year with no observation. Never a zero-valued number.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Dollars,
    Percent,
}

/// Emphasis decision for one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Favorable,
    Unfavorable,
}

pub fn format_value(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Dollars => format!("${:.2}", value),
        Unit::Percent => format!("{:.2}%", value),
    }
}

/// One formatted cell per window year, most recent first; absent years
/// render as the placeholder.
pub fn format_series(series: &YearSeries, end_year: i32, window: usize, unit: Unit) -> Vec<String> {
    series
        .windowed(end_year, window)
        .into_iter()
        .map(|(_, value)| match value {
            Some(value) => format_value(value, unit),
            None => PLACEHOLDER.to_string(),
        })
        .collect()
}

/// Classifies a formatted cell against the yield threshold. Only
/// `%`-suffixed cells are classified; dollar cells and placeholders stay
/// plain.
pub fn tone_for(cell: &str, favorable_threshold: f64) -> Tone {
    let Some(number) = cell.strip_suffix('%') else {
        return Tone::Plain;
    };
    match number.parse::<f64>() {
        Ok(value) if value >= favorable_threshold => Tone::Favorable,
        Ok(_) => Tone::Unfavorable,
        Err(_) => Tone::Plain,
    }
}

#[derive(Debug)]
pub struct Row {
    pub label: String,
    pub cells: Vec<String>,
    pub tones: Vec<Tone>,
}

pub struct ReportTable {
    pub end_year: i32,
    pub window: usize,
    pub favorable_yield: f64,
}

impl ReportTable {
    pub fn new(end_year: i32, window: usize, favorable_yield: f64) -> Self {
        Self {
            end_year,
            window,
            favorable_yield,
        }
    }

    /// Three display rows per ETF: dividends, closing prices and yields,
    /// each with the window cells plus a trailing averages cell.
    pub fn rows_for(&self, etf: &Etf, analyzer: &dyn Analyzer) -> Vec<Row> {
        let mut dividends = format_series(&etf.dividends, self.end_year, self.window, Unit::Dollars);
        dividends.push(format_value(
            analyzer.window_average(&etf.dividends, self.end_year, self.window),
            Unit::Dollars,
        ));

        let mut prices =
            format_series(&etf.closing_prices, self.end_year, self.window, Unit::Dollars);
        prices.push(format_value(
            analyzer.window_average(&etf.closing_prices, self.end_year, self.window),
            Unit::Dollars,
        ));

        let mut yields =
            format_series(&etf.dividend_yield, self.end_year, self.window, Unit::Percent);
        yields.push(format_value(
            analyzer.average_yield(etf, self.end_year, self.window),
            Unit::Percent,
        ));
        let yield_tones = yields
            .iter()
            .map(|cell| tone_for(cell, self.favorable_yield))
            .collect();

        vec![
            Row {
                label: format!("{} Dividends", etf.symbol),
                tones: vec![Tone::Plain; dividends.len()],
                cells: dividends,
            },
            Row {
                label: format!("{} Closing Prices", etf.symbol),
                tones: vec![Tone::Plain; prices.len()],
                cells: prices,
            },
            Row {
                label: format!("{} Dividend Yields", etf.symbol),
                tones: yield_tones,
                cells: yields,
            },
        ]
    }

    pub fn render(&self, etfs: &[Etf], analyzer: &dyn Analyzer) {
        let mut headers = vec!["ETF".to_string()];
        headers.extend((0..self.window).map(|i| (self.end_year - i as i32).to_string()));
        headers.push("Averages".to_string());

        let blocks: Vec<Vec<Row>> = etfs
            .iter()
            .map(|etf| self.rows_for(etf, analyzer))
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
        for row in blocks.iter().flatten() {
            widths[0] = widths[0].max(row.label.len());
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i + 1] = widths[i + 1].max(cell.len());
            }
        }

        print_separator(&widths);
        print!("| {:<width$} ", headers[0], width = widths[0]);
        for (header, width) in headers[1..].iter().zip(&widths[1..]) {
            print!("| {:<width$} ", header, width = *width);
        }
        println!("|");
        print_separator(&widths);

        for block in &blocks {
            for row in block {
                print_row(row, &widths);
            }
            print_separator(&widths);
        }
    }
}

fn print_row(row: &Row, widths: &[usize]) {
    print!("| {:<width$} ", row.label, width = widths[0]);
    for (i, (cell, tone)) in row.cells.iter().zip(&row.tones).enumerate() {
        let padded = format!("{:<width$}", cell, width = widths[i + 1]);
        match tone {
            Tone::Favorable => print!("| {} ", padded.green()),
            Tone::Unfavorable => print!("| {} ", padded.red()),
            Tone::Plain => print!("| {} ", padded),
        }
    }
    println!("|");
}

fn print_separator(widths: &[usize]) {
    for width in widths {
        print!("+{}", "-".repeat(width + 2));
    }
    println!("+");
}
