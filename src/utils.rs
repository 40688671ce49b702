// Utility functions

/// Extracts the four-digit year from an ISO date string like `2023-05-10`.
pub fn year_from_iso(date: &str) -> Option<i32> {
    parse_year(date.split('-').next()?)
}

/// Extracts the four-digit year from a slash-separated date with a trailing
/// year, covering both US `05/10/2023` and `10/05/2023`-style payloads.
pub fn year_from_slash_date(date: &str) -> Option<i32> {
    parse_year(date.split('/').nth(2)?)
}

/// Parses a `$`-prefixed amount like `$0.25` into a float.
pub fn parse_dollars(text: &str) -> Option<f64> {
    text.replace('$', "").trim().parse::<f64>().ok()
}

fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.len() != 4 {
        return None;
    }
    text.parse::<i32>().ok()
}
