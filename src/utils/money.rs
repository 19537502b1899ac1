//! Price parsing and display.

use crate::errors::{AppError, AppResult};

/// Fixed two-decimal representation used in tables and CSV.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Parse a price typed by the user. Accepts `1,250.50` style thousands
/// separators; range checks are left to the record store.
pub fn parse_price(s: &str) -> AppResult<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| AppError::InvalidPrice(s.to_string()))
}
