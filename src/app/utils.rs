use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, FixedOffset, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

/// Parses a `1.52%` style cell. `N/A%` maps to `None`.
pub fn parse_percent(field: &str) -> Result<Option<Decimal>> {
    let value = field.trim().trim_end_matches('%').trim();
    if value.eq_ignore_ascii_case("n/a") {
        return Ok(None);
    }
    parse_decimal(value, "change percent").map(Some)
}

pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_price(value: &Decimal) -> String {
    format!("{:.2}", round_price(*value))
}

pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(percent) => format!("{}%", format_price(&percent)),
        None => String::from("N/A%"),
    }
}

pub fn is_end_of_week(now: &DateTime<FixedOffset>, end_of_week: Weekday) -> bool {
    now.weekday() == end_of_week
}
