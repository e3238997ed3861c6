use std::fmt;

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::ReportRecord;
use crate::app::{
    calc::{estimate_next_day, percent_change, price_change},
    utils::{format_percent, format_price},
};

/// The two prices a quote source reports for a symbol.
#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq, new)]
pub struct PriceFields {
    current_price: Decimal,
    previous_close: Decimal,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Quote {
    symbol: String,
    date: NaiveDate,
    current_price: Decimal,
    previous_close: Decimal,
}

impl Quote {
    pub fn from_fields(symbol: &str, date: NaiveDate, fields: PriceFields) -> Self {
        Self::new(
            symbol.to_string(),
            date,
            *fields.current_price(),
            *fields.previous_close(),
        )
    }

    pub fn price_change(&self) -> Decimal {
        price_change(self.current_price, self.previous_close)
    }

    /// `None` when the previous close is zero.
    pub fn change_percent(&self) -> Option<Decimal> {
        percent_change(self.current_price, self.previous_close)
    }

    pub fn next_day_price(&self) -> Decimal {
        estimate_next_day(self.current_price, self.price_change())
    }

    pub fn to_record(&self) -> ReportRecord {
        ReportRecord::new(
            self.date,
            self.current_price,
            self.price_change(),
            self.next_day_price(),
            self.change_percent(),
        )
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Analysis for {} on {}:",
            self.symbol,
            self.date.format("%Y-%m-%d")
        )?;
        writeln!(f, "Current Price: ${}", format_price(&self.current_price))?;
        writeln!(
            f,
            "Price Change: ${} ({})",
            format_price(&self.price_change()),
            format_percent(self.change_percent())
        )?;
        write!(
            f,
            "Estimated Next Day's Price: ${}",
            format_price(&self.next_day_price())
        )
    }
}
