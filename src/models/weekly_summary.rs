use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::{ReportRecord, Trend};
use crate::app::calc::{classify_trend, estimate_next_week};

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct WeeklySummary {
    start_price: Decimal,
    end_price: Decimal,
    next_week_price: Decimal,
    trend: Trend,
}

impl WeeklySummary {
    /// Summarizes the first and last record. Returns `None` with fewer than two
    /// records or when the two prices cannot be averaged.
    pub fn from_records(records: &[ReportRecord]) -> Option<Self> {
        if records.len() < 2 {
            return None;
        }

        let start_price = *records.first()?.current_price();
        let end_price = *records.last()?.current_price();

        Some(Self::new(
            start_price,
            end_price,
            estimate_next_week(start_price, end_price)?,
            classify_trend(start_price, end_price),
        ))
    }
}
