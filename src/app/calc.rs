use std::cmp::Ordering;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Trend;

/// Both prices are expected within `api::utils::MAX_PRICE`.
pub fn price_change(current_price: Decimal, previous_close: Decimal) -> Decimal {
    current_price - previous_close
}

/// Percent move from the previous close. `None` if the previous close is zero.
pub fn percent_change(current_price: Decimal, previous_close: Decimal) -> Option<Decimal> {
    price_change(current_price, previous_close)
        .checked_div(previous_close)?
        .checked_mul(dec!(100))
}

/// Naive linear projection: the next day moves by the same amount as today.
pub fn estimate_next_day(current_price: Decimal, price_change: Decimal) -> Decimal {
    current_price + price_change
}

/// Average of the week's first and last price. `None` if the sum overflows.
pub fn estimate_next_week(week_start_price: Decimal, week_end_price: Decimal) -> Option<Decimal> {
    week_start_price
        .checked_add(week_end_price)?
        .checked_div(dec!(2))
}

pub fn classify_trend(start_price: Decimal, end_price: Decimal) -> Trend {
    match end_price.cmp(&start_price) {
        Ordering::Greater => Trend::Upward,
        Ordering::Less => Trend::Downward,
        Ordering::Equal => Trend::NoSignificantChange,
    }
}
