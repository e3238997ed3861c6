use std::str::FromStr;

use log::debug;
use reqwest::RequestBuilder;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{PriceField, QuoteError};

/// Largest absolute price accepted from a quote source.
pub const MAX_PRICE: Decimal = dec!(1_000_000_000_000);

pub async fn make_request(request: RequestBuilder, symbol: &str) -> Result<String, QuoteError> {
    let res = request
        .send()
        .await
        .map_err(|source| QuoteError::Request {
            symbol: symbol.to_string(),
            source,
        })?;

    debug!("{} responded with {}", symbol, res.status());

    if !res.status().is_success() {
        return Err(QuoteError::Status {
            symbol: symbol.to_string(),
            status: res.status(),
        });
    }

    res.text().await.map_err(|source| QuoteError::Request {
        symbol: symbol.to_string(),
        source,
    })
}

/// Parses scraped price text, dropping thousands separators.
pub fn parse_price(text: &str, symbol: &str, field: PriceField) -> Result<Decimal, QuoteError> {
    let trimmed = text.trim();
    let value = Decimal::from_str(&trimmed.replace(',', "")).map_err(|_| QuoteError::Parse {
        symbol: symbol.to_string(),
        field,
        text: trimmed.to_string(),
    })?;

    check_price(value, symbol, field)
}

/// Rejects prices beyond `MAX_PRICE` so the derived figures cannot overflow.
pub fn check_price(value: Decimal, symbol: &str, field: PriceField) -> Result<Decimal, QuoteError> {
    if value.abs() > MAX_PRICE {
        return Err(QuoteError::OutOfRange {
            symbol: symbol.to_string(),
            field,
            value,
        });
    }
    Ok(value)
}
