use log::debug;
use reqwest::Client;

use super::{
    PriceField, QuoteError,
    fmp_dto::FmpQuoteDto,
    utils::{check_price, make_request},
};

pub const BASE_URL: &str = "https://financialmodelingprep.com/stable";

pub async fn get_quote(
    symbol: &str,
    client: &Client,
    base_url: &str,
    api_key: &str,
) -> Result<FmpQuoteDto, QuoteError> {
    let url = format!("{}/quote", base_url.trim_end_matches('/'));
    let request = client
        .get(url)
        .query(&[("symbol", symbol), ("apikey", api_key)]);
    let text = make_request(request, symbol).await?;

    let quotes = serde_json::from_str::<Vec<FmpQuoteDto>>(&text).map_err(|e| {
        QuoteError::InvalidResponse {
            symbol: symbol.to_string(),
            message: e.to_string(),
        }
    })?;

    debug!("FMP returned {} quote(s) for {}", quotes.len(), symbol);

    // FMP answers an unknown symbol with an empty array
    let quote = quotes
        .into_iter()
        .next()
        .ok_or_else(|| QuoteError::NotFound {
            symbol: symbol.to_string(),
            field: PriceField::CurrentPrice,
        })?;

    check_price(*quote.price(), symbol, PriceField::CurrentPrice)?;
    check_price(*quote.previous_close(), symbol, PriceField::PreviousClose)?;

    Ok(quote)
}
