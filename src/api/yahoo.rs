use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use scraper::{Html, Selector};

use super::{
    PriceField, QuoteError,
    utils::{make_request, parse_price},
};
use crate::models::PriceFields;

pub const BASE_URL: &str = "https://finance.yahoo.com";

// Tried in order; the last entries match the older quote page layout.
const CURRENT_PRICE_SELECTORS: &[&str] = &[
    "[data-testid='qsp-price']",
    "fin-streamer[data-field='regularMarketPrice']",
    "span[data-reactid='32']",
];

const PREVIOUS_CLOSE_SELECTORS: &[&str] = &[
    "fin-streamer[data-field='regularMarketPreviousClose']",
    "[data-field='regularMarketPreviousClose']",
    "td[data-test='PREV_CLOSE-value']",
];

pub async fn get_price_fields(
    symbol: &str,
    client: &Client,
    base_url: &str,
) -> Result<PriceFields, QuoteError> {
    let url = format!("{}/quote/{}", base_url.trim_end_matches('/'), symbol);
    debug!("Fetching {}", url);

    let body = make_request(client.get(&url), symbol).await?;
    parse_quote_page(&body, symbol)
}

/// Extracts current price and previous close from a quote page.
pub fn parse_quote_page(html: &str, symbol: &str) -> Result<PriceFields, QuoteError> {
    let document = Html::parse_document(html);

    let current_price = select_price(
        &document,
        symbol,
        PriceField::CurrentPrice,
        CURRENT_PRICE_SELECTORS,
    )?;
    let previous_close = select_price(
        &document,
        symbol,
        PriceField::PreviousClose,
        PREVIOUS_CLOSE_SELECTORS,
    )?;

    Ok(PriceFields::new(current_price, previous_close))
}

fn select_price(
    document: &Html,
    symbol: &str,
    field: PriceField,
    selectors: &[&str],
) -> Result<Decimal, QuoteError> {
    let text = select_text(document, selectors).ok_or_else(|| QuoteError::NotFound {
        symbol: symbol.to_string(),
        field,
    })?;

    parse_price(&text, symbol, field)
}

fn select_text(document: &Html, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|selector| {
            // Placeholders render empty until the page hydrates.
            document
                .select(&selector)
                .map(|element| element.text().collect::<String>())
                .find(|text| !text.trim().is_empty())
        })
}
