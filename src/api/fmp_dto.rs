use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::PriceFields;

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct FmpQuoteDto {
    symbol: String,
    name: Option<String>,
    price: Decimal,
    change: Option<Decimal>,
    change_percentage: Option<Decimal>,
    previous_close: Decimal,
    exchange: Option<String>,
    timestamp: Option<i64>,
}

impl FmpQuoteDto {
    pub fn to_price_fields(&self) -> PriceFields {
        PriceFields::new(self.price, self.previous_close)
    }
}
