use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::app::utils::{format_percent, format_price, parse_decimal, parse_percent};

pub const HEADER: [&str; 5] = [
    "Date",
    "Current Price",
    "Price Change",
    "Next Day's Price",
    "Change Percent",
];

/// One row of the daily report.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct ReportRecord {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(
        rename = "Current Price",
        serialize_with = "serialize_price",
        deserialize_with = "deserialize_price"
    )]
    current_price: Decimal,
    #[serde(
        rename = "Price Change",
        serialize_with = "serialize_price",
        deserialize_with = "deserialize_price"
    )]
    price_change: Decimal,
    #[serde(
        rename = "Next Day's Price",
        serialize_with = "serialize_price",
        deserialize_with = "deserialize_price"
    )]
    next_day_price: Decimal,
    #[serde(
        rename = "Change Percent",
        serialize_with = "serialize_percent",
        deserialize_with = "deserialize_percent"
    )]
    change_percent: Option<Decimal>,
}

fn serialize_price<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_price(value))
}

fn serialize_percent<S: Serializer>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_percent(*value))
}

fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_decimal(raw.trim(), "price").map_err(|e| D::Error::custom(format!("{:#}", e)))
}

fn deserialize_percent<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_percent(&raw).map_err(|e| D::Error::custom(format!("{:#}", e)))
}
