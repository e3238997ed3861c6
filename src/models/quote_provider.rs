use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::api::{fmp, yahoo};

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, Eq, PartialEq, Serialize, ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuoteProvider {
    /// Scrapes the Yahoo Finance quote page.
    #[default]
    Yahoo,
    /// Financial Modeling Prep quote API.
    Fmp,
}

impl QuoteProvider {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            QuoteProvider::Yahoo => yahoo::BASE_URL,
            QuoteProvider::Fmp => fmp::BASE_URL,
        }
    }

    pub fn requires_api_key(&self) -> bool {
        matches!(self, QuoteProvider::Fmp)
    }
}
