use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::debug;
use reqwest::Client;

use crate::{
    api::{QuoteError, fmp, yahoo},
    config::Config,
    models::{PriceFields, QuoteProvider},
};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(8);

/// Fetches current price and previous close from the configured provider.
#[derive(Clone, Debug)]
pub struct PriceFetcher {
    client: Client,
    provider: QuoteProvider,
    base_url: String,
    api_key: Option<String>,
}

impl PriceFetcher {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(*config.timeout()))
            .timeout(*config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Self::with_client(
            client,
            *config.provider(),
            config.quote_base_url(),
            config.api_key().clone(),
        )
    }

    pub fn with_client(
        client: Client,
        provider: QuoteProvider,
        base_url: &str,
        api_key: Option<String>,
    ) -> Result<Self> {
        if provider.requires_api_key() && api_key.is_none() {
            bail!("Provider '{}' requires an API key", provider);
        }

        Ok(Self {
            client,
            provider,
            base_url: base_url.to_string(),
            api_key,
        })
    }

    pub fn provider(&self) -> &QuoteProvider {
        &self.provider
    }

    pub async fn fetch_price_fields(&self, symbol: &str) -> Result<PriceFields, QuoteError> {
        debug!("Fetching {} from {}", symbol, self.provider);

        match self.provider {
            QuoteProvider::Yahoo => {
                yahoo::get_price_fields(symbol, &self.client, &self.base_url).await
            }
            QuoteProvider::Fmp => {
                let api_key = self.api_key.as_deref().unwrap_or_default();
                fmp::get_quote(symbol, &self.client, &self.base_url, api_key)
                    .await
                    .map(|quote| quote.to_price_fields())
            }
        }
    }
}
