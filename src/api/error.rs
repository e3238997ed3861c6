use reqwest::StatusCode;
use rust_decimal::Decimal;
use strum_macros::Display;
use thiserror::Error;

/// Which of the two scraped values a failure refers to.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum PriceField {
    #[strum(serialize = "current price")]
    CurrentPrice,
    #[strum(serialize = "previous close")]
    PreviousClose,
}

/// Failure to obtain prices for a symbol.
///
/// `NotFound` means the source answered but did not carry the value (markup
/// changed, unknown symbol). Every other variant is a fetch error.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Request for {symbol} failed: {source}")]
    Request {
        symbol: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for {symbol} failed with status {status}")]
    Status { symbol: String, status: StatusCode },

    #[error("Failed to find the {field} element for {symbol}")]
    NotFound { symbol: String, field: PriceField },

    #[error("Failed to parse {field} '{text}' for {symbol}")]
    Parse {
        symbol: String,
        field: PriceField,
        text: String,
    },

    #[error("The {field} {value} for {symbol} is out of range")]
    OutOfRange {
        symbol: String,
        field: PriceField,
        value: Decimal,
    },

    #[error("Unexpected response for {symbol}: {message}")]
    InvalidResponse { symbol: String, message: String },
}

impl QuoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuoteError::NotFound { .. })
    }

    pub fn is_fetch_error(&self) -> bool {
        !self.is_not_found()
    }

    pub fn symbol(&self) -> &str {
        match self {
            QuoteError::Request { symbol, .. }
            | QuoteError::Status { symbol, .. }
            | QuoteError::NotFound { symbol, .. }
            | QuoteError::Parse { symbol, .. }
            | QuoteError::OutOfRange { symbol, .. }
            | QuoteError::InvalidResponse { symbol, .. } => symbol,
        }
    }
}
