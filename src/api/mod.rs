pub mod error;
pub mod fmp;
pub mod fmp_dto;
pub mod utils;
pub mod yahoo;

pub use error::{PriceField, QuoteError};
