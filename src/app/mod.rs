pub mod analysis;
pub mod calc;
pub mod fetcher;
pub mod input;
pub mod report;
pub mod utils;

pub use analysis::{RunReport, StockAnalysis};
pub use fetcher::PriceFetcher;
