pub mod quote;
pub mod quote_provider;
pub mod report_record;
pub mod trend;
pub mod weekly_summary;

pub use quote::{PriceFields, Quote};
pub use quote_provider::QuoteProvider;
pub use report_record::ReportRecord;
pub use trend::Trend;
pub use weekly_summary::WeeklySummary;
