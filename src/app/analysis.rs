use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use log::{debug, error, info, warn};

use crate::{
    api::QuoteError,
    app::{PriceFetcher, report, utils::is_end_of_week},
    config::Config,
    models::{Quote, ReportRecord, WeeklySummary},
};

/// Outcome of one pass through the pipeline.
#[derive(Debug)]
pub struct RunReport {
    pub quote: Result<Quote, QuoteError>,
    pub daily_report: Option<PathBuf>,
    pub weekly_report: Option<PathBuf>,
}

pub struct StockAnalysis {
    symbol: String,
    config: Config,
    fetcher: PriceFetcher,
    records: Vec<ReportRecord>,
    // Set when a damaged daily report could not be backed up.
    keep_existing: bool,
}

impl StockAnalysis {
    pub fn new(symbol: &str, config: Config) -> Result<Self> {
        let fetcher = PriceFetcher::from_config(&config)?;
        Ok(Self::with_fetcher(symbol, config, fetcher))
    }

    pub fn with_fetcher(symbol: &str, config: Config, fetcher: PriceFetcher) -> Self {
        let mut analysis = Self {
            symbol: symbol.to_string(),
            config,
            fetcher,
            records: Vec::new(),
            keep_existing: false,
        };

        if *analysis.config.accumulate() {
            analysis.load_records();
        }

        analysis
    }

    fn load_records(&mut self) {
        let path = self.daily_report_path();
        if !path.exists() {
            return;
        }

        let intact = match report::load_daily_report(&path) {
            Ok(loaded) => {
                info!(
                    "Loaded {} earlier record(s) from {}",
                    loaded.records.len(),
                    path.display()
                );
                self.records = loaded.records;
                loaded.skipped == 0
            }
            Err(e) => {
                warn!("Failed to read daily report {}: {:?}", path.display(), e);
                false
            }
        };

        if intact {
            return;
        }

        match report::back_up(&path) {
            Ok(backup) => warn!(
                "Daily report {} was damaged, original kept at {}",
                path.display(),
                backup.display()
            ),
            Err(e) => {
                error!("Leaving damaged daily report in place: {:?}", e);
                self.keep_existing = true;
            }
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn daily_report_path(&self) -> PathBuf {
        report::daily_report_path(self.config.report_dir(), &self.symbol)
    }

    pub fn weekly_report_path(&self) -> PathBuf {
        report::weekly_report_path(self.config.report_dir(), &self.symbol)
    }

    /// Fetches prices and records the resulting quote. A failed fetch records nothing.
    pub async fn analyze(&mut self, now: &DateTime<FixedOffset>) -> Result<Quote, QuoteError> {
        let fields = self.fetcher.fetch_price_fields(&self.symbol).await?;
        let quote = Quote::from_fields(&self.symbol, now.date_naive(), fields);
        self.record(quote.to_record());
        Ok(quote)
    }

    /// Appends a record. In accumulate mode a record replaces any held record of the same date.
    pub fn record(&mut self, record: ReportRecord) {
        if *self.config.accumulate() {
            self.records.retain(|held| held.date() != record.date());
        }
        self.records.push(record);
    }

    pub fn write_daily_report(&self) -> Result<PathBuf> {
        let path = self.daily_report_path();
        if self.keep_existing {
            bail!("Not overwriting {} without a backup", path.display());
        }
        report::write_daily_report(&path, &self.records)?;
        Ok(path)
    }

    /// Summary over the held records that fall in the same ISO week as `today`.
    pub fn weekly_summary(&self, today: NaiveDate) -> Option<WeeklySummary> {
        let week = today.iso_week();
        let this_week: Vec<ReportRecord> = self
            .records
            .iter()
            .filter(|record| record.date().iso_week() == week)
            .cloned()
            .collect();

        WeeklySummary::from_records(&this_week)
    }

    pub fn write_weekly_report(&self, today: NaiveDate) -> Result<PathBuf> {
        let path = self.weekly_report_path();
        let summary = self.weekly_summary(today);
        if summary.is_none() {
            warn!("Cannot summarize this week's records for {}", self.symbol);
        }
        report::write_weekly_report(&path, &self.symbol, summary.as_ref())?;
        Ok(path)
    }

    pub async fn run(&mut self, now: DateTime<FixedOffset>) -> RunReport {
        let quote = self.analyze(&now).await;

        match &quote {
            Ok(quote) => info!(
                "{}: current {} previous close {}",
                quote.symbol(),
                quote.current_price(),
                quote.previous_close()
            ),
            Err(e) if e.is_not_found() => error!("Symbol lookup failed: {}", e),
            Err(e) => error!("Failed to fetch quote: {}", e),
        }

        let daily_report = match self.write_daily_report() {
            Ok(path) => Some(path),
            Err(e) => {
                error!("Failed to write daily report for {}: {:?}", self.symbol, e);
                None
            }
        };

        let weekly_report = if is_end_of_week(&now, *self.config.end_of_week()) {
            match self.write_weekly_report(now.date_naive()) {
                Ok(path) => Some(path),
                Err(e) => {
                    error!(
                        "Failed to write end-of-week report for {}: {:?}",
                        self.symbol, e
                    );
                    None
                }
            }
        } else {
            debug!(
                "{} is not {}, skipping end-of-week report",
                now.weekday(),
                self.config.end_of_week()
            );
            None
        };

        RunReport {
            quote,
            daily_report,
            weekly_report,
        }
    }
}
