use std::{path::PathBuf, time::Duration};

use anyhow::{Result, bail};
use chrono::{FixedOffset, Weekday};
use clap::Parser;
use derive_getters::Getters;
use derive_new::new;

use crate::models::QuoteProvider;

#[derive(Debug, Parser)]
#[command(
    name = "stock-report",
    version,
    about = "Fetches a stock quote and writes daily and end-of-week reports"
)]
pub struct Args {
    /// Ticker symbol to analyze. Prompted for when omitted.
    pub symbol: Option<String>,

    /// Directory the reports are written to
    #[arg(long, env = "STOCK_REPORT_DIR", default_value = "~/stock-reports")]
    pub report_dir: String,

    /// UTC offset of the reporting time zone, e.g. -05:00
    #[arg(
        long,
        env = "STOCK_REPORT_UTC_OFFSET",
        default_value = "-05:00",
        allow_hyphen_values = true,
        value_parser = parse_utc_offset
    )]
    pub utc_offset: FixedOffset,

    /// Day on which the end-of-week report is written
    #[arg(
        long,
        env = "STOCK_REPORT_END_OF_WEEK",
        default_value = "Fri",
        value_parser = parse_weekday
    )]
    pub end_of_week: Weekday,

    #[arg(long, env = "QUOTE_PROVIDER", value_enum, default_value_t = QuoteProvider::Yahoo)]
    pub provider: QuoteProvider,

    /// API key for the fmp provider
    #[arg(long, env = "FMP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Overrides the provider's base URL
    #[arg(long, env = "QUOTE_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "QUOTE_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    /// Keep earlier rows of the daily report instead of starting a new one
    #[arg(long)]
    pub accumulate: bool,
}

#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    report_dir: PathBuf,
    utc_offset: FixedOffset,
    end_of_week: Weekday,
    provider: QuoteProvider,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    accumulate: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let api_key = args
            .api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if args.provider.requires_api_key() && api_key.is_none() {
            bail!("Provider '{}' requires --api-key or FMP_API_KEY", args.provider);
        }

        if args.timeout_secs == 0 {
            bail!("--timeout-secs must be greater than zero");
        }

        let report_dir = PathBuf::from(shellexpand::tilde(args.report_dir.trim()).into_owned());

        Ok(Self::new(
            report_dir,
            args.utc_offset,
            args.end_of_week,
            args.provider,
            api_key,
            args.base_url.clone(),
            Duration::from_secs(args.timeout_secs),
            args.accumulate,
        ))
    }

    /// Base URL of the configured provider, honoring an override.
    pub fn quote_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }
}

/// Accepts `-05:00`, `+0530`, `-5`, `UTC` and `Z`.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset, String> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("utc") || value.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(|| String::from("invalid UTC offset"));
    }

    let (sign, rest) = match value.chars().next() {
        Some('-') => (-1, &value[1..]),
        Some('+') => (1, &value[1..]),
        _ => (1, value),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };

    let hours = hours
        .parse::<i32>()
        .map_err(|_| format!("invalid hours in UTC offset '{}'", raw))?;
    let minutes = minutes
        .parse::<i32>()
        .map_err(|_| format!("invalid minutes in UTC offset '{}'", raw))?;

    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(format!("UTC offset '{}' is out of range", raw));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| format!("UTC offset '{}' is out of range", raw))
}

pub fn parse_weekday(raw: &str) -> Result<Weekday, String> {
    raw.trim()
        .parse::<Weekday>()
        .map_err(|_| format!("invalid weekday '{}'", raw))
}
