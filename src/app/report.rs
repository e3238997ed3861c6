use std::{
    fmt::Write as _,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use csv::{Reader, WriterBuilder};
use log::warn;

use crate::{
    app::utils::format_price,
    models::{ReportRecord, WeeklySummary, report_record::HEADER},
};

pub fn daily_report_path(report_dir: &Path, symbol: &str) -> PathBuf {
    report_dir.join(format!("daily_{}_report.csv", symbol.to_lowercase()))
}

pub fn weekly_report_path(report_dir: &Path, symbol: &str) -> PathBuf {
    report_dir.join(format!("end_of_week_{}_report.txt", symbol.to_lowercase()))
}

/// Writes the header followed by every record, even when there are none.
pub fn write_daily_csv<W: Write>(writer: W, records: &[ReportRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer
        .write_record(HEADER)
        .with_context(|| "Failed to write CSV header")?;

    for (row_idx, record) in records.iter().enumerate() {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write CSV record at row {}", row_idx + 1))?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_daily_report(path: &Path, records: &[ReportRecord]) -> Result<()> {
    create_parent_dir(path)?;
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create daily report at {}", path.display()))?;
    write_daily_csv(file, records)
}

/// Rows read from an existing daily report, and how many could not be read.
#[derive(Debug, Default)]
pub struct LoadedReport {
    pub records: Vec<ReportRecord>,
    pub skipped: usize,
}

/// Reads a daily report, skipping rows that do not parse.
pub fn load_daily_report(path: &Path) -> Result<LoadedReport> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path.display()))?;

    let mut loaded = LoadedReport::default();
    for (row_idx, record) in reader.deserialize::<ReportRecord>().enumerate() {
        match record {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                warn!(
                    "Skipping CSV record at row {} of {}: {}",
                    row_idx + 1,
                    path.display(),
                    e
                );
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}

/// Copies `path` to `<path>.bak` and returns the copy's path.
pub fn back_up(path: &Path) -> Result<PathBuf> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);

    fs::copy(path, &backup).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            path.display(),
            backup.display()
        )
    })?;

    Ok(backup)
}

pub fn render_weekly_report(symbol: &str, summary: Option<&WeeklySummary>) -> String {
    let mut report = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(report, "End-of-Week Report for {} Stock", symbol);
    let _ = writeln!(report, "==========================================");
    let _ = writeln!(report, "Weekly Summary:");

    match summary {
        Some(summary) => {
            let _ = writeln!(report, "Start Price: ${}", format_price(summary.start_price()));
            let _ = writeln!(report, "End Price: ${}", format_price(summary.end_price()));
            let _ = writeln!(
                report,
                "Estimated Next Week's Price: ${}",
                format_price(summary.next_week_price())
            );
            let _ = writeln!(report, "Weekly Trend: {}", summary.trend());
        }
        None => {
            let _ = writeln!(report, "Insufficient data for weekly analysis.");
        }
    }

    report
}

pub fn write_weekly_report(
    path: &Path,
    symbol: &str,
    summary: Option<&WeeklySummary>,
) -> Result<()> {
    create_parent_dir(path)?;
    fs::write(path, render_weekly_report(symbol, summary))
        .with_context(|| format!("Failed to write end-of-week report at {}", path.display()))
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }
    Ok(())
}
