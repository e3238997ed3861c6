use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::warn;

pub const PROMPT: &str = "Enter the stock symbol (e.g., NVDA): ";

pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Prompts for a symbol. A blank answer is returned as-is.
pub fn prompt_symbol<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .with_context(|| "Failed to read stock symbol")?;

    let symbol = normalize_symbol(&line);
    if symbol.is_empty() {
        warn!("No stock symbol entered");
    }

    Ok(symbol)
}

pub fn collect_symbol(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(raw) => Ok(normalize_symbol(raw)),
        None => prompt_symbol(&mut io::stdin().lock(), &mut io::stdout()),
    }
}
