use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use log::info;

use stock_report::{
    app::{StockAnalysis, input},
    config::{Args, Config},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let args = Args::parse();
    let config = Config::from_args(&args)?;
    let symbol = input::collect_symbol(args.symbol.as_deref())?;

    info!(
        "Analyzing {} via {}, reports in {}",
        symbol,
        config.provider(),
        config.report_dir().display()
    );

    let now = Utc::now().with_timezone(config.utc_offset());
    let mut analysis = StockAnalysis::new(&symbol, config)?;
    let report = analysis.run(now).await;

    if let Ok(quote) = &report.quote {
        println!("{}", quote);
    }
    if let Some(path) = &report.daily_report {
        println!("Daily report generated: {}", path.display());
    }
    if let Some(path) = &report.weekly_report {
        println!("End-of-week report generated: {}", path.display());
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
