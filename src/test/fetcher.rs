#[cfg(test)]
mod tests {
    use std::{
        path::PathBuf,
        time::{Duration, Instant},
    };

    use chrono::{FixedOffset, Weekday};

    use crate::{
        api::QuoteError,
        app::PriceFetcher,
        config::Config,
        models::QuoteProvider,
        test::serve_silently,
    };

    fn config(base_url: String, timeout: Duration) -> Config {
        Config::new(
            PathBuf::from("reports"),
            FixedOffset::west_opt(5 * 3600).unwrap(),
            Weekday::Fri,
            QuoteProvider::Yahoo,
            None,
            Some(base_url),
            timeout,
            false,
        )
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let base_url = serve_silently().await;
        let fetcher = PriceFetcher::from_config(&config(base_url, Duration::from_secs(1))).unwrap();

        let started = Instant::now();
        let err = tokio::time::timeout(Duration::from_secs(5), fetcher.fetch_price_fields("NVDA"))
            .await
            .expect("fetch outlived its timeout")
            .unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(err.is_fetch_error());
        match err {
            QuoteError::Request { source, .. } => assert!(source.is_timeout()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
