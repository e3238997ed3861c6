#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        api::{PriceField, QuoteError, fmp},
        app::PriceFetcher,
        models::QuoteProvider,
        test::{serve, serve_capturing, test_client},
    };

    const SYMBOL: &str = "AAPL";

    #[tokio::test]
    async fn get_quote_works() {
        let body = r#"[{"symbol":"AAPL","name":"Apple Inc.","price":150.25,"changePercentage":1.52027,"change":2.25,"previousClose":148.0,"exchange":"NASDAQ","timestamp":1704488400}]"#;
        let base_url = serve("200 OK", body.to_string(), 1).await;

        let quote = fmp::get_quote(SYMBOL, &test_client(), &base_url, "demo")
            .await
            .unwrap();

        assert_eq!(quote.symbol(), SYMBOL);
        assert_eq!(*quote.to_price_fields().current_price(), dec!(150.25));
        assert_eq!(*quote.to_price_fields().previous_close(), dec!(148));
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let base_url = serve("200 OK", String::from("[]"), 1).await;

        let err = fmp::get_quote("NOPE", &test_client(), &base_url, "demo")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn error_message_is_invalid_response() {
        let body = r#"{"Error Message":"Invalid API KEY."}"#;
        let base_url = serve("200 OK", body.to_string(), 1).await;

        let err = fmp::get_quote(SYMBOL, &test_client(), &base_url, "bad")
            .await
            .unwrap_err();

        assert!(matches!(err, QuoteError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn query_parameters_are_encoded() {
        let body = r#"[{"symbol":"BRK&B","price":10.5,"previousClose":10}]"#;
        let (base_url, request) = serve_capturing(body.to_string()).await;

        fmp::get_quote("BRK&B=1", &test_client(), &base_url, "k&y")
            .await
            .unwrap();

        let request = request.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "GET /quote?symbol=BRK%26B%3D1&apikey=k%26y HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn oversized_previous_close_is_out_of_range() {
        let body = r#"[{"symbol":"AAPL","price":10.5,"previousClose":2000000000000}]"#;
        let base_url = serve("200 OK", body.to_string(), 1).await;

        let err = fmp::get_quote(SYMBOL, &test_client(), &base_url, "demo")
            .await
            .unwrap_err();

        assert!(err.is_fetch_error());
        assert!(matches!(
            err,
            QuoteError::OutOfRange {
                field: PriceField::PreviousClose,
                ..
            }
        ));
    }

    #[test]
    fn fetcher_requires_api_key() {
        assert!(PriceFetcher::with_client(test_client(), QuoteProvider::Fmp, fmp::BASE_URL, None).is_err());
        assert!(
            PriceFetcher::with_client(
                test_client(),
                QuoteProvider::Fmp,
                fmp::BASE_URL,
                Some(String::from("demo"))
            )
            .is_ok()
        );
    }

    #[tokio::test]
    async fn fetcher_dispatches_to_fmp() {
        let body = r#"[{"symbol":"AAPL","price":10.5,"previousClose":10}]"#;
        let base_url = serve("200 OK", body.to_string(), 1).await;
        let fetcher = PriceFetcher::with_client(
            test_client(),
            QuoteProvider::Fmp,
            &base_url,
            Some(String::from("demo")),
        )
        .unwrap();

        let fields = fetcher.fetch_price_fields(SYMBOL).await.unwrap();

        assert_eq!(*fields.current_price(), dec!(10.5));
        assert_eq!(*fields.previous_close(), dec!(10));
    }
}
