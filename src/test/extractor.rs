#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::app::TradeExtractor;
    use crate::app::extractor::AMOUNT_MARKER;
    use crate::models::TradeAction;

    fn to_lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn single_line_trade_works() {
        let lines = to_lines(&[
            &format!(
                "Buy trade US0378331005 Apple Inc., quantity: 10 {}1,000.50",
                AMOUNT_MARKER
            ),
            "Saldo per 30.06.2025",
            "Kartenzahlung Supermarkt 23,10",
        ]);

        let extractor = TradeExtractor::new().unwrap();
        let trades = extractor.extract(&lines);

        assert_eq!(trades.len(), 1);
        assert_eq!(*trades[0].action(), TradeAction::Buy);
        assert_eq!(trades[0].isin(), "US0378331005");
        assert_eq!(trades[0].name(), "Apple Inc.");
        assert_eq!(*trades[0].quantity(), dec!(10));
        assert_eq!(*trades[0].amount(), dec!(1000.50));
    }

    #[test]
    fn wrapped_trade_works() {
        let lines = to_lines(&[
            "Buy trade",
            "IE00B4L5Y983 iShares Core MSCI",
            "World UCITS ETF, quantity:",
            &format!("12.345 {}987.65", AMOUNT_MARKER),
        ]);

        let extractor = TradeExtractor::new().unwrap();
        let trades = extractor.extract(&lines);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].isin(), "IE00B4L5Y983");
        assert_eq!(trades[0].name(), "iShares Core MSCI World UCITS ETF");
        assert_eq!(*trades[0].quantity(), dec!(12.345));
        assert_eq!(*trades[0].amount(), dec!(987.65));
    }

    #[test]
    fn thousands_separators_are_stripped() {
        let lines = to_lines(&[&format!(
            "Sell trade DE0007164600 SAP SE, quantity: 1,234.5 {}10,000.99",
            AMOUNT_MARKER
        )]);

        let extractor = TradeExtractor::new().unwrap();
        let trades = extractor.extract(&lines);

        assert_eq!(trades.len(), 1);
        assert_eq!(*trades[0].action(), TradeAction::Sell);
        assert_eq!(*trades[0].quantity(), dec!(1234.5));
        assert_eq!(*trades[0].amount(), dec!(10000.99));
    }

    #[test]
    fn malformed_number_skips_candidate() {
        let lines = to_lines(&[
            &format!(
                "Sell trade DE0007164600 SAP SE, quantity: 1.2.3 {}100.00",
                AMOUNT_MARKER
            ),
            &format!(
                "Buy trade US0378331005 Apple Inc., quantity: 2 {}400.00",
                AMOUNT_MARKER
            ),
        ]);

        let extractor = TradeExtractor::new().unwrap();
        let trades = extractor.extract(&lines);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].isin(), "US0378331005");
    }

    #[test]
    fn zero_quantity_has_zero_unit_price() {
        let lines = to_lines(&[&format!(
            "Buy trade XS0000000000 Zero Bond, quantity: 0 {}0",
            AMOUNT_MARKER
        )]);

        let extractor = TradeExtractor::new().unwrap();
        let trades = extractor.extract(&lines);

        assert_eq!(trades.len(), 1);
        assert_eq!(*trades[0].quantity(), Decimal::ZERO);
        assert_eq!(trades[0].unit_price(), Decimal::ZERO);
    }

    #[test]
    fn non_matching_text_yields_nothing() {
        let lines = to_lines(&[
            "Umsatzuebersicht Verrechnungskonto",
            "Kartenzahlung REWE Markt 23,10",
            "Zinsen 0,01",
        ]);

        let extractor = TradeExtractor::new().unwrap();
        let trades = extractor.extract(&lines);

        assert!(trades.is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let lines = to_lines(&[
            &format!(
                "Buy trade US0378331005 Apple Inc., quantity: 10 {}1,000.50",
                AMOUNT_MARKER
            ),
            &format!(
                "Sell trade US0378331005 Apple Inc., quantity: 4 {}600.00",
                AMOUNT_MARKER
            ),
        ]);

        let extractor = TradeExtractor::new().unwrap();
        let first = extractor.extract(&lines);
        let second = extractor.extract(&lines);

        assert_eq!(first, second);
    }

    #[test]
    fn trade_visible_from_two_window_starts_counts_twice() {
        // The scanner advances one line at a time and never deduplicates,
        // so an entry preceded by a non-matching line is seen again from
        // the window starting on that line.
        let lines = to_lines(&[
            "Saldo per 30.06.2025",
            &format!(
                "Buy trade US0378331005 Apple Inc., quantity: 1 {}100.00",
                AMOUNT_MARKER
            ),
        ]);

        let extractor = TradeExtractor::new().unwrap();
        let trades = extractor.extract(&lines);

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0], trades[1]);
    }
}
