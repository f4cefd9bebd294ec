//! Pricing abstractions and core types

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;

/// A currency with a known, strictly positive unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub currency: String,
    /// Informational, never used in computation.
    pub date: String,
    pub price: f64,
}

/// A record as it appears on the wire, before filtering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPriceRecord {
    pub currency: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Drops records without a positive price, then keeps the first record seen
/// for each currency.
pub fn normalize_prices(raw: Vec<RawPriceRecord>) -> Vec<PriceRecord> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|record| match record.price {
            Some(price) if price > 0.0 => Some(PriceRecord {
                currency: record.currency,
                date: record.date,
                price,
            }),
            _ => None,
        })
        .filter(|record| seen.insert(record.currency.clone()))
        .collect()
}

/// Linear lookup of a currency's unit price.
pub fn find_price(prices: &[PriceRecord], currency: &str) -> Option<f64> {
    prices
        .iter()
        .find(|record| record.currency == currency)
        .map(|record| record.price)
}

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Returns the current price list, empty when the source is unavailable.
    async fn load_prices(&self) -> Vec<PriceRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(currency: &str, price: Option<f64>) -> RawPriceRecord {
        RawPriceRecord {
            currency: currency.to_string(),
            date: "2023-08-29T07:10:40.000Z".to_string(),
            price,
        }
    }

    #[test]
    fn test_normalize_drops_missing_and_zero_prices() {
        let prices = normalize_prices(vec![
            raw("A", Some(1.0)),
            raw("A", Some(2.0)),
            raw("B", Some(0.0)),
            raw("C", None),
        ]);

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].currency, "A");
        assert_eq!(prices[0].price, 1.0);
    }

    #[test]
    fn test_priceless_record_does_not_claim_currency() {
        let prices = normalize_prices(vec![raw("A", None), raw("A", Some(3.5))]);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].price, 3.5);
    }

    #[test]
    fn test_normalize_keeps_payload_order() {
        let prices = normalize_prices(vec![
            raw("ETH", Some(1645.9)),
            raw("USDC", Some(1.0)),
            raw("ETH", Some(1600.0)),
            raw("ATOM", Some(7.18)),
        ]);
        let currencies: Vec<_> = prices.iter().map(|p| p.currency.as_str()).collect();
        assert_eq!(currencies, ["ETH", "USDC", "ATOM"]);
    }

    #[test]
    fn test_raw_record_deserialization() {
        let json = r#"[
            {"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.208},
            {"currency": "bNEO", "date": "2023-08-29T07:10:50.000Z"}
        ]"#;
        let records: Vec<RawPriceRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].price, Some(0.208));
        assert!(records[1].price.is_none());
    }

    #[test]
    fn test_find_price() {
        let prices = normalize_prices(vec![raw("A", Some(2.0)), raw("B", Some(4.0))]);
        assert_eq!(find_price(&prices, "B"), Some(4.0));
        assert_eq!(find_price(&prices, "Z"), None);
    }
}
