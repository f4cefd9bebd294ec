//! Converts amounts between currencies using the ratio of their unit prices.
use crate::core::price::{PriceRecord, find_price};
use rust_decimal::Decimal;
use tracing::debug;

/// Computes `amount * from_price / to_price`.
///
/// Returns `None` when either currency is absent from `prices`, its price
/// cannot be represented as a `Decimal`, or the result overflows. Validation
/// rejects the overflowing amounts up front. A same-currency conversion
/// yields `amount` unchanged.
pub fn convert(
    amount: Decimal,
    from_currency: &str,
    to_currency: &str,
    prices: &[PriceRecord],
) -> Option<Decimal> {
    let (Some(from_price), Some(to_price)) = (
        find_price(prices, from_currency),
        find_price(prices, to_currency),
    ) else {
        debug!("Price not found for {from_currency} or {to_currency}");
        return None;
    };

    let from_price = Decimal::try_from(from_price).ok()?;
    let to_price = Decimal::try_from(to_price).ok()?;
    let converted = amount.checked_mul(from_price)?.checked_div(to_price)?;
    debug!(
        "Converted {amount} {from_currency} at {from_price} to {converted} {to_currency} at {to_price}"
    );
    Some(converted)
}

/// Currencies a picker may offer, excluding the one selected in the other picker.
pub fn currency_options<'a>(
    prices: &'a [PriceRecord],
    exclude: Option<&str>,
) -> Vec<&'a PriceRecord> {
    prices
        .iter()
        .filter(|record| Some(record.currency.as_str()) != exclude)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> Vec<PriceRecord> {
        vec![
            PriceRecord {
                currency: "A".to_string(),
                date: String::new(),
                price: 2.0,
            },
            PriceRecord {
                currency: "B".to_string(),
                date: String::new(),
                price: 4.0,
            },
        ]
    }

    #[test]
    fn test_convert_uses_price_ratio() {
        let result = convert(Decimal::from(10), "A", "B", &prices());
        assert_eq!(result, Some(Decimal::from(5)));

        let result = convert(Decimal::from(10), "B", "A", &prices());
        assert_eq!(result, Some(Decimal::from(20)));
    }

    #[test]
    fn test_convert_unknown_currency_is_unavailable() {
        assert_eq!(convert(Decimal::from(10), "A", "Z", &prices()), None);
        assert_eq!(convert(Decimal::from(10), "Z", "A", &prices()), None);
        assert_eq!(convert(Decimal::from(10), "A", "B", &[]), None);
    }

    #[test]
    fn test_convert_same_currency_is_identity() {
        let amount = Decimal::new(1234, 2);
        assert_eq!(convert(amount, "A", "A", &prices()), Some(amount));
    }

    #[test]
    fn test_convert_is_idempotent() {
        let list = prices();
        let amount = Decimal::new(75, 1);
        let first = convert(amount, "B", "A", &list);
        for _ in 0..10 {
            assert_eq!(convert(amount, "B", "A", &list), first);
        }
        assert_eq!(first, Some(Decimal::from(15)));
    }

    #[test]
    fn test_convert_overflow_is_unavailable() {
        assert_eq!(convert(Decimal::MAX, "A", "B", &prices()), None);
        assert_eq!(convert(Decimal::MAX, "B", "A", &prices()), None);
    }

    #[test]
    fn test_currency_options_exclude_selection() {
        let list = prices();
        let options: Vec<_> = currency_options(&list, Some("A"))
            .iter()
            .map(|p| p.currency.as_str())
            .collect();
        assert_eq!(options, ["B"]);
        assert_eq!(currency_options(&list, None).len(), 2);
    }
}
