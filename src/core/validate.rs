//! Turns raw swap form input into a [`ConversionRequest`].
use crate::core::convert::convert;
use crate::core::price::{PriceRecord, find_price};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Unvalidated user input, as typed.
#[derive(Debug, Clone, Default)]
pub struct SwapInput {
    pub amount: String,
    pub from_currency: String,
    pub to_currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: Decimal,
    pub from_currency: String,
    pub to_currency: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount is required")]
    AmountRequired,
    #[error("Amount is not a number: {0}")]
    InvalidAmount(String),
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
    #[error("Please select a {0} currency")]
    CurrencyRequired(&'static str),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Cannot convert {0} to itself")]
    SameCurrency(String),
    #[error("Amount {0} is too large to convert")]
    AmountTooLarge(Decimal),
}

pub fn validate(
    input: &SwapInput,
    prices: &[PriceRecord],
) -> Result<ConversionRequest, ValidationError> {
    let amount = parse_amount(&input.amount)?;
    let from_currency = known_currency(&input.from_currency, "source", prices)?;
    let to_currency = known_currency(&input.to_currency, "target", prices)?;

    if from_currency == to_currency {
        return Err(ValidationError::SameCurrency(from_currency));
    }
    // Both prices exist, so a missing result means the ratio overflowed.
    if convert(amount, &from_currency, &to_currency, prices).is_none() {
        return Err(ValidationError::AmountTooLarge(amount));
    }

    Ok(ConversionRequest {
        amount,
        from_currency,
        to_currency,
    })
}

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::AmountRequired);
    }

    let amount = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(amount)
}

fn known_currency(
    raw: &str,
    side: &'static str,
    prices: &[PriceRecord],
) -> Result<String, ValidationError> {
    let currency = raw.trim();
    if currency.is_empty() {
        return Err(ValidationError::CurrencyRequired(side));
    }
    match find_price(prices, currency) {
        Some(_) => Ok(currency.to_string()),
        None => Err(ValidationError::UnknownCurrency(currency.to_string())),
    }
}
