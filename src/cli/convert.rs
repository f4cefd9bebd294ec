use super::ui;
use crate::core::{PriceRecord, PriceSource, SwapInput, SwapSession, ValidationError};
use crate::core::price::find_price;
use crate::core::{currency_options, validate};
use anyhow::Context;
use std::time::Duration;
use tracing::debug;

pub async fn run(
    source: &(dyn PriceSource + Send + Sync),
    input: &SwapInput,
    delay: Duration,
) -> anyhow::Result<()> {
    let pb = ui::new_spinner("Fetching prices...");
    let prices = source.load_prices().await;
    pb.finish_and_clear();

    let request = match validate(input, &prices) {
        Ok(request) => request,
        Err(e) => {
            if let ValidationError::UnknownCurrency(_) = e {
                print_options(&prices, input);
            }
            return Err(e).context("Invalid conversion request");
        }
    };
    debug!(?request, "Validated conversion request");

    let session = SwapSession::new(prices, delay);
    let pb = ui::new_spinner("Fetching Exchange Rate...");
    let result = session.submit(&request).await;
    pb.finish_and_clear();

    match result? {
        Some(converted) if !converted.is_zero() => {
            println!(
                "\n{} {} ≈ {} {}",
                ui::format_amount(request.amount, 0),
                request.from_currency,
                ui::style_text(&ui::format_amount(converted, 2), ui::StyleType::TotalValue),
                request.to_currency
            );
        }
        _ => {
            println!(
                "{}",
                ui::style_text(
                    &format!(
                        "No rate available for {} to {}",
                        request.from_currency, request.to_currency
                    ),
                    ui::StyleType::Subtle
                )
            );
        }
    }
    Ok(())
}

/// Lists the currencies the unknown side could have been, skipping the other side.
fn print_options(prices: &[PriceRecord], input: &SwapInput) {
    let from = input.from_currency.trim();
    let exclude = if find_price(prices, from).is_some() {
        from
    } else {
        input.to_currency.trim()
    };
    let options: Vec<_> = currency_options(prices, Some(exclude))
        .iter()
        .map(|p| p.currency.as_str())
        .collect();
    if options.is_empty() {
        println!(
            "{}",
            ui::style_text("No prices available from the feed.", ui::StyleType::Subtle)
        );
    } else {
        println!(
            "{} {}",
            ui::style_text("Available:", ui::StyleType::TotalLabel),
            options.join(", ")
        );
    }
}
