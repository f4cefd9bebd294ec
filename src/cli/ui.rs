use chrono::DateTime;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::{Decimal, RoundingStrategy};
use std::time::Duration;

const MAX_FRACTION_DIGITS: u32 = 3;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right aligned cell for numeric values.
pub fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a cell for "N/A" values, with error-specific styling.
pub fn na_cell(has_error: bool) -> Cell {
    let color = if has_error {
        Color::Red
    } else {
        Color::DarkGrey
    };
    Cell::new("N/A").fg(color)
}

/// Creates a spinner shown while `message` is pending.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let template = "{spinner:.green} {msg}";
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template(template) {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Formats an amount with thousands separators and between
/// `min_fraction_digits` and three fraction digits.
pub fn format_amount(value: Decimal, min_fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut fraction = frac_part.to_string();
    while (fraction.len() as u32) < min_fraction_digits.min(MAX_FRACTION_DIGITS) {
        fraction.push('0');
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Shows RFC 3339 feed dates as `YYYY-MM-DD HH:MM`, anything else verbatim.
pub fn format_feed_date(date: &str) -> String {
    DateTime::parse_from_rfc3339(date)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec("1234567.5"), 2), "1,234,567.50");
        assert_eq!(format_amount(dec("999"), 0), "999");
        assert_eq!(format_amount(dec("1000"), 0), "1,000");
    }

    #[test]
    fn test_format_amount_fraction_digits() {
        assert_eq!(format_amount(dec("5"), 2), "5.00");
        assert_eq!(format_amount(dec("0.123456"), 2), "0.123");
        assert_eq!(format_amount(dec("0.0005"), 2), "0.001");
        assert_eq!(format_amount(dec("2.5"), 0), "2.5");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec("-1500.25"), 2), "-1,500.25");
        assert_eq!(format_amount(dec("-0.0001"), 2), "0.00");
    }

    #[test]
    fn test_format_feed_date() {
        assert_eq!(
            format_feed_date("2023-08-29T07:10:40.000Z"),
            "2023-08-29 07:10"
        );
        assert_eq!(format_feed_date("yesterday"), "yesterday");
    }
}
