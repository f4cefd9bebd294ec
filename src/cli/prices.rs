use super::ui;
use crate::core::PriceSource;
use comfy_table::Cell;

pub async fn run(source: &(dyn PriceSource + Send + Sync)) -> anyhow::Result<()> {
    let pb = ui::new_spinner("Fetching prices...");
    let prices = source.load_prices().await;
    pb.finish_and_clear();

    if prices.is_empty() {
        println!(
            "{}",
            ui::style_text("No prices available from the feed.", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Price"),
        ui::header_cell("Updated"),
    ]);
    for record in &prices {
        table.add_row(vec![
            Cell::new(&record.currency),
            ui::number_cell(record.price.to_string()),
            Cell::new(ui::format_feed_date(&record.date)),
        ]);
    }

    println!("\n{}", ui::style_text("Prices", ui::StyleType::Title));
    println!("{table}");
    println!(
        "{} {}",
        ui::style_text("Currencies:", ui::StyleType::TotalLabel),
        ui::style_text(&prices.len().to_string(), ui::StyleType::TotalValue)
    );
    Ok(())
}
