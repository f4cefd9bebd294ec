use super::ui;
use crate::core::summation::{SumError, SumMethod};
use comfy_table::Cell;

/// Evaluates `n` with each requested method, or all of them when none given.
fn evaluate(n: i64, method: Option<SumMethod>) -> Vec<(SumMethod, Result<i128, SumError>)> {
    let methods = match method {
        Some(method) => vec![method],
        None => SumMethod::ALL.to_vec(),
    };
    methods
        .into_iter()
        .map(|method| (method, method.apply(n)))
        .collect()
}

pub fn run(n: i64, method: Option<SumMethod>) -> anyhow::Result<()> {
    let results = evaluate(n, method);

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Method"), ui::header_cell("Sum")]);
    for (method, result) in &results {
        let value_cell = match result {
            Ok(sum) => ui::number_cell(sum.to_string()),
            Err(_) => ui::na_cell(true),
        };
        table.add_row(vec![Cell::new(method.to_string()), value_cell]);
    }

    println!(
        "\n{}",
        ui::style_text(&format!("Sum of 1..={n}"), ui::StyleType::Title)
    );
    println!("{table}");

    for (method, result) in &results {
        if let Err(e) = result {
            println!(
                "{}",
                ui::style_text(&format!("{method}: {e}"), ui::StyleType::Error)
            );
        }
    }
    Ok(())
}
