pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{PriceRecord, SumMethod, SwapInput};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Sum { n: i64, method: Option<SumMethod> },
    Prices,
    Convert(SwapInput),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("swapcalc starting...");

    match command {
        AppCommand::Sum { n, method } => cli::sum::run(n, method),
        AppCommand::Prices => {
            let (_, feed) = load_feed(config_path)?;
            cli::prices::run(&feed).await
        }
        AppCommand::Convert(input) => {
            let (config, feed) = load_feed(config_path)?;
            cli::convert::run(&feed, &input, config.swap.delay()).await
        }
    }
}

fn load_feed(config_path: Option<&str>) -> Result<(AppConfig, providers::HttpPriceFeed)> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let price_cache = Arc::new(crate::core::cache::Cache::<String, Vec<PriceRecord>>::new());
    let feed = providers::HttpPriceFeed::new(&config.feed.url, price_cache);
    Ok((config, feed))
}
