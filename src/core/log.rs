use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "swapcalc";

/// The HTTP stack behind the price feed; only its warnings are worth showing.
const HTTP_TARGETS: [&str; 3] = ["reqwest", "hyper", "hyper_util"];

/// Installs the global subscriber. Logging stays off unless `verbose` is set
/// or `RUST_LOG` asks for it.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "off" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(targets(verbose))
        .with(env_filter)
        .init();
}

fn targets(verbose: bool) -> Targets {
    if !verbose {
        return Targets::new().with_default(LevelFilter::OFF);
    }
    let mut filter = Targets::new().with_target(APP_TARGET, LevelFilter::DEBUG);
    for target in HTTP_TARGETS {
        filter = filter.with_target(target, LevelFilter::WARN);
    }
    filter
}
