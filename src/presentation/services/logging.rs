use anyhow::{Context, Result};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{LevelFilter, filter_fn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn max_level(verbose: bool) -> LevelFilter {
    let baseline = if cfg!(feature = "verbose-logging") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    if !verbose {
        return baseline;
    }

    let requested = if cfg!(debug_assertions) {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };
    requested.max(baseline)
}

/// Sends this crate's events to stderr so they never interleave with prompts
/// on stdout.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_fn(|metadata| metadata.target().starts_with("winhost")));

    tracing_subscriber::registry()
        .with(max_level(verbose))
        .with(fmt_layer)
        .try_init()
        .context("logging already initialized")
}
