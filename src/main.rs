use anyhow::Result;
use tracing::{metadata::LevelFilter, Level};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the demo output.
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let stdout = std::io::stdout();
    debug_demo::run(&mut stdout.lock())
}
