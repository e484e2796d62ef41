//! # Stockroom
//!
//! ```text
//! stockroom [--config PATH] [--data-file PATH] [warehouse|inventory|clinic]
//! ```

use anyhow::Context;
use clap::Parser;

use stockroom_cli::config::StockroomConfig;
use stockroom_cli::console::Console;
use stockroom_cli::{init_tracing, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = StockroomConfig::load(cli.config).context("Failed to load configuration")?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    config.validate()?;

    init_tracing(&config.log_level);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let today = chrono::Local::now().date_naive();
    run(cli.variant.unwrap_or_default(), &config, today, &mut console)?;

    Ok(())
}
