//! # Stockroom Console
//!
//! Interactive record keeping over the `stockroom-core` repositories.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      stockroom <variant>                                │
//! │                                                                         │
//! │  warehouse (default) ──► CategoryManager   electronics + groceries     │
//! │  inventory           ──► InventoryLedger   + JSON snapshot file        │
//! │  clinic              ──► ClinicRegistry    patients + prescriptions    │
//! │                                                                         │
//! │  Every variant: numbered menu on stdout, logs on stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - TOML / environment configuration
//! - [`console`] - Prompting over any reader and writer
//! - [`menu`] - One menu loop per variant
//! - [`error`] - Console error type

pub mod config;
pub mod console;
pub mod error;
pub mod menu;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use stockroom_store::SnapshotStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::StockroomConfig;
use crate::console::Console;
use crate::error::AppResult;
use crate::menu::{ClinicMenu, InventoryMenu, WarehouseMenu};

// =============================================================================
// Command Line
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Console record keeping for stock and patients")]
pub struct Cli {
    /// Path to a stockroom.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot file used by the inventory variant
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Variant {
    /// Electronics and groceries, seeded with starter stock
    #[default]
    Warehouse,
    /// General items with save and load
    Inventory,
    /// Patients and prescriptions
    Clinic,
}

impl Variant {
    fn title(&self) -> &'static str {
        match self {
            Variant::Warehouse => "Warehouse",
            Variant::Inventory => "Inventory",
            Variant::Clinic => "Healthcare",
        }
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_core=trace` - Trace repository operations only
/// - Default: `level` from the config (normally `warn`)
///
/// Logs go to stderr so they never mix with the menu on stdout.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Runs one variant to completion, then prints the farewell line.
///
/// `today` anchors the seeded dates and new prescriptions.
pub fn run<R: BufRead, W: Write>(
    variant: Variant,
    config: &StockroomConfig,
    today: NaiveDate,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    info!(?variant, %today, "Starting console");

    match variant {
        Variant::Warehouse => WarehouseMenu::new(today)?.run(console)?,
        Variant::Inventory => {
            let store = SnapshotStore::new(config.data_file.clone())?;
            InventoryMenu::new(store).run(console)?
        }
        Variant::Clinic => ClinicMenu::new(today)?.run(console)?,
    }

    console.say(format_args!(
        "\nThank you for using the {} System!",
        variant.title()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::testing::{scripted, transcript};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_cli_defaults_to_warehouse() {
        let cli = Cli::parse_from(["stockroom"]);
        assert_eq!(cli.variant.unwrap_or_default(), Variant::Warehouse);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_flags_after_subcommand() {
        let cli = Cli::parse_from(["stockroom", "inventory", "--data-file", "ledger.json"]);
        assert_eq!(cli.variant, Some(Variant::Inventory));
        assert_eq!(cli.data_file, Some(PathBuf::from("ledger.json")));
    }

    #[test]
    fn test_run_prints_farewell() {
        let mut console = scripted(&["5"]);
        run(Variant::Clinic, &StockroomConfig::default(), today(), &mut console).unwrap();

        let out = transcript(console);
        assert!(out.starts_with("=== Healthcare Management System ==="));
        assert!(out.ends_with("\nThank you for using the Healthcare System!\n"));
    }

    #[test]
    fn test_farewell_after_end_of_input() {
        let mut console = scripted(&[]);
        run(Variant::Warehouse, &StockroomConfig::default(), today(), &mut console).unwrap();

        assert!(transcript(console).contains("Thank you for using the Warehouse System!"));
    }
}
