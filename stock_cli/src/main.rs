//! # stockcalc
//!
//! Command-line form host for `stock_core`: one-off weight calculations,
//! profile tables, stock codes and interactive multi-row sheets.
//!
//! Tables go to stdout (or JSON with `--json`); logs and prompts go to
//! stderr.

mod args;
mod commands;
mod logging;
mod sheet;
mod table;

use anyhow::Result;
use clap::Parser;

use crate::args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global = cli.global;

    logging::init(global.verbose);

    match cli.command {
        Commands::Weight(cmd) => commands::weight(cmd, &global),
        Commands::Profile(args) => commands::profile(args, &global),
        Commands::Sizes(args) => commands::sizes(args, &global),
        Commands::Ledger(args) => commands::ledger(args, &global),
        Commands::Code(cmd) => commands::code(cmd, &global),
        Commands::Producers => commands::producers(&global),
        Commands::Modules => commands::modules(&global),
        Commands::Sheet(args) => commands::sheet(args, &global),
    }
}
