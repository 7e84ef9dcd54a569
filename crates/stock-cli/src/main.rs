//! Stock CLI - record goods received and customer orders, and reconcile them
//!
//! This is the command-line interface for Stock. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod export;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use stock_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{export as export_cmd, init, inventory, misc, orders, summary};
use crate::errors::{exit_code_for, split_hint};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        tracing::debug!(error = ?e, "command failed");
        let ui_ctx = ctx.ui_context(None);
        let error_msg = format!("{:#}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Inventory(command)) => {
            inventory::handle_inventory(ctx, command)?;
        }
        Some(Commands::Orders(command)) => {
            orders::handle_orders(ctx, command)?;
        }
        Some(Commands::Summary(args)) => {
            summary::handle_summary(ctx, args)?;
        }
        Some(Commands::Export(args)) => {
            export_cmd::handle_export(ctx, args)?;
        }
        Some(Commands::Completions { shell }) => {
            misc::handle_completions(*shell)?;
        }
        None => {
            println!("Stock v{}", VERSION);
            println!("\nQuickstart:");
            println!("  stock init");
            println!("  stock inventory add Apples 15");
            println!("  stock orders add --name Ana --phone 555-0101 Apples 2.50 3");
            println!("  stock summary");
            println!("\nRun `stock --help` for full usage.");
        }
    }

    Ok(())
}
