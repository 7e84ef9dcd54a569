//! `remove` and `clear`, shared by both ledgers.

use stock_core::LedgerKind;

use crate::app::AppContext;
use crate::cli::{ClearArgs, RemoveArgs};
use crate::errors::CliError;
use crate::helpers::{confirm_destructive, resolve_entry_id};
use crate::output::ConsoleObserver;
use crate::ui::{badge, print, Badge};

pub fn handle_remove(ctx: &AppContext, kind: LedgerKind, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut book = ctx.open_book()?;
    let list_command = format!("{} list", kind.label());
    let id = match kind {
        LedgerKind::Inventory => resolve_entry_id(book.inventory_entries(), &args.id, &list_command)?,
        LedgerKind::Orders => resolve_entry_id(book.order_entries(), &args.id, &list_command)?,
    };

    book.subscribe(ConsoleObserver::new(ctx.ui_context(None), ctx.quiet()));
    let removed = match kind {
        LedgerKind::Inventory => book.inventory().remove(id)?,
        LedgerKind::Orders => book.orders().remove(id)?,
    };
    if !removed {
        return Err(CliError::not_found(
            format!("Entry {} not found", id),
            format!("Hint: Run `stock {}` to find entry IDs.", list_command),
        )
        .into());
    }
    Ok(())
}

pub fn handle_clear(ctx: &AppContext, kind: LedgerKind, args: &ClearArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(None);
    let mut book = ctx.open_book()?;
    let count = match kind {
        LedgerKind::Inventory => book.inventory_entries().len(),
        LedgerKind::Orders => book.order_entries().len(),
    };

    let prompt = format!(
        "Clear {}? This removes {}",
        kind.label(),
        super::count_label(count, "entry", "entries")
    );
    if !confirm_destructive(&ui, &prompt, args.yes)? {
        if ui.mode.is_pretty() {
            print(&ui, &badge(&ui, Badge::Warn, "Clear cancelled"));
        } else if !ui.mode.is_json() {
            println!("status=cancelled");
        }
        return Ok(());
    }

    book.subscribe(ConsoleObserver::new(ui, ctx.quiet()));
    match kind {
        LedgerKind::Inventory => book.inventory().clear()?,
        LedgerKind::Orders => book.orders().clear()?,
    }
    Ok(())
}
